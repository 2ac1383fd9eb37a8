//! Constants for page dimensions, worksheet geometry and guide-line styling

/// Standard A4 page width in points
pub const A4_WIDTH: f32 = 595.0;

/// Standard A4 page height in points
pub const A4_HEIGHT: f32 = 842.0;

/// US Letter page width in points
pub const LETTER_WIDTH: f32 = 612.0;

/// US Letter page height in points
pub const LETTER_HEIGHT: f32 = 792.0;

/// Default page margin in points
pub const DEFAULT_MARGIN: f32 = 50.0;

/// Default worksheet font size in points
pub const DEFAULT_FONT_SIZE: f32 = 32.0;

/// Distance between consecutive baselines as a multiple of the font size
pub const DEFAULT_LINE_HEIGHT_FACTOR: f32 = 1.3;

/// Default character width ratio for text estimation
/// (average character width as a fraction of font size)
pub const DEFAULT_CHAR_WIDTH_RATIO: f32 = 0.5;

/// Top line sits this many font sizes above the baseline
pub const TOP_LINE_RATIO: f32 = 0.61;

/// Dashed midline sits this many font sizes above the baseline
pub const MID_LINE_RATIO: f32 = 0.355;

/// Dashed descender line sits this many font sizes below the baseline
pub const DESCENDER_LINE_RATIO: f32 = 0.18;

/// Stroke width of every guide line in points
pub const GUIDE_LINE_WIDTH: f32 = 1.0;

/// On/off lengths of the dashed guide lines in points
pub const GUIDE_DASH: [f32; 2] = [2.0, 2.0];

/// Solid guide lines (top line, baseline), `#d1eaff`
pub const SOLID_GUIDE_COLOR: [u8; 3] = [0xd1, 0xea, 0xff];

/// Dashed guide lines (midline, descender line), `#e0e0e0`
pub const DASHED_GUIDE_COLOR: [u8; 3] = [0xe0, 0xe0, 0xe0];

/// Default text color, `#374151`
pub const DEFAULT_TEXT_COLOR: [u8; 3] = [0x37, 0x41, 0x51];

/// Resource name of the worksheet font on every page
pub const FONT_RESOURCE_NAME: &str = "F1";

/// Standard Type1 font used when no TrueType font is embedded
pub const STANDARD_FONT: &str = "Helvetica";
