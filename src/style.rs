//! Styling structures for guide lines and text

use crate::constants::*;
use crate::error::{Result, WorksheetError};

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values should be 0.0-1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Create a color from 8-bit channels
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Parse a CSS-style hex color: `#rrggbb` or `#rgb` (the `#` is optional)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        let invalid = || WorksheetError::StyleError(format!("Invalid hex color '{hex}'"));

        if !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

        match digits.len() {
            6 => Ok(Self::rgb8(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #abc expands to #aabbcc
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                Ok(Self::rgb8(r * 17, g * 17, b * 17))
            }
            _ => Err(invalid()),
        }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    fn from_rgb8_array([r, g, b]: [u8; 3]) -> Self {
        Self::rgb8(r, g, b)
    }

    /// Light blue used for the solid guide lines
    pub fn guide_blue() -> Self {
        Self::from_rgb8_array(SOLID_GUIDE_COLOR)
    }

    /// Light gray used for the dashed guide lines
    pub fn guide_gray() -> Self {
        Self::from_rgb8_array(DASHED_GUIDE_COLOR)
    }

    /// Slate gray used for worksheet text
    pub fn slate() -> Self {
        Self::from_rgb8_array(DEFAULT_TEXT_COLOR)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Dash pattern for stroked lines
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashPattern {
    #[default]
    Solid,
    /// Alternating on/off lengths in points, starting at `phase`
    Dashed { lengths: Vec<f32>, phase: f32 },
}

impl DashPattern {
    /// Evenly dashed line, `on` points drawn then `off` points skipped
    pub fn dashed(on: f32, off: f32) -> Self {
        Self::Dashed {
            lengths: vec![on, off],
            phase: 0.0,
        }
    }

    pub fn is_solid(&self) -> bool {
        matches!(self, Self::Solid)
    }
}

/// Stroke styling for a single line
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub width: f32,
    pub dash: DashPattern,
}

impl LineStyle {
    /// Solid line of the given color and width
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            dash: DashPattern::Solid,
        }
    }

    /// Dashed line of the given color and width
    pub fn dashed(color: Color, width: f32, on: f32, off: f32) -> Self {
        Self {
            color,
            width,
            dash: DashPattern::dashed(on, off),
        }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::solid(Color::black(), GUIDE_LINE_WIDTH)
    }
}

/// Styles of the four guide lines drawn under each line of text
#[derive(Debug, Clone, PartialEq)]
pub struct GuideLineStyles {
    pub top: LineStyle,
    pub mid: LineStyle,
    pub baseline: LineStyle,
    pub descender: LineStyle,
}

impl Default for GuideLineStyles {
    fn default() -> Self {
        let solid = LineStyle::solid(Color::guide_blue(), GUIDE_LINE_WIDTH);
        let dashed = LineStyle::dashed(
            Color::guide_gray(),
            GUIDE_LINE_WIDTH,
            GUIDE_DASH[0],
            GUIDE_DASH[1],
        );
        Self {
            top: solid.clone(),
            mid: dashed.clone(),
            baseline: solid,
            descender: dashed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_matches_named_colors() {
        assert_eq!(Color::from_hex("#d1eaff").unwrap(), Color::guide_blue());
        assert_eq!(Color::from_hex("#e0e0e0").unwrap(), Color::guide_gray());
        assert_eq!(Color::from_hex("#374151").unwrap(), Color::slate());
    }

    #[test]
    fn test_from_hex_short_form() {
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::rgb(1.0, 1.0, 1.0));
        assert_eq!(Color::from_hex("000").unwrap(), Color::black());
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#gggggg").is_err());
        assert!(Color::from_hex("#ééé").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn test_default_guide_styles() {
        let styles = GuideLineStyles::default();
        assert!(styles.top.dash.is_solid());
        assert!(styles.baseline.dash.is_solid());
        assert_eq!(styles.mid.dash, DashPattern::dashed(2.0, 2.0));
        assert_eq!(styles.descender.dash, DashPattern::dashed(2.0, 2.0));
        assert_eq!(styles.top.color, Color::guide_blue());
        assert_eq!(styles.mid.color, Color::guide_gray());
        assert_eq!(styles.top.width, 1.0);
    }
}
