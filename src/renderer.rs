//! The drawing capability the layout engine is written against

use crate::Result;
use crate::style::LineStyle;

/// A paginated document the worksheet layout can draw into.
///
/// Coordinates are in points with the origin at the top-left corner of the
/// current page and y increasing downward. Implementations translate to
/// whatever their output format uses.
pub trait DocumentRenderer {
    /// (width, height) of the current page in points
    fn page_size(&self) -> (f32, f32);

    /// Font size used by subsequent `wrap_text` and `draw_text` calls
    fn set_font_size(&mut self, font_size: f32);

    /// Word-wrap `text` so every returned line fits within `max_width`.
    ///
    /// Empty input must yield one empty line.
    fn wrap_text(&mut self, text: &str, max_width: f32) -> Result<Vec<String>>;

    /// Stroke a straight line from (x1, y1) to (x2, y2)
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, style: &LineStyle) -> Result<()>;

    /// Draw `content` with its baseline starting at (x, y)
    fn draw_text(&mut self, content: &str, x: f32, y: f32) -> Result<()>;

    /// Start a new page; later drawing goes to it
    fn add_page(&mut self) -> Result<()>;
}
