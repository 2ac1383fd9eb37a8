//! A renderer that records draw calls instead of producing a document

use crate::Result;
use crate::config::PageSize;
use crate::font::{FontMetrics, HeuristicMetrics};
use crate::renderer::DocumentRenderer;
use crate::style::LineStyle;
use crate::text::wrap_paragraph;

/// One call made against a [`RecordingRenderer`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetFontSize(f32),
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        style: LineStyle,
    },
    Text {
        content: String,
        x: f32,
        y: f32,
    },
    AddPage,
}

/// Records every draw call in order.
///
/// Wrapping uses the supplied [`FontMetrics`], so a recording made with the
/// same metrics as a real renderer breaks lines identically.
pub struct RecordingRenderer {
    page_size: (f32, f32),
    font_size: f32,
    metrics: Box<dyn FontMetrics>,
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new(page_size: PageSize) -> Self {
        Self::with_metrics(page_size, Box::new(HeuristicMetrics))
    }

    pub fn with_metrics(page_size: PageSize, metrics: Box<dyn FontMetrics>) -> Self {
        Self {
            page_size: page_size.dimensions(),
            font_size: 0.0,
            metrics,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Recorded text draws as (content, x, y)
    pub fn texts(&self) -> Vec<(&str, f32, f32)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { content, x, y } => Some((content.as_str(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    pub fn page_breaks(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::AddPage))
            .count()
    }
}

impl DocumentRenderer for RecordingRenderer {
    fn page_size(&self) -> (f32, f32) {
        self.page_size
    }

    fn set_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
        self.commands.push(DrawCommand::SetFontSize(font_size));
    }

    fn wrap_text(&mut self, text: &str, max_width: f32) -> Result<Vec<String>> {
        Ok(wrap_paragraph(
            text,
            max_width,
            self.font_size,
            self.metrics.as_ref(),
        ))
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, style: &LineStyle) -> Result<()> {
        self.commands.push(DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            style: style.clone(),
        });
        Ok(())
    }

    fn draw_text(&mut self, content: &str, x: f32, y: f32) -> Result<()> {
        self.commands.push(DrawCommand::Text {
            content: content.to_string(),
            x,
            y,
        });
        Ok(())
    }

    fn add_page(&mut self) -> Result<()> {
        self.commands.push(DrawCommand::AddPage);
        Ok(())
    }
}

impl std::fmt::Debug for RecordingRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingRenderer")
            .field("page_size", &self.page_size)
            .field("font_size", &self.font_size)
            .field("commands", &self.commands.len())
            .finish()
    }
}
