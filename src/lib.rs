//! Handwriting practice worksheets for PDFs built on lopdf
//!
//! Text is split into paragraphs, word-wrapped to the page width and drawn on
//! ruled guide lines (top line, dashed midline, baseline, dashed descender
//! line), starting new pages as needed. The layout engine only talks to a
//! [`DocumentRenderer`], so it can drive the bundled [`LopdfRenderer`] or a
//! [`RecordingRenderer`] for dry runs.

use lopdf::Document;
use std::path::Path;
use tracing::{debug, instrument};

pub mod config;
pub mod constants;
mod drawing;
mod drawing_utils;
pub mod error;
pub mod font;
pub mod guides;
pub mod layout;
pub mod record;
pub mod renderer;
pub mod style;
pub mod text;

pub use config::{PageSize, WorksheetConfig};
pub use drawing::LopdfRenderer;
pub use error::{Result, WorksheetError};
#[cfg(feature = "ttf-parser")]
pub use font::{EmbeddedFont, TtfFontMetrics};
pub use font::{FontMetrics, HelveticaMetrics, HeuristicMetrics};
pub use guides::{GuideKind, GuideLine, GuideLineSet};
pub use layout::{LayoutSummary, WorksheetLayoutEngine};
pub use record::{DrawCommand, RecordingRenderer};
pub use renderer::DocumentRenderer;
pub use style::{Color, DashPattern, GuideLineStyles, LineStyle};

/// A worksheet to render: the practice text plus how to lay it out
#[derive(Debug, Clone, Default)]
pub struct Worksheet {
    pub text: String,
    pub config: WorksheetConfig,
    /// Font to embed; the standard Helvetica font is used when None
    #[cfg(feature = "ttf-parser")]
    pub font: Option<EmbeddedFont>,
}

impl Worksheet {
    /// Create a worksheet with the default configuration
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_config(mut self, config: WorksheetConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the font size in points
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.config.font_size = font_size;
        self
    }

    /// Draw the text with an embedded TrueType font (e.g. a dotted tracing font)
    #[cfg(feature = "ttf-parser")]
    pub fn with_embedded_font<S: Into<String>>(mut self, name: S, metrics: TtfFontMetrics) -> Self {
        self.font = Some(EmbeddedFont::new(name, metrics));
        self
    }

    fn renderer(&self) -> Result<LopdfRenderer> {
        #[cfg(feature = "ttf-parser")]
        if let Some(ref font) = self.font {
            return LopdfRenderer::with_embedded_font(
                self.config.page_size,
                self.config.text_color,
                font,
            );
        }
        LopdfRenderer::new(self.config.page_size, self.config.text_color)
    }

    /// Lay out the worksheet and return the finished PDF document
    #[instrument(skip(self), fields(text_len = self.text.len(), font_size = self.config.font_size))]
    pub fn render(&self) -> Result<Document> {
        let mut renderer = self.renderer()?;
        let summary = WorksheetLayoutEngine::new(&self.config).layout(&self.text, &mut renderer)?;
        debug!(
            "Rendered {} lines on {} pages",
            summary.lines, summary.pages
        );

        renderer.finish()
    }

    /// Render and serialise the PDF
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut doc = self.render()?;
        doc.compress();
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;
        Ok(bytes)
    }

    /// Render and write the PDF to `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path.as_ref(), bytes)?;
        debug!("Saved worksheet to {}", path.as_ref().display());
        Ok(())
    }

    /// Lay out the worksheet without producing a PDF, returning the draw calls
    pub fn preview(&self) -> Result<Vec<DrawCommand>> {
        let mut renderer = self.preview_renderer();
        WorksheetLayoutEngine::new(&self.config).layout(&self.text, &mut renderer)?;
        Ok(renderer.into_commands())
    }

    fn preview_renderer(&self) -> RecordingRenderer {
        #[cfg(feature = "ttf-parser")]
        if let Some(ref font) = self.font {
            return RecordingRenderer::with_metrics(
                self.config.page_size,
                Box::new(font.metrics.clone()),
            );
        }
        RecordingRenderer::with_metrics(self.config.page_size, Box::new(HelveticaMetrics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worksheet_builder() {
        let worksheet = Worksheet::new("abc").with_font_size(40.0);
        assert_eq!(worksheet.text, "abc");
        assert_eq!(worksheet.config.font_size, 40.0);
        assert_eq!(worksheet.config.margin, 50.0);
    }

    #[test]
    fn test_render_produces_pages() {
        let text = vec!["practice"; 40].join("\n");
        let doc = Worksheet::new(text).with_font_size(20.0).render().unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn test_empty_worksheet_is_a_single_blank_page() {
        let doc = Worksheet::new("").render().unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_to_bytes_is_a_pdf() {
        let bytes = Worksheet::new("Hello").to_bytes().unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        let loaded = Document::load_mem(&bytes).unwrap();
        assert_eq!(loaded.get_pages().len(), 1);
    }

    #[test]
    fn test_invalid_font_size_is_rejected() {
        let result = Worksheet::new("Hello").with_font_size(-1.0).render();
        assert!(matches!(result, Err(WorksheetError::InvalidConfig(_))));
    }

    #[test]
    fn test_preview_matches_layout() {
        let commands = Worksheet::new("a\nb").with_font_size(20.0).preview().unwrap();
        let texts = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { .. }))
            .count();
        let lines = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count();
        assert_eq!(texts, 2);
        assert_eq!(lines, 8);
    }

    #[test]
    fn test_save_writes_file() {
        let path = std::env::temp_dir().join(format!(
            "lopdf-worksheet-test-{}.pdf",
            std::process::id()
        ));
        Worksheet::new("Save me").save(&path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        std::fs::remove_file(&path).unwrap();
    }
}
