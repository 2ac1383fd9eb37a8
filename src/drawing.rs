//! PDF drawing backend: a [`DocumentRenderer`] over a lopdf document

use crate::Result;
use crate::config::PageSize;
use crate::constants::{FONT_RESOURCE_NAME, STANDARD_FONT};
use crate::drawing_utils;
use crate::error::WorksheetError;
use crate::font::{FontMetrics, HelveticaMetrics};
use crate::renderer::DocumentRenderer;
use crate::style::{Color, LineStyle};
use crate::text::wrap_paragraph;
use lopdf::{
    Document, Object, ObjectId, StringFormat,
    content::{Content, Operation},
    dictionary,
};
use tracing::{debug, trace};

/// Renders worksheet draw calls into a new lopdf [`Document`].
///
/// All pages share one Resources dictionary holding the worksheet font as
/// `F1`. Operations are buffered for the current page and written to its
/// content stream when the next page starts or on [`LopdfRenderer::finish`].
pub struct LopdfRenderer {
    doc: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    pending: Vec<Operation>,
    /// Stroke style currently in effect on the page, to skip redundant state changes
    current_stroke: Option<LineStyle>,
    page_size: (f32, f32),
    font_size: f32,
    text_color: Color,
    metrics: Box<dyn FontMetrics>,
}

impl LopdfRenderer {
    /// Renderer using the standard Helvetica Type1 font
    pub fn new(page_size: PageSize, text_color: Color) -> Result<Self> {
        let mut doc = Document::with_version("1.5");
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => STANDARD_FONT,
            "Encoding" => "WinAnsiEncoding",
        });
        Self::with_document(doc, font_id, page_size, text_color, Box::new(HelveticaMetrics))
    }

    /// Renderer drawing with an embedded TrueType font
    #[cfg(feature = "ttf-parser")]
    pub fn with_embedded_font(
        page_size: PageSize,
        text_color: Color,
        font: &crate::font::EmbeddedFont,
    ) -> Result<Self> {
        let mut doc = Document::with_version("1.5");
        let font_id = crate::font::embed_ttf_font(&mut doc, &font.metrics, &font.name)?;
        Self::with_document(
            doc,
            font_id,
            page_size,
            text_color,
            Box::new(font.metrics.clone()),
        )
    }

    fn with_document(
        mut doc: Document,
        font_id: ObjectId,
        page_size: PageSize,
        text_color: Color,
        metrics: Box<dyn FontMetrics>,
    ) -> Result<Self> {
        let (width, height) = page_size.dimensions();

        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                FONT_RESOURCE_NAME => font_id,
            },
        });

        let pages_id = doc.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => Vec::<Object>::new(),
            "Count" => 0,
            "MediaBox" => drawing_utils::media_box(width, height),
        });

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut renderer = Self {
            doc,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            pending: Vec::new(),
            current_stroke: None,
            page_size: (width, height),
            font_size: 0.0,
            text_color,
            metrics,
        };
        renderer.append_page()?;
        Ok(renderer)
    }

    /// Number of pages created so far
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Flush the last page and hand over the finished document
    pub fn finish(mut self) -> Result<Document> {
        self.flush_page()?;
        debug!("Finished worksheet with {} pages", self.page_ids.len());
        Ok(self.doc)
    }

    /// Create a page after the last one and make it current
    fn append_page(&mut self) -> Result<ObjectId> {
        let (width, height) = self.page_size;
        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => drawing_utils::media_box(width, height),
            "Resources" => self.resources_id,
        });

        let Ok(Object::Dictionary(pages_dict)) = self.doc.get_object_mut(self.pages_id) else {
            return Err(WorksheetError::PageNotFound(self.pages_id));
        };
        let Ok(Object::Array(kids)) = pages_dict.get_mut(b"Kids") else {
            return Err(WorksheetError::DrawingError(
                "Pages object has no Kids array".to_string(),
            ));
        };
        kids.push(page_id.into());

        self.page_ids.push(page_id);
        pages_dict.set("Count", Object::Integer(self.page_ids.len() as i64));

        self.current_stroke = None;
        trace!("Created page {:?}", page_id);
        Ok(page_id)
    }

    /// Write buffered operations to the current page's content stream
    fn flush_page(&mut self) -> Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }

        let page_id = *self.page_ids.last().ok_or_else(|| {
            WorksheetError::DrawingError("No page to draw on".to_string())
        })?;

        let content = Content {
            operations: std::mem::take(&mut self.pending),
        };
        debug!(
            "Adding {} operations to page {:?}",
            content.operations.len(),
            page_id
        );

        let content_bytes = content.encode()?;
        self.doc.add_page_contents(page_id, content_bytes)?;
        Ok(())
    }

    fn apply_stroke(&mut self, style: &LineStyle) {
        if self.current_stroke.as_ref() == Some(style) {
            return;
        }
        self.pending
            .extend(drawing_utils::set_stroke_style(style.color, style.width));
        self.pending
            .push(drawing_utils::set_dash_pattern(&style.dash));
        self.current_stroke = Some(style.clone());
    }
}

impl DocumentRenderer for LopdfRenderer {
    fn page_size(&self) -> (f32, f32) {
        self.page_size
    }

    fn set_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
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
        let page_height = self.page_size.1;
        self.apply_stroke(style);
        self.pending.extend(drawing_utils::draw_line(
            x1,
            drawing_utils::to_pdf_y(page_height, y1),
            x2,
            drawing_utils::to_pdf_y(page_height, y2),
        ));
        Ok(())
    }

    fn draw_text(&mut self, content: &str, x: f32, y: f32) -> Result<()> {
        if content.is_empty() {
            return Ok(());
        }

        let format = if self.metrics.uses_glyph_ids() {
            StringFormat::Hexadecimal
        } else {
            StringFormat::Literal
        };
        let encoded = Object::String(self.metrics.encode_text(content), format);

        self.pending.extend(drawing_utils::draw_text(
            FONT_RESOURCE_NAME,
            self.font_size,
            self.text_color,
            x,
            drawing_utils::to_pdf_y(self.page_size.1, y),
            encoded,
        ));
        Ok(())
    }

    fn add_page(&mut self) -> Result<()> {
        self.flush_page()?;
        self.append_page()?;
        Ok(())
    }
}

impl std::fmt::Debug for LopdfRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LopdfRenderer")
            .field("pages", &self.page_ids.len())
            .field("pending_operations", &self.pending.len())
            .field("page_size", &self.page_size)
            .field("font_size", &self.font_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorksheetConfig;
    use crate::layout::layout;

    fn render(text: &str, config: &WorksheetConfig) -> Document {
        let mut renderer = LopdfRenderer::new(config.page_size, config.text_color).unwrap();
        layout(text, config, &mut renderer).unwrap();
        renderer.finish().unwrap()
    }

    fn page_operations(doc: &Document, page_number: u32) -> Vec<Operation> {
        let pages = doc.get_pages();
        let page_id = pages[&page_number];
        let bytes = doc.get_page_content(page_id).unwrap();
        Content::decode(&bytes).unwrap().operations
    }

    #[test]
    fn test_new_renderer_has_one_page() {
        let renderer = LopdfRenderer::new(PageSize::Letter, Color::slate()).unwrap();
        assert_eq!(renderer.page_count(), 1);
        let doc = renderer.finish().unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_page_breaks_become_pdf_pages() {
        let config = WorksheetConfig::new().with_font_size(20.0);
        let text = vec!["line"; 60].join("\n");
        let doc = render(&text, &config);
        // 26 lines fit on a Letter page at 20pt
        assert_eq!(doc.get_pages().len(), 3);
    }

    #[test]
    fn test_content_contains_guides_and_text() {
        let config = WorksheetConfig::new().with_font_size(20.0);
        let doc = render("Hello", &config);
        let ops = page_operations(&doc, 1);

        let count = |name: &str| ops.iter().filter(|op| op.operator == name).count();
        assert_eq!(count("S"), 4);
        assert_eq!(count("Tj"), 1);
        // Solid, dashed, solid, dashed
        assert_eq!(count("d"), 4);
        assert!(count("Tf") >= 1);
    }

    #[test]
    fn test_coordinates_flip_to_pdf_space() {
        let config = WorksheetConfig::new().with_font_size(20.0);
        let doc = render("Hello", &config);
        let ops = page_operations(&doc, 1);

        // Baseline of the first line is 70pt from the top of a 792pt page
        let td = ops.iter().find(|op| op.operator == "Td").unwrap();
        let y = td.operands[1].as_float().unwrap();
        assert!((y - 722.0).abs() < 0.01, "text y was {y}");

        // The first guide line is the top line, 0.61 * 20 above the baseline
        let first_move = ops.iter().find(|op| op.operator == "m").unwrap();
        let y = first_move.operands[1].as_float().unwrap();
        assert!((y - (722.0 + 12.2)).abs() < 0.01, "top line y was {y}");
    }

    #[test]
    fn test_standard_font_wraps_with_helvetica_widths() {
        // W is 0.944em, so 27 fit in 512pt at 20pt: 60 W's need three lines
        let config = WorksheetConfig::new().with_font_size(20.0);
        let doc = render(&"W".repeat(60), &config);
        let ops = page_operations(&doc, 1);
        let shown: Vec<usize> = ops
            .iter()
            .filter(|op| op.operator == "Tj")
            .map(|op| match &op.operands[0] {
                Object::String(bytes, _) => bytes.len(),
                _ => 0,
            })
            .collect();
        assert_eq!(shown, vec![27, 27, 6]);
    }

    #[test]
    fn test_blank_line_draws_guides_only() {
        let config = WorksheetConfig::new().with_font_size(20.0);
        let doc = render("\n", &config);
        let ops = page_operations(&doc, 1);
        assert_eq!(ops.iter().filter(|op| op.operator == "S").count(), 8);
        assert_eq!(ops.iter().filter(|op| op.operator == "Tj").count(), 0);
    }

    #[test]
    fn test_document_round_trips_through_bytes() {
        let config = WorksheetConfig::new().with_font_size(24.0);
        let mut doc = render("Trace these letters\n\nabc", &config);
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();

        let loaded = Document::load_mem(&bytes).unwrap();
        assert_eq!(loaded.get_pages().len(), 1);
    }

    #[cfg(feature = "ttf-parser")]
    #[test]
    fn test_embedded_font_encodes_glyph_ids() {
        let Some(font_data) = crate::font::load_test_font() else {
            eprintln!("Skipping test: no system font found");
            return;
        };
        let metrics = crate::font::TtfFontMetrics::new(font_data).unwrap();
        let font = crate::font::EmbeddedFont::new("WorksheetTest", metrics);
        let config = WorksheetConfig::new().with_font_size(20.0);

        let mut renderer =
            LopdfRenderer::with_embedded_font(config.page_size, config.text_color, &font).unwrap();
        layout("abc", &config, &mut renderer).unwrap();
        let doc = renderer.finish().unwrap();

        let ops = page_operations(&doc, 1);
        let tj = ops.iter().find(|op| op.operator == "Tj").unwrap();
        let Object::String(bytes, _) = &tj.operands[0] else {
            panic!("Tj operand should be a string");
        };
        assert_eq!(bytes.len(), 6);
    }
}
