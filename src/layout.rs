//! Worksheet page layout: wrapping, guide lines and page breaks

use crate::Result;
use crate::config::WorksheetConfig;
use crate::error::WorksheetError;
use crate::guides::GuideLineSet;
use crate::renderer::DocumentRenderer;
use crate::text::split_paragraphs;
use tracing::{debug, instrument, trace};

/// What a layout pass produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSummary {
    /// Pages touched, including the renderer's initial page
    pub pages: usize,
    /// Wrapped lines drawn (each with its guide lines)
    pub lines: usize,
    /// Baseline the next line would have used
    pub final_y: f32,
}

/// Lays out worksheet text onto a [`DocumentRenderer`]
#[derive(Debug, Clone, Copy)]
pub struct WorksheetLayoutEngine<'a> {
    config: &'a WorksheetConfig,
}

impl<'a> WorksheetLayoutEngine<'a> {
    pub fn new(config: &'a WorksheetConfig) -> Self {
        Self { config }
    }

    /// Draw `text` as ruled worksheet lines.
    ///
    /// Each newline-separated paragraph is wrapped by the renderer to the width
    /// between the margins. Every wrapped line, including empty ones, gets its
    /// four guide lines and a text draw at the current baseline. A new page is
    /// started before drawing whenever the baseline has passed the bottom margin.
    #[instrument(skip(self, text, renderer), fields(font_size = self.config.font_size, text_len = text.len()))]
    pub fn layout<R: DocumentRenderer + ?Sized>(
        &self,
        text: &str,
        renderer: &mut R,
    ) -> Result<LayoutSummary> {
        let config = self.config;
        config.validate()?;

        let font_size = config.font_size;
        let margin = config.margin;
        let line_height = config.line_height();
        let first_baseline = config.first_baseline();

        // The renderer's page, not the configured one, decides where lines land
        let (page_width, page_height) = renderer.page_size();
        let max_width = page_width - margin * 2.0;
        let bottom_limit = page_height - margin;

        if !(max_width > 0.0) {
            return Err(WorksheetError::DimensionError(format!(
                "Margin {margin} leaves no printable width on the renderer's {page_width}pt wide page"
            )));
        }
        if !(first_baseline <= bottom_limit) {
            return Err(WorksheetError::DimensionError(format!(
                "First baseline {first_baseline} lies below the bottom margin of the renderer's {page_height}pt tall page"
            )));
        }

        let mut summary = LayoutSummary {
            pages: 1,
            lines: 0,
            final_y: first_baseline,
        };

        let paragraphs = split_paragraphs(text);
        if paragraphs.is_empty() {
            debug!("No text to lay out");
            return Ok(summary);
        }

        renderer.set_font_size(font_size);

        debug!(
            "Laying out {} paragraphs on {}x{} pages, max line width {}",
            paragraphs.len(),
            page_width,
            page_height,
            max_width
        );

        let mut y = first_baseline;

        for paragraph in paragraphs {
            let mut wrapped = renderer.wrap_text(paragraph, max_width)?;
            if wrapped.is_empty() {
                // A paragraph always occupies at least one ruled line
                wrapped.push(String::new());
            }

            for line in &wrapped {
                if y > bottom_limit {
                    renderer.add_page()?;
                    summary.pages += 1;
                    y = first_baseline;
                    debug!("Started page {}", summary.pages);
                }

                let guides = GuideLineSet::at_baseline(
                    y,
                    font_size,
                    margin,
                    page_width - margin,
                    &config.guide_styles,
                );
                for guide in guides.iter() {
                    renderer.draw_line(guide.x_start, guide.y, guide.x_end, guide.y, &guide.style)?;
                }

                renderer.draw_text(line, margin, y)?;
                trace!("Line {} at y={}: {:?}", summary.lines, y, line);

                summary.lines += 1;
                y += line_height;
            }
        }

        summary.final_y = y;
        debug!(
            "Laid out {} lines over {} pages",
            summary.lines, summary.pages
        );
        Ok(summary)
    }
}

/// Lay out `text` with `config` onto `renderer`
pub fn layout<R: DocumentRenderer + ?Sized>(
    text: &str,
    config: &WorksheetConfig,
    renderer: &mut R,
) -> Result<LayoutSummary> {
    WorksheetLayoutEngine::new(config).layout(text, renderer)
}
