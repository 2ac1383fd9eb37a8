//! Worksheet configuration

use crate::constants::*;
use crate::error::{Result, WorksheetError};
use crate::style::{Color, GuideLineStyles};

/// Page format in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    Letter,
    A4,
    Custom {
        width: f32,
        height: f32,
    },
}

impl PageSize {
    /// (width, height) in points
    pub fn dimensions(&self) -> (f32, f32) {
        match *self {
            Self::Letter => (LETTER_WIDTH, LETTER_HEIGHT),
            Self::A4 => (A4_WIDTH, A4_HEIGHT),
            Self::Custom { width, height } => (width, height),
        }
    }

    pub fn width(&self) -> f32 {
        self.dimensions().0
    }

    pub fn height(&self) -> f32 {
        self.dimensions().1
    }
}

/// Settings for one worksheet generation run
#[derive(Debug, Clone, PartialEq)]
pub struct WorksheetConfig {
    pub font_size: f32,
    pub margin: f32,
    pub page_size: PageSize,
    /// Baseline-to-baseline distance as a multiple of `font_size`
    pub line_height_factor: f32,
    pub text_color: Color,
    pub guide_styles: GuideLineStyles,
}

impl Default for WorksheetConfig {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            margin: DEFAULT_MARGIN,
            page_size: PageSize::default(),
            line_height_factor: DEFAULT_LINE_HEIGHT_FACTOR,
            text_color: Color::slate(),
            guide_styles: GuideLineStyles::default(),
        }
    }
}

impl WorksheetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font size in points
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the margin on all four sides in points
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_line_height_factor(mut self, factor: f32) -> Self {
        self.line_height_factor = factor;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_guide_styles(mut self, styles: GuideLineStyles) -> Self {
        self.guide_styles = styles;
        self
    }

    /// Distance between consecutive baselines in points
    pub fn line_height(&self) -> f32 {
        self.font_size * self.line_height_factor
    }

    /// Baseline of the first line on every page
    pub fn first_baseline(&self) -> f32 {
        self.margin + self.font_size
    }

    /// Width available to text between the left and right margins
    pub fn max_line_width(&self) -> f32 {
        self.page_size.width() - self.margin * 2.0
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(WorksheetError::InvalidConfig(format!(
                "Font size must be a positive number, got {}",
                self.font_size
            )));
        }

        if !self.line_height_factor.is_finite() || self.line_height_factor <= 0.0 {
            return Err(WorksheetError::InvalidConfig(format!(
                "Line height factor must be positive, got {}",
                self.line_height_factor
            )));
        }

        let (width, height) = self.page_size.dimensions();
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(WorksheetError::DimensionError(format!(
                "Page size {width}x{height} is not a valid page"
            )));
        }

        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(WorksheetError::DimensionError(format!(
                "Margin must be non-negative, got {}",
                self.margin
            )));
        }

        if self.max_line_width() <= 0.0 {
            return Err(WorksheetError::DimensionError(format!(
                "Margin {} leaves no printable width on a {width}pt wide page",
                self.margin
            )));
        }

        // A first baseline below the bottom margin would break the page on every line
        if self.first_baseline() > height - self.margin {
            return Err(WorksheetError::DimensionError(format!(
                "Font size {} does not fit between margins on a {height}pt tall page",
                self.font_size
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WorksheetConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.margin, 50.0);
        assert_eq!(config.line_height_factor, 1.3);
        assert_eq!(config.page_size.dimensions(), (612.0, 792.0));
    }

    #[test]
    fn test_derived_geometry() {
        let config = WorksheetConfig::new().with_font_size(20.0);
        assert_eq!(config.first_baseline(), 70.0);
        assert_eq!(config.max_line_width(), 512.0);
        assert!((config.line_height() - 26.0).abs() < 1e-4);
    }

    #[test]
    fn test_rejects_non_positive_font_size() {
        assert!(WorksheetConfig::new().with_font_size(0.0).validate().is_err());
        assert!(WorksheetConfig::new().with_font_size(-4.0).validate().is_err());
        assert!(WorksheetConfig::new().with_font_size(f32::NAN).validate().is_err());
    }

    #[test]
    fn test_rejects_font_taller_than_page() {
        let config = WorksheetConfig::new().with_font_size(700.0);
        assert!(matches!(
            config.validate(),
            Err(WorksheetError::DimensionError(_))
        ));
    }

    #[test]
    fn test_rejects_margin_wider_than_page() {
        let config = WorksheetConfig::new().with_margin(400.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_custom_page_size() {
        let config = WorksheetConfig::new().with_page_size(PageSize::Custom {
            width: 300.0,
            height: 400.0,
        });
        assert_eq!(config.max_line_width(), 200.0);
        assert!(config.validate().is_ok());
    }
}
