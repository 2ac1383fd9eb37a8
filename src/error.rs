//! Error types for the lopdf-worksheet library

use thiserror::Error;

/// Result type alias using WorksheetError
pub type Result<T> = std::result::Result<T, WorksheetError>;

/// Errors that can occur while laying out or rendering a worksheet
#[derive(Debug, Error)]
pub enum WorksheetError {
    /// Error from the underlying lopdf library
    #[error("PDF operation failed: {0}")]
    PdfError(#[from] lopdf::Error),

    /// Failure writing the finished document
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Worksheet configuration rejected by validation
    #[error("Invalid worksheet configuration: {0}")]
    InvalidConfig(String),

    /// Invalid styling configuration
    #[error("Invalid style configuration: {0}")]
    StyleError(String),

    /// Text measurement or encoding error
    #[error("Text rendering failed: {0}")]
    TextError(String),

    /// Invalid dimensions
    #[error("Invalid dimensions: {0}")]
    DimensionError(String),

    /// Page not found
    #[error("Page with ID {0:?} not found")]
    PageNotFound(lopdf::ObjectId),

    /// The document structure could not be extended
    #[error("Drawing failed: {0}")]
    DrawingError(String),
}
