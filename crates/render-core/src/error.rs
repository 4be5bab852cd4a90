use thiserror::Error;

/// A fault reported by a drawing surface. Rendering never fails on content.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Drawing surface fault: {0}")]
    Surface(String),
    #[error("Other rendering error: {0}")]
    Other(String),
}

