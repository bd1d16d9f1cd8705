/// Failure while producing PDF bytes.
#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    #[error("failed to load font: {0}")]
    Font(String),

    #[error("failed to write pdf: {0}")]
    Write(String),
}
