use thiserror::Error;

/// Image processing errors
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Thumbnail encoding failed: {0}")]
    Encode(String),
}
