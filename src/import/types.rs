//! Error type for image import.

use thiserror::Error;

/// Errors that can occur while reading or decoding an imported image.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to read image: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Image too large: {width}x{height}")]
    TooLarge { width: u32, height: u32 },

    #[error("Failed to create image surface: {0}")]
    Surface(#[from] cairo::Error),

    #[error("Image loader task failed: {0}")]
    Task(String),
}
