//! Error type for export operations.

use thiserror::Error;

/// Errors that can occur while composing or saving an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Export surface unavailable: {0}")]
    Surface(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("Failed to save export: {0}")]
    Save(#[from] std::io::Error),
}

impl From<cairo::IoError> for ExportError {
    fn from(err: cairo::IoError) -> Self {
        ExportError::Encode(err.to_string())
    }
}
