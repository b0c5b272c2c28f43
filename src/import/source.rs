//! Where imported image bytes come from.

use super::types::ImportError;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::task;

/// Supplies raw image bytes (a file picker, a drop target, a test fixture).
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Reads the complete encoded image.
    async fn read(&self) -> Result<Vec<u8>, ImportError>;

    /// Human-readable origin used in log output.
    fn describe(&self) -> String;
}

/// Reads an image file on the blocking thread pool.
#[derive(Debug, Clone)]
pub struct FileImageSource {
    pub path: PathBuf,
}

impl FileImageSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ImageSource for FileImageSource {
    async fn read(&self) -> Result<Vec<u8>, ImportError> {
        let path = self.path.clone();
        task::spawn_blocking(move || std::fs::read(path))
            .await
            .map_err(|e| ImportError::Task(format!("Read task failed: {}", e)))?
            .map_err(ImportError::from)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Bytes that are already in memory.
#[derive(Debug, Clone)]
pub struct MemoryImageSource {
    pub bytes: Vec<u8>,
}

#[async_trait]
impl ImageSource for MemoryImageSource {
    async fn read(&self) -> Result<Vec<u8>, ImportError> {
        Ok(self.bytes.clone())
    }

    fn describe(&self) -> String {
        format!("<memory, {} bytes>", self.bytes.len())
    }
}
