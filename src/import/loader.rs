//! Asynchronous image loading with a single-shot completion.

use super::decode::{DecodedImage, decode_image};
use super::source::ImageSource;
use super::types::ImportError;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task;

/// Reads and decodes an image; decoding runs on the blocking pool.
pub async fn load_image(source: Arc<dyn ImageSource>) -> Result<DecodedImage, ImportError> {
    log::info!("Loading image from {}", source.describe());
    let bytes = source.read().await?;
    task::spawn_blocking(move || decode_image(&bytes))
        .await
        .map_err(|e| ImportError::Task(format!("Decode task failed: {}", e)))?
}

/// Spawns image loads and hands back their completions.
///
/// The session never sees partial results: the completion carries either the
/// fully decoded image or the error, exactly once.
#[derive(Clone)]
pub struct ImageLoader {
    runtime: tokio::runtime::Handle,
}

impl ImageLoader {
    pub fn new(runtime: tokio::runtime::Handle) -> Self {
        Self { runtime }
    }

    /// Starts loading `source` in the background.
    pub fn spawn(&self, source: Arc<dyn ImageSource>) -> PendingImage {
        let (tx, rx) = oneshot::channel();
        self.runtime.spawn(async move {
            let result = load_image(source).await;
            if let Err(err) = &result {
                log::error!("Image import failed: {}", err);
            }
            if tx.send(result).is_err() {
                log::debug!("Image completion dropped; receiver went away");
            }
        });
        PendingImage { rx }
    }
}

/// Completion handle for one image load.
#[derive(Debug)]
pub struct PendingImage {
    rx: oneshot::Receiver<Result<DecodedImage, ImportError>>,
}

impl PendingImage {
    /// Waits for the load to finish.
    pub async fn wait(self) -> Result<DecodedImage, ImportError> {
        self.rx
            .await
            .map_err(|_| ImportError::Task("Image loader stopped".to_string()))?
    }

    /// Non-blocking poll for event loops; `None` while still loading.
    pub fn try_take(&mut self) -> Option<Result<DecodedImage, ImportError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(Err(ImportError::Task(
                "Image loader stopped".to_string(),
            ))),
        }
    }
}
