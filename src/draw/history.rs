//! Snapshot-based undo history.

use super::frame::Frame;
use super::shape::Drawable;

/// Stack of full drawable snapshots, one per committed mutation.
///
/// The top entry always mirrors the frame right after the latest commit.
/// Popped entries are discarded; there is no redo.
#[derive(Debug, Default)]
pub struct UndoHistory {
    snapshots: Vec<Vec<Drawable>>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a deep copy of the frame's current drawables.
    pub fn push(&mut self, frame: &Frame) {
        self.snapshots.push(frame.drawables.clone());
        log::debug!("Undo snapshot recorded (depth {})", self.snapshots.len());
    }

    /// Drops the latest snapshot and returns the state to restore.
    ///
    /// # Returns
    /// - `None` when the history is empty (nothing to undo)
    /// - `Some(drawables)` holding the new top snapshot, or an empty sequence
    ///   once the last entry has been popped
    pub fn undo(&mut self) -> Option<Vec<Drawable>> {
        self.snapshots.pop()?;
        Some(self.snapshots.last().cloned().unwrap_or_default())
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
