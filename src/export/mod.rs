//! Export of the composed drawing as a PNG.
//!
//! This module provides:
//! - Off-screen composition of the current scene plus a watermark
//! - PNG serialization
//! - Saving to a configured directory with timestamped file names

pub mod compositor;
pub mod file;
pub mod types;

pub use compositor::{ExportOptions, WatermarkStyle, export_png};
pub use file::{ExportSaveConfig, save_export, save_export_to};
pub use types::ExportError;
