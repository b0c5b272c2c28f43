//! Background image import.
//!
//! Image bytes arrive from an [`ImageSource`], are decoded off the session
//! thread, and are delivered once through a [`PendingImage`]. Only then does
//! the session turn them into a Cairo surface and place them.

pub mod decode;
pub mod loader;
pub mod source;
pub mod types;

pub use decode::{DecodedImage, decode_image};
pub use loader::{ImageLoader, PendingImage, load_image};
pub use source::{FileImageSource, ImageSource, MemoryImageSource};
pub use types::ImportError;
