//! Drawing model and Cairo render pipeline.
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Drawable`]: freehand strokes, shapes and cut regions
//! - [`Frame`]: ordered container for all drawables in the session
//! - [`UndoHistory`]: snapshot stack for linear undo
//! - [`ImagePlacement`]: the imported background image and its position
//! - [`ViewTransform`]: uniform zoom between device and model space
//! - Rendering functions for Cairo-based output

pub mod canvas;
pub mod color;
pub mod eraser;
pub mod font;
pub mod frame;
pub mod history;
pub mod image;
pub mod render;
pub mod shape;
pub mod transform;

// Re-export commonly used types at module level
pub use canvas::Canvas;
pub use color::Color;
pub use font::FontDescriptor;
pub use frame::{Frame, StrokeBuffer};
pub use history::UndoHistory;
pub use image::ImagePlacement;
pub use render::{Scene, redraw, render_drawable, render_drawables};
pub use shape::{Drawable, ShapeKind, StrokeKind};
pub use transform::ViewTransform;

#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
