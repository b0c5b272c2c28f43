//! Input handling and tool state machine.
//!
//! This module translates pointer events and tool selections from the host UI
//! into drawing actions. It owns the session state (model, history, image,
//! zoom, current tool settings) and the state machine for in-progress gestures.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::PointerEvent;
pub use state::{DrawingState, InputState};
pub use tool::CursorTool;
