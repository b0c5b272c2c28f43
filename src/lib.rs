//! Library exports for the sketchpad annotation engine.
//!
//! Exposes the drawing model, render pipeline, session state machine, image
//! import and export compositor so that hosts (the headless CLI, a GUI shell,
//! tests) drive the same code paths.

pub mod config;
pub mod draw;
pub mod export;
pub mod import;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
pub use input::{CursorTool, InputState, PointerEvent};
