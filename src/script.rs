//! Gesture scripts for headless sessions.
//!
//! A script is a TOML file listing UI actions in order, one `[[step]]` table
//! each, tagged by `action`:
//!
//! ```toml
//! [[step]]
//! action = "shape-tool"
//! kind = "circle"
//!
//! [[step]]
//! action = "down"
//! x = 100.0
//! y = 100.0
//!
//! [[step]]
//! action = "move"
//! x = 140.0
//! y = 130.0
//!
//! [[step]]
//! action = "up"
//! ```

use crate::draw::ShapeKind;
use crate::input::{CursorTool, InputState, PointerEvent};
use crate::util;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a gesture script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid gesture script: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One UI action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    CursorTool { tool: CursorTool },
    ShapeTool { kind: ShapeKind },
    /// Palette name or `#RRGGBB`
    Color { value: String },
    LineWidth { value: f64 },
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Leave,
    Undo,
    ZoomIn,
    ZoomOut,
    /// Drags the image by a delta; ignored unless the pointer tool is active
    MoveImage { dx: f64, dy: f64 },
}

/// Ordered list of steps.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

impl Script {
    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = std::fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let script = Self::parse(&source)?;
        log::info!(
            "Loaded gesture script {} ({} steps)",
            path.display(),
            script.steps.len()
        );
        Ok(script)
    }

    pub fn parse(source: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(source)?)
    }

    /// Replays every step against the session in order.
    pub fn apply(&self, state: &mut InputState) {
        for step in &self.steps {
            log::debug!("Script step: {:?}", step);
            match step {
                Step::CursorTool { tool } => state.set_cursor_tool(*tool),
                Step::ShapeTool { kind } => state.set_shape_tool(*kind),
                Step::Color { value } => match util::parse_color(value) {
                    Some(color) => state.set_color(color),
                    None => log::warn!("Unknown color '{}' in script, ignoring", value),
                },
                Step::LineWidth { value } => state.set_line_width(*value),
                Step::Down { x, y } => state.handle_pointer(PointerEvent::Down { x: *x, y: *y }),
                Step::Move { x, y } => state.handle_pointer(PointerEvent::Move { x: *x, y: *y }),
                Step::Up => state.handle_pointer(PointerEvent::Up),
                Step::Leave => state.handle_pointer(PointerEvent::Leave),
                Step::Undo => state.undo(),
                Step::ZoomIn => state.zoom_in(),
                Step::ZoomOut => state.zoom_out(),
                Step::MoveImage { dx, dy } => {
                    if state.cursor_tool == CursorTool::Pointer {
                        state.move_image(*dx, *dy);
                    } else {
                        log::warn!(
                            "Ignoring move-image step; cursor tool is {:?}, not pointer",
                            state.cursor_tool
                        );
                    }
                }
            }
        }
    }
}
