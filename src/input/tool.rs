//! Cursor tool selection.

use crate::draw::StrokeKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Cursor tool selection.
///
/// The active tool decides what a pointer-down starts: a freehand stroke, a
/// shape, a cut region, or an image drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CursorTool {
    /// Solid freehand stroke
    Pen,
    /// Thin, light freehand stroke
    Pencil,
    /// Broad translucent freehand stroke
    Marker,
    /// Removes freehand points under the pointer
    Eraser,
    /// Drags the imported image
    Pointer,
    /// Marks a rectangular region to clear
    Cut,
    /// Draws the active shape kind
    Shape,
}

impl CursorTool {
    /// Brush kind for the tools that commit freehand strokes, `None` for
    /// everything else (the eraser commits nothing).
    pub fn stroke_kind(self) -> Option<StrokeKind> {
        match self {
            CursorTool::Pen => Some(StrokeKind::Pen),
            CursorTool::Pencil => Some(StrokeKind::Pencil),
            CursorTool::Marker => Some(StrokeKind::Marker),
            CursorTool::Eraser | CursorTool::Pointer | CursorTool::Cut | CursorTool::Shape => None,
        }
    }
}
