//! Pointer events delivered by the host UI.

/// Pointer event in device space, relative to the surface's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed
    Down { x: f64, y: f64 },
    /// Pointer moved (with or without a button held)
    Move { x: f64, y: f64 },
    /// Primary button released
    Up,
    /// Pointer left the drawing surface
    Leave,
}
