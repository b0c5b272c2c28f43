//! Frame container for the ordered drawable collection.

use super::color::Color;
use super::shape::{Drawable, StrokeKind};
use crate::util::Point;

/// Container for all drawables in the current session.
///
/// Insertion order is paint order and undo order. Under normal drawing the
/// sequence only grows at the tail; undo replaces it with an earlier snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// All drawables in draw order (first = bottom layer, last = top layer)
    pub drawables: Vec<Drawable>,
}

impl Frame {
    /// Creates a new empty frame.
    pub const fn new() -> Self {
        Self {
            drawables: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    /// Attempts to append a drawable, enforcing a maximum count when `max` > 0.
    ///
    /// Returns `true` if the drawable was added, `false` if the limit would be exceeded.
    pub fn try_push(&mut self, drawable: Drawable, max: usize) -> bool {
        if max == 0 || self.drawables.len() < max {
            self.drawables.push(drawable);
            true
        } else {
            false
        }
    }

    /// Replaces the whole sequence (used when restoring an undo snapshot).
    pub fn restore(&mut self, drawables: Vec<Drawable>) {
        self.drawables = drawables;
    }
}

/// An in-progress freehand stroke that is not yet part of the model.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeBuffer {
    pub kind: StrokeKind,
    pub color: Color,
    pub base_width: f64,
    pub points: Vec<Point>,
}

impl StrokeBuffer {
    /// Starts a stroke buffer at `origin`.
    pub fn begin(kind: StrokeKind, color: Color, base_width: f64, origin: Point) -> Self {
        Self {
            kind,
            color,
            base_width,
            points: vec![origin],
        }
    }

    /// Appends a model-space point.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Most recently recorded point.
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Converts the buffer into a committed drawable.
    ///
    /// Returns `None` for an empty buffer.
    pub fn into_drawable(self) -> Option<Drawable> {
        if self.points.is_empty() {
            return None;
        }
        Some(Drawable::Freehand {
            kind: self.kind,
            color: self.color,
            base_width: self.base_width,
            points: self.points,
        })
    }
}
