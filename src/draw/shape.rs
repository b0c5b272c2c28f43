//! Drawable definitions for the annotation model.

use super::color::Color;
use crate::util::{self, Point};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Freehand brush variants.
///
/// Each kind derives its rendered width and opacity from the stroke's base width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum StrokeKind {
    /// Solid line at the base width
    Pen,
    /// Thin, light line (half width, 60% opacity)
    Pencil,
    /// Broad translucent line (triple width, 80% opacity)
    Marker,
}

impl StrokeKind {
    /// Rendered line width for a stroke of this kind.
    pub fn width(self, base_width: f64) -> f64 {
        match self {
            StrokeKind::Pen => base_width,
            StrokeKind::Pencil => base_width / 2.0,
            StrokeKind::Marker => base_width * 3.0,
        }
    }

    /// Rendered opacity for a stroke of this kind.
    pub fn alpha(self) -> f64 {
        match self {
            StrokeKind::Pen => 1.0,
            StrokeKind::Pencil => 0.6,
            StrokeKind::Marker => 0.8,
        }
    }
}

/// Geometric shape variants, all defined by a start and end point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Straight segment from start to end
    Line,
    /// Axis-aligned rectangle spanning start to end
    Rectangle,
    /// Circle centered at start passing through end
    Circle,
    /// Square anchored at start with side min(|dx|, |dy|)
    Square,
}

/// A persisted visual unit in the drawing model.
///
/// Drawables are painted in insertion order; later entries cover earlier ones.
#[derive(Clone, Debug, PartialEq)]
pub enum Drawable {
    /// Freehand polyline through recorded pointer positions
    Freehand {
        kind: StrokeKind,
        color: Color,
        base_width: f64,
        /// Points in model space; may become empty after erasing
        points: Vec<Point>,
    },
    /// Geometric shape outline
    Shape {
        kind: ShapeKind,
        start: Point,
        end: Point,
        color: Color,
        line_width: f64,
    },
    /// Rectangular region whose pixels are cleared; width/height may be negative
    Cut {
        origin: Point,
        width: f64,
        height: f64,
    },
}

impl Drawable {
    /// Whether the eraser may remove points from this drawable.
    pub fn is_erasable(&self) -> bool {
        matches!(self, Drawable::Freehand { .. })
    }

    /// Point sequence the eraser filters, for erasable drawables only.
    pub fn erasable_points_mut(&mut self) -> Option<&mut Vec<Point>> {
        match self {
            Drawable::Freehand { points, .. } => Some(points),
            Drawable::Shape { .. } | Drawable::Cut { .. } => None,
        }
    }

    /// Short label used in log output.
    pub fn label(&self) -> &'static str {
        match self {
            Drawable::Freehand { kind, .. } => match kind {
                StrokeKind::Pen => "pen stroke",
                StrokeKind::Pencil => "pencil stroke",
                StrokeKind::Marker => "marker stroke",
            },
            Drawable::Shape { kind, .. } => match kind {
                ShapeKind::Line => "line",
                ShapeKind::Rectangle => "rectangle",
                ShapeKind::Circle => "circle",
                ShapeKind::Square => "square",
            },
            Drawable::Cut { .. } => "cut",
        }
    }

    /// Circle radius, for circle shapes only.
    pub fn radius(&self) -> Option<f64> {
        match self {
            Drawable::Shape {
                kind: ShapeKind::Circle,
                start,
                end,
                ..
            } => Some(util::circle_radius(*start, *end)),
            _ => None,
        }
    }

    /// Square side length, for square shapes only.
    pub fn side(&self) -> Option<f64> {
        match self {
            Drawable::Shape {
                kind: ShapeKind::Square,
                start,
                end,
                ..
            } => Some(util::square_side(*start, *end)),
            _ => None,
        }
    }
}
