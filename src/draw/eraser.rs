//! Point-removal eraser for freehand strokes.

use super::frame::Frame;
use super::shape::Drawable;
use crate::util::Point;

/// Removes every freehand point within `radius` of `query`.
///
/// Shapes and cut regions are left untouched. Strokes that lose all their
/// points stay in the frame and simply paint nothing.
///
/// # Returns
/// Number of points removed across all strokes.
pub fn erase(frame: &mut Frame, query: Point, radius: f64) -> usize {
    let mut removed = 0;
    for drawable in frame.drawables.iter_mut().filter(|d| d.is_erasable()) {
        if let Some(points) = drawable.erasable_points_mut() {
            let before = points.len();
            points.retain(|point| point.distance_to(query) > radius);
            removed += before - points.len();
        }
    }
    if removed > 0 {
        log::debug!(
            "Eraser removed {} point(s) near ({:.1}, {:.1})",
            removed,
            query.x,
            query.y
        );
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;
    use crate::draw::shape::{ShapeKind, StrokeKind};

    fn stroke(points: &[(f64, f64)]) -> Drawable {
        Drawable::Freehand {
            kind: StrokeKind::Pen,
            color: BLACK,
            base_width: 2.0,
            points: points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        }
    }

    fn frame_with_stroke_and_line() -> Frame {
        Frame {
            drawables: vec![
                stroke(&[(0.0, 0.0), (1.0, 0.0), (5.0, 0.0), (10.0, 0.0)]),
                Drawable::Shape {
                    kind: ShapeKind::Line,
                    start: Point::new(0.0, 0.0),
                    end: Point::new(1.0, 1.0),
                    color: BLACK,
                    line_width: 2.0,
                },
            ],
        }
    }

    #[test]
    fn remaining_points_are_outside_radius() {
        let mut frame = frame_with_stroke_and_line();
        let query = Point::new(0.5, 0.0);
        let removed = erase(&mut frame, query, 2.0);
        assert_eq!(removed, 2);

        for drawable in &frame.drawables {
            if let Drawable::Freehand { points, .. } = drawable {
                assert!(points.iter().all(|p| p.distance_to(query) > 2.0));
            }
        }
    }

    #[test]
    fn erasing_twice_is_idempotent() {
        let mut frame = frame_with_stroke_and_line();
        erase(&mut frame, Point::new(5.0, 0.0), 1.0);
        let after_first = frame.clone();
        assert_eq!(erase(&mut frame, Point::new(5.0, 0.0), 1.0), 0);
        assert_eq!(frame, after_first);
    }

    #[test]
    fn point_exactly_on_radius_is_removed() {
        let mut frame = Frame {
            drawables: vec![stroke(&[(3.0, 4.0)])],
        };
        assert_eq!(erase(&mut frame, Point::new(0.0, 0.0), 5.0), 1);
    }

    #[test]
    fn emptied_strokes_are_kept_and_shapes_untouched() {
        let mut frame = frame_with_stroke_and_line();
        let line_before = frame.drawables[1].clone();
        erase(&mut frame, Point::new(5.0, 0.0), 100.0);

        assert_eq!(frame.len(), 2);
        match &frame.drawables[0] {
            Drawable::Freehand { points, .. } => assert!(points.is_empty()),
            other => panic!("expected freehand, got {other:?}"),
        }
        assert_eq!(frame.drawables[1], line_before);
    }
}
