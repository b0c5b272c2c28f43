use crate::draw::{StrokeBuffer, eraser};
use crate::input::{events::PointerEvent, tool::CursorTool};
use crate::util::Point;
use std::mem;

use super::{DrawingState, InputState};

impl InputState {
    /// Dispatches a pointer event to the matching handler.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => self.on_pointer_down(x, y),
            PointerEvent::Move { x, y } => self.on_pointer_move(x, y),
            PointerEvent::Up => self.on_pointer_up(),
            PointerEvent::Leave => self.on_pointer_leave(),
        }
    }

    /// Processes a pointer press at device coordinates.
    ///
    /// # Behavior
    /// - Brush tools (pen, pencil, marker): start a freehand buffer
    /// - Eraser: start erasing; nothing is removed until the first move
    /// - Shape tool: record the start point
    /// - Cut tool: record the cut origin
    /// - Pointer tool: start dragging if the press lands on the image
    ///
    /// A press while a gesture is already in progress is ignored.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        if !self.is_idle() {
            log::debug!("Pointer down ignored; gesture already in progress");
            return;
        }

        let point = self.model_point(x, y);

        let next = match self.cursor_tool {
            CursorTool::Pen | CursorTool::Pencil | CursorTool::Marker => {
                let Some(kind) = self.cursor_tool.stroke_kind() else {
                    return;
                };
                DrawingState::DrawingFreehand {
                    buffer: StrokeBuffer::begin(
                        kind,
                        self.current_color,
                        self.current_width,
                        point,
                    ),
                }
            }
            CursorTool::Eraser => DrawingState::Erasing,
            CursorTool::Shape => DrawingState::DrawingShape {
                kind: self.shape_kind,
                start: point,
                last: point,
                color: self.current_color,
                width: self.current_width,
            },
            CursorTool::Cut => DrawingState::Cutting {
                origin: point,
                last: point,
            },
            CursorTool::Pointer => match &self.image {
                Some(image) if image.contains(point) => DrawingState::DraggingImage {
                    offset: Point::new(point.x - image.x, point.y - image.y),
                },
                _ => {
                    log::debug!("Pointer down outside image; nothing to drag");
                    DrawingState::Idle
                }
            },
        };
        self.state = next;
    }

    /// Processes pointer motion at device coordinates.
    ///
    /// # Behavior
    /// - Pen/pencil/marker: append the point and paint the new segment
    /// - Eraser: erase around the point, then redraw everything
    /// - Shape/cut: redraw with the candidate outline
    /// - Image drag: move the image so the grab offset stays under the pointer
    ///
    /// Motion with no gesture in progress does nothing.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        let point = self.model_point(x, y);

        match &mut self.state {
            DrawingState::Idle => {}
            DrawingState::DrawingFreehand { buffer } => {
                let previous = buffer.last().unwrap_or(point);
                buffer.push(point);
                let (kind, color, width) = (buffer.kind, buffer.color, buffer.base_width);
                self.paint_segment(kind, color, width, previous, point);
            }
            DrawingState::Erasing => self.erase_at(point),
            DrawingState::DrawingShape { last, .. } | DrawingState::Cutting { last, .. } => {
                *last = point;
                self.redraw();
            }
            DrawingState::DraggingImage { offset } => {
                let offset = *offset;
                if let Some(image) = &self.image {
                    let dx = point.x - offset.x - image.x;
                    let dy = point.y - offset.y - image.y;
                    self.move_image(dx, dy);
                }
            }
        }
    }

    /// Processes pointer release; finishes the current gesture.
    pub fn on_pointer_up(&mut self) {
        self.finish_gesture("pointer up");
    }

    /// Processes the pointer leaving the surface; finishes the current gesture
    /// exactly like a release.
    pub fn on_pointer_leave(&mut self) {
        self.finish_gesture("pointer leave");
    }

    /// Ends the gesture and applies the commit-on-release policy.
    fn finish_gesture(&mut self, reason: &str) {
        match mem::replace(&mut self.state, DrawingState::Idle) {
            DrawingState::Idle => {
                log::debug!("{} with no gesture in progress", reason);
            }
            DrawingState::DrawingFreehand { buffer } => {
                self.commit_freehand(buffer);
            }
            DrawingState::Erasing => {
                log::debug!("Eraser gesture finished");
            }
            DrawingState::DrawingShape {
                kind,
                start,
                last,
                color,
                width,
            } => {
                self.commit_shape(kind, start, last, color, width);
            }
            DrawingState::Cutting { origin, last } => {
                self.commit_cut(origin, last.x - origin.x, last.y - origin.y);
            }
            DrawingState::DraggingImage { .. } => {
                log::debug!("Image drag finished");
            }
        }
    }

    /// Runs the eraser at a model-space point with the current line width as
    /// radius, then repaints.
    fn erase_at(&mut self, point: Point) {
        eraser::erase(&mut self.frame, point, self.current_width);
        self.redraw();
    }
}
