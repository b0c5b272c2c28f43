use crate::draw::render;
use crate::draw::{Color, StrokeKind};
use crate::util::Point;

use super::{DrawingState, InputState};

impl InputState {
    /// Clears the canvas and repaints the model plus any live preview.
    ///
    /// Cairo failures are logged; the surface is best-effort and a failed pass
    /// leaves the model untouched.
    pub fn redraw(&self) {
        if let Err(err) = self.try_redraw() {
            log::warn!("Redraw failed: {}", err);
        }
    }

    fn try_redraw(&self) -> Result<(), cairo::Error> {
        let ctx = self.canvas.context()?;
        render::clear(&ctx)?;
        render::render_scene(&ctx, &self.scene())?;

        ctx.save()?;
        self.transform.apply(&ctx);
        self.render_provisional(&ctx);
        ctx.restore()
    }

    /// Paints the candidate shape or cut region of the current gesture.
    ///
    /// Expects `ctx` to already carry the zoom. Returns `true` if anything was
    /// painted.
    pub fn render_provisional(&self, ctx: &cairo::Context) -> bool {
        match &self.state {
            DrawingState::DrawingShape {
                kind,
                start,
                last,
                color,
                width,
            } => {
                render::render_shape(ctx, *kind, *start, *last, *color, *width);
                true
            }
            DrawingState::Cutting { origin, last } => {
                render::render_cut_preview(ctx, *origin, last.x - origin.x, last.y - origin.y);
                true
            }
            _ => false,
        }
    }

    /// Paints one freehand segment directly onto the canvas, under the zoom.
    pub(crate) fn paint_segment(
        &self,
        kind: StrokeKind,
        color: Color,
        base_width: f64,
        from: Point,
        to: Point,
    ) {
        let ctx = match self.canvas.context() {
            Ok(ctx) => ctx,
            Err(err) => {
                log::warn!("Failed to paint stroke segment: {}", err);
                return;
            }
        };
        self.transform.apply(&ctx);
        render::render_segment(&ctx, kind, color, base_width, from, to);
    }
}
