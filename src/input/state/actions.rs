use crate::draw::{Color, Drawable, ImagePlacement, ShapeKind, StrokeBuffer};
use crate::export::{self, ExportError, ExportOptions};
use crate::import::{DecodedImage, ImportError};
use crate::input::tool::CursorTool;
use crate::util::Point;

use super::InputState;

impl InputState {
    // ------------------------------------------------------------------
    // Tool settings
    // ------------------------------------------------------------------

    /// Selects the tool used by the next pointer-down.
    pub fn set_cursor_tool(&mut self, tool: CursorTool) {
        if self.cursor_tool != tool {
            log::debug!("Cursor tool {:?} -> {:?}", self.cursor_tool, tool);
        }
        self.cursor_tool = tool;
    }

    /// Selects the shape kind and switches the cursor tool to `Shape`.
    pub fn set_shape_tool(&mut self, kind: ShapeKind) {
        self.shape_kind = kind;
        self.set_cursor_tool(CursorTool::Shape);
    }

    /// Sets the color used by subsequent gestures.
    pub fn set_color(&mut self, color: Color) {
        self.current_color = color;
    }

    /// Sets the line width used by subsequent gestures and the eraser radius.
    ///
    /// Non-positive or non-finite widths are ignored.
    pub fn set_line_width(&mut self, width: f64) {
        if !width.is_finite() || width <= 0.0 {
            log::warn!("Ignoring invalid line width {}", width);
            return;
        }
        self.current_width = width;
    }

    // ------------------------------------------------------------------
    // View and history
    // ------------------------------------------------------------------

    /// Increases zoom by one step and repaints.
    pub fn zoom_in(&mut self) {
        self.transform.zoom_in();
        self.redraw();
    }

    /// Decreases zoom by one step (if still above the step) and repaints.
    pub fn zoom_out(&mut self) {
        if self.transform.zoom_out() {
            self.redraw();
        }
    }

    /// Restores the model to the previous snapshot and repaints.
    ///
    /// Undo with an empty history does nothing.
    pub fn undo(&mut self) {
        match self.history.undo() {
            Some(drawables) => {
                self.frame.restore(drawables);
                log::info!(
                    "Undo: {} drawables, {} snapshots left",
                    self.frame.len(),
                    self.history.len()
                );
                self.redraw();
            }
            None => log::debug!("Nothing to undo"),
        }
    }

    // ------------------------------------------------------------------
    // Commits
    // ------------------------------------------------------------------

    /// Commits a finished freehand stroke.
    ///
    /// Returns `false` (and changes nothing) for a buffer without points or
    /// when the drawable limit is reached.
    pub fn commit_freehand(&mut self, buffer: StrokeBuffer) -> bool {
        match buffer.into_drawable() {
            Some(drawable) => self.commit(drawable),
            None => {
                log::debug!("Discarding empty stroke");
                false
            }
        }
    }

    /// Commits a shape spanning `start` to `end`.
    pub fn commit_shape(
        &mut self,
        kind: ShapeKind,
        start: Point,
        end: Point,
        color: Color,
        line_width: f64,
    ) -> bool {
        self.commit(Drawable::Shape {
            kind,
            start,
            end,
            color,
            line_width,
        })
    }

    /// Commits a cut region; the repaint clears it from the surface.
    pub fn commit_cut(&mut self, origin: Point, width: f64, height: f64) -> bool {
        self.commit(Drawable::Cut {
            origin,
            width,
            height,
        })
    }

    fn commit(&mut self, drawable: Drawable) -> bool {
        let label = drawable.label();
        if !self.frame.try_push(drawable, self.max_drawables) {
            log::warn!(
                "Drawable limit ({}) reached; discarding {}",
                self.max_drawables,
                label
            );
            return false;
        }
        self.history.push(&self.frame);
        log::info!("Committed {} ({} drawables)", label, self.frame.len());
        self.redraw();
        true
    }

    // ------------------------------------------------------------------
    // Image
    // ------------------------------------------------------------------

    /// Places an image, fitted and centered on the canvas, replacing any
    /// previous one.
    pub fn set_image(&mut self, surface: cairo::ImageSurface) {
        let placement = ImagePlacement::fit(
            surface,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        log::info!(
            "Image placed at ({:.1}, {:.1}) size {:.1}x{:.1}",
            placement.x,
            placement.y,
            placement.width,
            placement.height
        );
        self.image = Some(placement);
        self.redraw();
    }

    /// Turns a fully decoded image into a surface and places it.
    ///
    /// # Errors
    /// Returns [`ImportError::Surface`] if Cairo rejects the pixels; the
    /// previous image stays in place.
    pub fn apply_decoded_image(&mut self, image: DecodedImage) -> Result<(), ImportError> {
        let surface = image.into_surface()?;
        self.set_image(surface);
        Ok(())
    }

    /// Moves the image by a model-space delta. Not recorded in undo history.
    pub fn move_image(&mut self, dx: f64, dy: f64) {
        match &mut self.image {
            Some(image) => {
                image.translate(dx, dy);
                self.redraw();
            }
            None => log::debug!("No image to move"),
        }
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    /// Renders the session off-screen with watermark and encodes it as PNG.
    ///
    /// The live canvas is left untouched.
    pub fn export_png(&self, options: &ExportOptions) -> Result<Vec<u8>, ExportError> {
        export::export_png(
            &self.scene(),
            self.canvas.width(),
            self.canvas.height(),
            options,
            self.current_color,
        )
    }
}
