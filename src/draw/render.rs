//! Cairo-based render pipeline.
//!
//! A full redraw clears the surface, applies the zoom, paints the imported
//! image and then every drawable in insertion order. Cut regions are replayed
//! as clears on every pass, so the picture is always derivable from the model.

use super::canvas::Canvas;
use super::color::Color;
use super::font::FontDescriptor;
use super::frame::Frame;
use super::image::ImagePlacement;
use super::shape::{Drawable, ShapeKind, StrokeKind};
use super::transform::ViewTransform;
use crate::util::{self, Point};

/// Fill used for the live cut-region preview.
const CUT_PREVIEW_FILL: Color = Color {
    r: 0.2,
    g: 0.5,
    b: 1.0,
    a: 0.2,
};

/// Outline used for the live cut-region preview.
const CUT_PREVIEW_OUTLINE: Color = Color {
    r: 0.2,
    g: 0.5,
    b: 1.0,
    a: 0.9,
};

/// Everything the pipeline needs to repaint the visible state.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub frame: &'a Frame,
    pub image: Option<&'a ImagePlacement>,
    pub transform: &'a ViewTransform,
}

/// Clears the canvas and repaints the whole scene.
///
/// Deterministic: identical scenes produce identical pixels.
pub fn redraw(canvas: &Canvas, scene: &Scene<'_>) -> Result<(), cairo::Error> {
    let ctx = canvas.context()?;
    clear(&ctx)?;
    render_scene(&ctx, scene)
}

/// Clears the entire target to full transparency.
pub fn clear(ctx: &cairo::Context) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Clear);
    ctx.paint()?;
    ctx.restore()
}

/// Paints image and drawables under the scene's zoom, leaving the context's
/// transform as it was.
pub fn render_scene(ctx: &cairo::Context, scene: &Scene<'_>) -> Result<(), cairo::Error> {
    ctx.save()?;
    scene.transform.apply(ctx);

    if let Some(image) = scene.image {
        render_image(ctx, image)?;
    }

    log::debug!("Rendering {} drawables", scene.frame.len());
    render_drawables(ctx, &scene.frame.drawables);

    ctx.restore()
}

/// Paints the imported image scaled into its placement rectangle.
pub fn render_image(ctx: &cairo::Context, image: &ImagePlacement) -> Result<(), cairo::Error> {
    let pixel_width = image.surface.width() as f64;
    let pixel_height = image.surface.height() as f64;
    if pixel_width <= 0.0 || pixel_height <= 0.0 || image.width <= 0.0 || image.height <= 0.0 {
        return Ok(());
    }

    ctx.save()?;
    ctx.translate(image.x, image.y);
    ctx.scale(image.width / pixel_width, image.height / pixel_height);
    ctx.set_source_surface(&image.surface, 0.0, 0.0)?;
    ctx.paint()?;
    ctx.restore()
}

/// Renders all drawables in order (first = bottom layer).
pub fn render_drawables(ctx: &cairo::Context, drawables: &[Drawable]) {
    for drawable in drawables {
        render_drawable(ctx, drawable);
    }
}

/// Renders a single drawable according to its variant.
pub fn render_drawable(ctx: &cairo::Context, drawable: &Drawable) {
    match drawable {
        Drawable::Freehand {
            kind,
            color,
            base_width,
            points,
        } => render_freehand(ctx, *kind, *color, *base_width, points),
        Drawable::Shape {
            kind,
            start,
            end,
            color,
            line_width,
        } => render_shape(ctx, *kind, *start, *end, *color, *line_width),
        Drawable::Cut {
            origin,
            width,
            height,
        } => render_cut(ctx, *origin, *width, *height),
    }
}

fn apply_stroke_style(ctx: &cairo::Context, kind: StrokeKind, color: Color, base_width: f64) {
    color.with_alpha_factor(kind.alpha()).apply(ctx);
    ctx.set_line_width(kind.width(base_width));
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);
}

/// Render a freehand stroke (polyline through points).
///
/// Empty strokes (fully erased) paint nothing.
pub fn render_freehand(
    ctx: &cairo::Context,
    kind: StrokeKind,
    color: Color,
    base_width: f64,
    points: &[Point],
) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };

    apply_stroke_style(ctx, kind, color, base_width);
    ctx.move_to(first.x, first.y);
    for point in rest {
        ctx.line_to(point.x, point.y);
    }
    let _ = ctx.stroke();
}

/// Paints one incremental freehand segment (used while the pointer moves).
pub fn render_segment(
    ctx: &cairo::Context,
    kind: StrokeKind,
    color: Color,
    base_width: f64,
    from: Point,
    to: Point,
) {
    apply_stroke_style(ctx, kind, color, base_width);
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    let _ = ctx.stroke();
}

/// Render a shape outline.
///
/// Degenerate input (zero-length line, zero radius) is drawn as-is.
pub fn render_shape(
    ctx: &cairo::Context,
    kind: ShapeKind,
    start: Point,
    end: Point,
    color: Color,
    line_width: f64,
) {
    color.apply(ctx);
    ctx.set_line_width(line_width);

    match kind {
        ShapeKind::Line => {
            ctx.set_line_cap(cairo::LineCap::Round);
            ctx.move_to(start.x, start.y);
            ctx.line_to(end.x, end.y);
        }
        ShapeKind::Rectangle => {
            ctx.set_line_join(cairo::LineJoin::Miter);
            let (x, y, w, h) =
                util::normalize_rect(start.x, start.y, end.x - start.x, end.y - start.y);
            ctx.rectangle(x, y, w, h);
        }
        ShapeKind::Circle => {
            let radius = util::circle_radius(start, end);
            ctx.new_sub_path();
            ctx.arc(start.x, start.y, radius, 0.0, 2.0 * std::f64::consts::PI);
        }
        ShapeKind::Square => {
            ctx.set_line_join(cairo::LineJoin::Miter);
            let side = util::square_side(start, end);
            ctx.rectangle(start.x, start.y, side, side);
        }
    }

    let _ = ctx.stroke();
}

/// Clears a committed cut region back to transparency.
pub fn render_cut(ctx: &cairo::Context, origin: Point, width: f64, height: f64) {
    let (x, y, w, h) = util::normalize_rect(origin.x, origin.y, width, height);
    if ctx.save().is_err() {
        return;
    }
    ctx.set_operator(cairo::Operator::Clear);
    ctx.rectangle(x, y, w, h);
    let _ = ctx.fill();
    let _ = ctx.restore();
}

/// Highlights a candidate cut region during the drag.
pub fn render_cut_preview(ctx: &cairo::Context, origin: Point, width: f64, height: f64) {
    let (x, y, w, h) = util::normalize_rect(origin.x, origin.y, width, height);
    if ctx.save().is_err() {
        return;
    }

    CUT_PREVIEW_FILL.apply(ctx);
    ctx.rectangle(x, y, w, h);
    let _ = ctx.fill();

    CUT_PREVIEW_OUTLINE.apply(ctx);
    ctx.set_line_width(1.0);
    ctx.set_dash(&[6.0, 4.0], 0.0);
    ctx.rectangle(x, y, w, h);
    let _ = ctx.stroke();

    let _ = ctx.restore();
}

/// Renders watermark text with its baseline starting at (x, y) in device space.
pub fn render_watermark(
    ctx: &cairo::Context,
    text: &str,
    font: &FontDescriptor,
    size: f64,
    color: Color,
    x: f64,
    y: f64,
) {
    if text.is_empty() || ctx.save().is_err() {
        return;
    }

    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc = pango::FontDescription::from_string(&font.to_pango_string(size));
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);

    // Pango positions from the top-left of the layout; callers give a baseline
    let baseline = layout.baseline() as f64 / pango::SCALE as f64;
    ctx.move_to(x, y - baseline);
    color.apply(ctx);
    pangocairo::functions::show_layout(ctx, &layout);

    let _ = ctx.restore();
}
