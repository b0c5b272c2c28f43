use cairo::{Context, ImageSurface};
use sketchpad::draw::render::{self, Scene};
use sketchpad::draw::{BLACK, Drawable, Frame, RED, ShapeKind, StrokeKind, ViewTransform};
use sketchpad::util::Point;

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn alpha_at(surface: &mut ImageSurface, x: usize, y: usize) -> u8 {
    surface.flush();
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let offset = y * stride + x * 4;
    let pixel = u32::from_ne_bytes(data[offset..offset + 4].try_into().unwrap());
    (pixel >> 24) as u8
}

#[test]
fn render_scene_paints_strokes_and_shapes() {
    let (mut surface, ctx) = surface_with_context(120, 120);
    let frame = Frame {
        drawables: vec![
            Drawable::Freehand {
                kind: StrokeKind::Pen,
                color: RED,
                base_width: 4.0,
                points: vec![Point::new(10.0, 10.0), Point::new(110.0, 10.0)],
            },
            Drawable::Shape {
                kind: ShapeKind::Circle,
                start: Point::new(60.0, 60.0),
                end: Point::new(60.0, 90.0),
                color: BLACK,
                line_width: 2.0,
            },
        ],
    };
    let transform = ViewTransform::default();
    render::render_scene(
        &ctx,
        &Scene {
            frame: &frame,
            image: None,
            transform: &transform,
        },
    )
    .unwrap();
    drop(ctx);

    assert_eq!(alpha_at(&mut surface, 50, 10), 255);
    assert!(alpha_at(&mut surface, 60, 90) > 0);
    assert_eq!(alpha_at(&mut surface, 60, 60), 0);
}

#[test]
fn marker_is_translucent_and_pencil_is_lighter() {
    let (mut surface, ctx) = surface_with_context(60, 60);
    render::render_freehand(
        &ctx,
        StrokeKind::Marker,
        BLACK,
        4.0,
        &[Point::new(0.0, 15.0), Point::new(60.0, 15.0)],
    );
    render::render_freehand(
        &ctx,
        StrokeKind::Pencil,
        BLACK,
        8.0,
        &[Point::new(0.0, 45.0), Point::new(60.0, 45.0)],
    );
    drop(ctx);

    let marker = alpha_at(&mut surface, 30, 15);
    let pencil = alpha_at(&mut surface, 30, 45);
    assert!((200..=206).contains(&marker), "marker alpha {marker}");
    assert!((150..=156).contains(&pencil), "pencil alpha {pencil}");
}

#[test]
fn cut_preview_does_not_clear() {
    let (mut surface, ctx) = surface_with_context(40, 40);
    ctx.set_source_rgb(0.0, 0.0, 0.0);
    ctx.paint().unwrap();
    render::render_cut_preview(&ctx, Point::new(30.0, 30.0), -20.0, -20.0);
    render::render_cut(&ctx, Point::new(0.0, 0.0), 5.0, 5.0);
    drop(ctx);

    assert_eq!(alpha_at(&mut surface, 20, 20), 255);
    assert_eq!(alpha_at(&mut surface, 2, 2), 0);
}
