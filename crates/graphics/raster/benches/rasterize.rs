use criterion::{black_box, criterion_group, criterion_main, Criterion};
use math::Vec2D;
use raster::{bresenham_circle, bresenham_line, clip, dda_line, Point, Segment, Window};

fn lines(c: &mut Criterion) {
    let from = Point::new(-317, 42);
    let to = Point::new(1024, 611);

    c.bench_function("dda", |b| b.iter(|| dda_line(black_box(from), black_box(to))));
    c.bench_function("bresenham line", |b| {
        b.iter(|| bresenham_line(black_box(from), black_box(to)))
    });
}

fn circles(c: &mut Criterion) {
    let center = Point::new(400, 300);

    c.bench_function("bresenham circle", |b| {
        b.iter(|| bresenham_circle(black_box(center), black_box(250)))
    });
}

fn clipping(c: &mut Criterion) {
    let window = Window::from_corners(Vec2D::new(0., 0.), Vec2D::new(800., 600.));
    let segment = Segment::new(Vec2D::new(-317., 42.), Vec2D::new(1024., 611.));

    c.bench_function("cohen-sutherland", |b| {
        b.iter(|| clip::cohen_sutherland::clip(black_box(segment), &window))
    });
    c.bench_function("liang-barsky", |b| {
        b.iter(|| clip::liang_barsky::clip(black_box(segment), &window))
    });
}

criterion_group!(benches, lines, circles, clipping);
criterion_main!(benches);
