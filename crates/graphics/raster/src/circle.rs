use crate::Point;

/// Rasterize the outline of a circle using the midpoint (Bresenham) algorithm.
///
/// Only the octant from twelve o'clock towards the diagonal is computed, every
/// other pixel is a reflection of it. The octant boundaries would otherwise be
/// emitted more than once, so the result is sorted and free of duplicates.
///
/// A radius of zero produces the center pixel, a negative radius produces nothing.
/// Pixels that can't be represented as a [Point] are left out.
pub fn bresenham_circle(center: Point, radius: i32) -> Vec<Point> {
    if radius < 0 {
        log::debug!("Circle at {center:?} has negative radius {radius}, nothing to draw");
        return vec![];
    }

    let radius = i64::from(radius);
    let mut x: i64 = 0;
    let mut y = radius;
    let mut decision = 3 - 2 * radius;
    let mut pixels = Vec::with_capacity(8 * (radius as usize + 1));

    while y >= x {
        push_octants(&mut pixels, center, x, y);

        // The decision is updated with the coordinates of the next step
        x += 1;
        if decision > 0 {
            y -= 1;
            decision += 4 * (x - y) + 10;
        } else {
            decision += 4 * x + 6;
        }
    }

    pixels.sort_unstable();
    pixels.dedup();
    pixels
}

fn push_octants(pixels: &mut Vec<Point>, center: Point, x: i64, y: i64) {
    let center_x = i64::from(center.x);
    let center_y = i64::from(center.y);

    let reflections = [
        (x, y),
        (-x, y),
        (x, -y),
        (-x, -y),
        (y, x),
        (-y, x),
        (y, -x),
        (-y, -x),
    ];

    for (offset_x, offset_y) in reflections {
        let pixel_x = i32::try_from(center_x + offset_x);
        let pixel_y = i32::try_from(center_y + offset_y);

        if let (Ok(pixel_x), Ok(pixel_y)) = (pixel_x, pixel_y) {
            pixels.push(Point::new(pixel_x, pixel_y));
        } else {
            log::trace!("Dropping circle pixel outside of the coordinate range");
        }
    }
}
