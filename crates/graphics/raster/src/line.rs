use crate::Point;

/// Rasterize a line using a digital differential analyzer.
///
/// The line is sampled at `max(|dx|, |dy|) + 1` evenly spaced positions, both endpoints
/// included, and each sample is rounded to the nearest pixel (ties away from zero).
///
/// Unlike the textbook form, which keeps adding a real valued increment to the
/// current position, sample `i` is computed directly as `from + delta * i / steps`
/// in exact integer arithmetic. The pixels are the ones the ideal real valued
/// walk would produce, without rounding errors accumulating along the line.
pub fn dda_line(from: Point, to: Point) -> Vec<Point> {
    // Differences of two i32 don't fit into an i32
    let delta_x = i64::from(to.x) - i64::from(from.x);
    let delta_y = i64::from(to.y) - i64::from(from.y);
    let steps = delta_x.abs().max(delta_y.abs());

    // Without this, the increments below would divide by zero
    if steps == 0 {
        return vec![from];
    }

    (0..=steps)
        .map(|step| {
            Point::new(
                offset_by(from.x, delta_x, step, steps),
                offset_by(from.y, delta_y, step, steps),
            )
        })
        .collect()
}

/// Compute `start + round(delta * step / steps)`, rounding halfway cases away from zero
fn offset_by(start: i32, delta: i64, step: i64, steps: i64) -> i32 {
    let numerator = i128::from(delta) * i128::from(step);
    let denominator = i128::from(steps);

    let magnitude = (2 * numerator.abs() + denominator) / (2 * denominator);
    let offset = if numerator < 0 { -magnitude } else { magnitude };

    // The sample lies between both endpoints, so it always fits
    (i128::from(start) + offset) as i32
}

/// Rasterize a line using Bresenham's algorithm.
///
/// Only integer arithmetic is involved. The line is always walked from the smaller
/// endpoint (see [Ord] on [math::Vec2D]) to the larger one, so swapping the endpoints
/// produces the same pixels in reverse order.
pub fn bresenham_line(from: Point, to: Point) -> Vec<Point> {
    if to < from {
        let mut pixels = walk_bresenham(to, from);
        pixels.reverse();
        pixels
    } else {
        walk_bresenham(from, to)
    }
}

// http://members.chello.at/~easyfilter/bresenham.html
fn walk_bresenham(from: Point, to: Point) -> Vec<Point> {
    // Widen to i64 so that the doubled error term can't overflow
    let delta_x = (i64::from(to.x) - i64::from(from.x)).abs();
    let delta_y = (i64::from(to.y) - i64::from(from.y)).abs();
    let step_x = if from.x < to.x { 1 } else { -1 };
    let step_y = if from.y < to.y { 1 } else { -1 };

    let mut pixels = Vec::with_capacity(delta_x.max(delta_y) as usize + 1);
    let mut error = delta_x - delta_y;
    let mut current = from;
    loop {
        pixels.push(current);

        if current == to {
            break;
        }

        let e2 = 2 * error;
        if e2 > -delta_y {
            error -= delta_y;
            current.x += step_x;
        }
        if e2 < delta_x {
            error += delta_x;
            current.y += step_y;
        }
    }

    pixels
}
