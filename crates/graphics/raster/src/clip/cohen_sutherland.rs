//! <https://en.wikipedia.org/wiki/Cohen%E2%80%93Sutherland_algorithm>

use math::Vec2D;

use super::{Segment, Window, EPSILON};

const INSIDE: u8 = 0;
const LEFT: u8 = 1 << 0;
const RIGHT: u8 = 1 << 1;
const BOTTOM: u8 = 1 << 2;
const TOP: u8 = 1 << 3;

/// Each iteration moves one endpoint onto a window boundary, so four iterations
/// suffice with exact arithmetic. Rounding errors can push a computed intersection
/// just outside of another boundary, which costs another iteration.
const MAX_ITERATIONS: usize = 16;

/// Classify a point relative to the window.
///
/// `BOTTOM` means below `ymin`, `TOP` means above `ymax`.
#[must_use]
pub fn outcode(point: Vec2D, window: &Window) -> u8 {
    let mut code = INSIDE;

    if point.x < window.min().x {
        code |= LEFT;
    } else if point.x > window.max().x {
        code |= RIGHT;
    }

    if point.y < window.min().y {
        code |= BOTTOM;
    } else if point.y > window.max().y {
        code |= TOP;
    }

    code
}

#[must_use]
pub fn clip(segment: Segment, window: &Window) -> Option<Segment> {
    let Segment { mut from, mut to } = segment;
    let mut code_from = outcode(from, window);
    let mut code_to = outcode(to, window);

    for _ in 0..MAX_ITERATIONS {
        if code_from | code_to == INSIDE {
            return Some(Segment::new(from, to));
        }

        // Both endpoints are on the outer side of the same boundary
        if code_from & code_to != INSIDE {
            return None;
        }

        let (code_out, outside, other) = if code_from != INSIDE {
            (code_from, from, to)
        } else {
            (code_to, to, from)
        };

        let intersection = intersect_boundary(code_out, outside, other, window);

        if code_from != INSIDE {
            from = intersection;
            code_from = outcode(from, window);
        } else {
            to = intersection;
            code_to = outcode(to, window);
        }
    }

    log::warn!("Cohen-Sutherland did not converge for {segment:?}, rejecting it");
    None
}

/// Move `outside` along the segment onto one of the boundaries it violates
fn intersect_boundary(code: u8, outside: Vec2D, other: Vec2D, window: &Window) -> Vec2D {
    let delta = other - outside;

    // If the segment runs parallel to the boundary then the coordinate along the
    // boundary is kept as is
    let along_x = |boundary_y: f64| {
        if delta.y.abs() < EPSILON {
            outside.x
        } else {
            outside.x + delta.x * (boundary_y - outside.y) / delta.y
        }
    };
    let along_y = |boundary_x: f64| {
        if delta.x.abs() < EPSILON {
            outside.y
        } else {
            outside.y + delta.y * (boundary_x - outside.x) / delta.x
        }
    };

    if code & TOP != 0 {
        Vec2D::new(along_x(window.max().y), window.max().y)
    } else if code & BOTTOM != 0 {
        Vec2D::new(along_x(window.min().y), window.min().y)
    } else if code & RIGHT != 0 {
        Vec2D::new(window.max().x, along_y(window.max().x))
    } else {
        Vec2D::new(window.min().x, along_y(window.min().x))
    }
}
