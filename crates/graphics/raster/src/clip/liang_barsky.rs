//! <https://en.wikipedia.org/wiki/Liang%E2%80%93Barsky_algorithm>
//!
//! The segment is parametrized as `P(u) = from + u * (to - from)` with `u` in `[0, 1]`.
//! Every window boundary narrows the range of `u` for which `P(u)` is visible.

use super::{Segment, Window, EPSILON};

#[must_use]
pub fn clip(segment: Segment, window: &Window) -> Option<Segment> {
    let Segment { from, to } = segment;
    let delta = to - from;

    // (p, q) for the left, right, bottom and top boundary.
    // p < 0 means the segment enters the window across that boundary, p > 0 means
    // it leaves it.
    let boundaries = [
        (-delta.x, from.x - window.min().x),
        (delta.x, window.max().x - from.x),
        (-delta.y, from.y - window.min().y),
        (delta.y, window.max().y - from.y),
    ];

    let mut u_enter: f64 = 0.;
    let mut u_leave: f64 = 1.;

    for (p, q) in boundaries {
        if p.abs() < EPSILON {
            // Parallel to this boundary and on its outer side
            if q < 0. {
                return None;
            }
            continue;
        }

        let u = q / p;
        if p < 0. {
            if u > u_leave {
                return None;
            }
            u_enter = u_enter.max(u);
        } else {
            if u < u_enter {
                return None;
            }
            u_leave = u_leave.min(u);
        }
    }

    if u_leave < u_enter {
        return None;
    }

    Some(Segment::new(
        from.lerp(to, u_enter),
        from.lerp(to, u_leave),
    ))
}
