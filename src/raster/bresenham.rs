//! Integer Bresenham line rasterization.
//!
//! After normalization (steep lines swap axes, right-to-left lines swap
//! endpoints) the walk is along +x with a single integer error term:
//!
//! ```text
//! err = dx / 2
//! for x in x0..=x1:
//!     plot(x, y)
//!     err -= dy
//!     if err < 0: y += ystep; err += dx
//! ```
//!
//! The tie-break is the strict `< 0` comparison. Because the normalized
//! computation is the same for `(P0, P1)` and `(P1, P0)`, both orders light
//! the same pixels; the output is always emitted from `start` to `end`.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

use crate::geometry::Point;
use crate::step::{Step, StepTrace};

/// Rasterize the segment `start`-`end` with Bresenham's integer algorithm.
#[must_use]
pub fn bresenham_line(start: Point, end: Point) -> Vec<Step> {
    let (mut x0, mut y0, mut x1, mut y1) = (start.x, start.y, end.x, end.y);

    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }

    let reversed = x0 > x1;
    if reversed {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = (y1 - y0).abs();
    let y_step = if y1 >= y0 { 1 } else { -1 };

    let mut error = dx / 2;
    let mut y = y0;
    let mut trace = StepTrace::with_capacity(dx as usize + 1);

    for x in x0..=x1 {
        let pixel = if steep { Point::new(y, x) } else { Point::new(x, y) };
        trace.push_unique(Step::new(pixel, format!("err={error}")));

        error -= dy;
        if error < 0 {
            y += y_step;
            error += dx;
        }
    }

    if reversed {
        trace.reverse();
    }
    trace.into_steps()
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
