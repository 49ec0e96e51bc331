//! Step-by-step rasterization straight from the slope equation.
//!
//! x walks one unit at a time and y is evaluated exactly as
//! `y0 + slope * (x - x0)`, then rounded half away from zero. Steep lines
//! therefore leave gaps; that is the point of the method as a baseline.

use crate::geometry::Point;
use crate::step::{Step, StepTrace};

/// Rasterize the segment `start`-`end` by direct slope evaluation.
#[must_use]
pub fn naive_slope_line(start: Point, end: Point) -> Vec<Step> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dx == 0 && dy == 0 {
        return vec![Step::new(start, "single point")];
    }

    let mut trace = StepTrace::with_capacity(dx.unsigned_abs().max(dy.unsigned_abs()) as usize + 1);

    if dx == 0 {
        let step_y = dy.signum();
        let mut y = start.y;
        loop {
            trace.push_unique(Step::new(Point::new(start.x, y), format!("y={y}")));
            if y == end.y {
                break;
            }
            y += step_y;
        }
    } else if dy == 0 {
        let step_x = dx.signum();
        let mut x = start.x;
        loop {
            trace.push_unique(Step::new(Point::new(x, start.y), format!("x={x}")));
            if x == end.x {
                break;
            }
            x += step_x;
        }
    } else {
        let slope = f64::from(dy) / f64::from(dx);
        let step_x = dx.signum();
        let mut x = start.x;
        loop {
            let exact_y = f64::from(start.y) + slope * f64::from(x - start.x);
            // f64::round rounds half away from zero, so -2.5 becomes -3.
            let y = exact_y.round() as i32;
            trace.push_unique(Step::new(Point::new(x, y), format!("y={exact_y:.2}")));
            if x == end.x {
                break;
            }
            x += step_x;
        }
    }

    trace.into_steps()
}
