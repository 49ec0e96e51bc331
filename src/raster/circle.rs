//! Bresenham (midpoint) circle rasterization with 8-way symmetry.
//!
//! Only the octant from 90° down to 45° is walked; every computed offset
//! `(x, y)` is mirrored into the other seven octants.

use std::collections::HashSet;

use crate::geometry::Point;
use crate::step::{Step, StepTrace};

/// Radius implied by a center and a point on the circle: the Euclidean
/// distance rounded down.
#[must_use]
pub fn radius_between(center: Point, radius_point: Point) -> i32 {
    let dx = f64::from(radius_point.x) - f64::from(center.x);
    let dy = f64::from(radius_point.y) - f64::from(center.y);
    (dx * dx + dy * dy).sqrt().floor() as i32
}

/// Rasterize the circle through `radius_point` centered on `center`.
#[must_use]
pub fn bresenham_circle(center: Point, radius_point: Point) -> Vec<Step> {
    circle_with_radius(center, radius_between(center, radius_point))
}

/// Rasterize a circle of integer `radius` around `center`.
///
/// A radius of zero or below yields the center alone.
#[must_use]
pub fn circle_with_radius(center: Point, radius: i32) -> Vec<Step> {
    if radius <= 0 {
        return vec![Step::new(center, "zero radius")];
    }

    let mut trace = StepTrace::with_capacity(8 * radius as usize);
    let mut seen: HashSet<Point> = HashSet::with_capacity(8 * radius as usize);

    let mut x = 0;
    let mut y = radius;
    let mut decision = 3 - 2 * radius;

    while x <= y {
        let offsets = [
            (x, y),
            (-x, y),
            (x, -y),
            (-x, -y),
            (y, x),
            (-y, x),
            (y, -x),
            (-y, -x),
        ];
        for (ox, oy) in offsets {
            let pixel = Point::new(center.x + ox, center.y + oy);
            if seen.insert(pixel) {
                trace.push_unique(Step::new(pixel, format!("d={decision}")));
            }
        }

        if decision < 0 {
            decision += 4 * x + 6;
        } else {
            decision += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }

    trace.into_steps()
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
