//! Liang–Barsky parametric line clipping.
//!
//! With `P(u) = P0 + u * (P1 - P0)`, each window edge gives a constraint
//! `p * u <= q`:
//!
//! ```text
//! left:   p = -dx   q = x1 - xmin
//! right:  p =  dx   q = xmax - x1
//! bottom: p = -dy   q = y1 - ymin
//! top:    p =  dy   q = ymax - y1
//! ```
//!
//! `p < 0` means the segment enters through that edge (raises `u1`), `p > 0`
//! that it leaves (lowers `u2`), `p == 0` that it is parallel to the edge.

use super::ClipOutcome;
use crate::geometry::{ClipWindow, Line};

/// Clip `line` against `window` with Liang–Barsky.
///
/// `iterations` counts the edge constraints examined before the decision.
#[must_use]
pub fn liang_barsky(line: Line, window: &ClipWindow) -> ClipOutcome {
    let (x1, y1) = (line.start.x, line.start.y);
    let (dx, dy) = (line.dx(), line.dy());

    let p = [-dx, dx, -dy, dy];
    let q = [
        x1 - window.xmin(),
        window.xmax() - x1,
        y1 - window.ymin(),
        window.ymax() - y1,
    ];

    let mut u1 = 0.0_f64;
    let mut u2 = 1.0_f64;
    let mut examined = 0;

    for (&pi, &qi) in p.iter().zip(q.iter()) {
        examined += 1;
        if pi == 0.0 {
            // Parallel to this edge: fully outside or irrelevant.
            if qi < 0.0 {
                return ClipOutcome::rejected(line, examined);
            }
            continue;
        }

        let t = qi / pi;
        if pi < 0.0 {
            if t > u2 {
                return ClipOutcome::rejected(line, examined);
            }
            u1 = u1.max(t);
        } else {
            if t < u1 {
                return ClipOutcome::rejected(line, examined);
            }
            u2 = u2.min(t);
        }
    }

    // Untouched ends are copied so an unclipped segment comes back bit-for-bit.
    let start = if u1 > 0.0 { line.point_at(u1) } else { line.start };
    let end = if u2 < 1.0 { line.point_at(u2) } else { line.end };
    let clipped = Line::new(start, end);
    ClipOutcome::accepted(clipped, examined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> ClipWindow {
        ClipWindow::new(0.0, 0.0, 10.0, 10.0)
    }

    #[test]
    fn test_outside_bottom_left_rejected() {
        let out = liang_barsky(Line::from_coords(-5.0, -5.0, -1.0, -1.0), &window());
        assert!(!out.visible);
    }

    #[test]
    fn test_inside_unchanged() {
        let line = Line::from_coords(2.0, 3.0, 7.0, 1.5);
        let out = liang_barsky(line, &window());
        assert!(out.visible);
        assert_eq!(out.line, line);
        assert_eq!(out.iterations, 4);
    }

    #[test]
    fn test_horizontal_through_window() {
        let out = liang_barsky(Line::from_coords(-5.0, 5.0, 15.0, 5.0), &window());
        assert!(out.visible);
        assert!(out.line.approx_eq(&Line::from_coords(0.0, 5.0, 10.0, 5.0), 1e-12));
    }

    #[test]
    fn test_parallel_outside_rejected() {
        let out = liang_barsky(Line::from_coords(12.0, -3.0, 12.0, 30.0), &window());
        assert!(!out.visible);
    }

    #[test]
    fn test_reversed_direction() {
        let out = liang_barsky(Line::from_coords(15.0, 15.0, -5.0, -5.0), &window());
        assert!(out.visible);
        assert!(out.line.approx_eq(&Line::from_coords(10.0, 10.0, 0.0, 0.0), 1e-12));
    }

    #[test]
    fn test_degenerate_point() {
        let inside = liang_barsky(Line::from_coords(4.0, 4.0, 4.0, 4.0), &window());
        assert!(inside.visible);
        let outside = liang_barsky(Line::from_coords(-4.0, 4.0, -4.0, 4.0), &window());
        assert!(!outside.visible);
    }

    #[test]
    fn test_corner_miss() {
        let out = liang_barsky(Line::from_coords(-5.0, 6.0, 4.0, 15.0), &window());
        assert!(!out.visible);
    }
}
