//! Cohen–Sutherland line clipping.

use super::outcode::Outcode;
use super::ClipOutcome;
use crate::geometry::{ClipWindow, Line, PointF};

/// Upper bound on edge intersections. Two per endpoint suffice in exact
/// arithmetic; the slack absorbs rounding that lands a hair outside an edge.
const MAX_INTERSECTIONS: u32 = 8;

/// Clip `line` against `window` with Cohen–Sutherland.
///
/// Segments whose endpoints share an outside side are rejected before any
/// intersection is computed, so `iterations` is zero for them.
#[must_use]
pub fn cohen_sutherland(line: Line, window: &ClipWindow) -> ClipOutcome {
    let (mut p1, mut p2) = (line.start, line.end);
    let mut code1 = Outcode::of(p1, window);
    let mut code2 = Outcode::of(p2, window);
    let mut intersections = 0;

    loop {
        if code1.is_inside() && code2.is_inside() {
            return ClipOutcome::accepted(Line::new(p1, p2), intersections);
        }
        if code1.shares_side(code2) || intersections >= MAX_INTERSECTIONS {
            return ClipOutcome::rejected(line, intersections);
        }

        let move_first = !code1.is_inside();
        let code_out = if move_first { code1 } else { code2 };
        let Some(edge) = code_out.first_edge() else {
            return ClipOutcome::rejected(line, intersections);
        };

        // The other endpoint is not beyond `edge` (no shared side), so the
        // segment is not parallel to it and the division is safe.
        let point = edge_intersection(p1, p2, edge, window);
        intersections += 1;

        if move_first {
            p1 = point;
            code1 = Outcode::of(p1, window);
        } else {
            p2 = point;
            code2 = Outcode::of(p2, window);
        }
    }
}

/// Where the line through `p1`-`p2` meets the window edge named by `edge`.
fn edge_intersection(p1: PointF, p2: PointF, edge: Outcode, window: &ClipWindow) -> PointF {
    let (dx, dy) = (p2.x - p1.x, p2.y - p1.y);
    if edge == Outcode::TOP {
        PointF::new(p1.x + dx * (window.ymax() - p1.y) / dy, window.ymax())
    } else if edge == Outcode::BOTTOM {
        PointF::new(p1.x + dx * (window.ymin() - p1.y) / dy, window.ymin())
    } else if edge == Outcode::RIGHT {
        PointF::new(window.xmax(), p1.y + dy * (window.xmax() - p1.x) / dx)
    } else {
        PointF::new(window.xmin(), p1.y + dy * (window.xmin() - p1.x) / dx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> ClipWindow {
        ClipWindow::new(0.0, 0.0, 10.0, 10.0)
    }

    #[test]
    fn test_horizontal_through_window() {
        let out = cohen_sutherland(Line::from_coords(-5.0, 5.0, 15.0, 5.0), &window());
        assert!(out.visible);
        assert!(out.line.approx_eq(&Line::from_coords(0.0, 5.0, 10.0, 5.0), 1e-12));
        assert_eq!(out.iterations, 2);
    }

    #[test]
    fn test_inside_unchanged() {
        let line = Line::from_coords(1.0, 2.0, 8.5, 9.0);
        let out = cohen_sutherland(line, &window());
        assert!(out.visible);
        assert_eq!(out.line, line);
        assert_eq!(out.iterations, 0);
    }

    #[test]
    fn test_trivial_reject_without_intersection() {
        let out = cohen_sutherland(Line::from_coords(-5.0, -3.0, -1.0, 20.0), &window());
        assert!(!out.visible);
        assert_eq!(out.iterations, 0);
    }

    #[test]
    fn test_parallel_outside_rejected() {
        let out = cohen_sutherland(Line::from_coords(-2.0, 12.0, 15.0, 12.0), &window());
        assert!(!out.visible);
        assert_eq!(out.iterations, 0);
    }

    #[test]
    fn test_corner_miss_rejected_after_clipping() {
        // Passes above the top-left corner.
        let out = cohen_sutherland(Line::from_coords(-5.0, 6.0, 4.0, 15.0), &window());
        assert!(!out.visible);
        assert!(out.iterations > 0);
    }

    #[test]
    fn test_diagonal_clipped_both_ends() {
        let out = cohen_sutherland(Line::from_coords(-5.0, -5.0, 15.0, 15.0), &window());
        assert!(out.visible);
        assert!(out.line.approx_eq(&Line::from_coords(0.0, 0.0, 10.0, 10.0), 1e-12));
    }

    #[test]
    fn test_one_end_inside() {
        let out = cohen_sutherland(Line::from_coords(5.0, 5.0, 5.0, 20.0), &window());
        assert!(out.visible);
        assert!(out.line.approx_eq(&Line::from_coords(5.0, 5.0, 5.0, 10.0), 1e-12));
    }
}
