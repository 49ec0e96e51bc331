//! Integration tests for the rasterizers through the public dispatcher.
//!
//! Run: cargo test --test raster_test

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use approx::assert_abs_diff_eq;
use pixelwalk::prelude::*;
use proptest::prelude::*;

fn coords(result: &AlgorithmResult) -> Vec<(i32, i32)> {
    result.points().into_iter().map(|p| (p.x, p.y)).collect()
}

// ============================================================================
// Known outputs
// ============================================================================

#[test]
fn test_bresenham_reference_line() {
    let result = rasterize(RasterKind::BresenhamLine, Point::new(0, 0), Point::new(4, 2));
    assert_eq!(coords(&result), vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]);
}

#[test]
fn test_naive_single_point() {
    let result = rasterize(RasterKind::NaiveSlope, Point::new(0, 0), Point::new(0, 0));
    assert_eq!(coords(&result), vec![(0, 0)]);
    assert_abs_diff_eq!(result.steps()[0].intensity(), 1.0);
}

#[test]
fn test_non_antialiased_kinds_emit_full_intensity() {
    for kind in RasterKind::ALL.into_iter().filter(|k| !k.is_antialiased()) {
        let result = rasterize(kind, Point::new(-3, 2), Point::new(9, 7));
        assert!(result.iter().all(|s| s.intensity() == 1.0), "{kind}");
    }
}

#[test]
fn test_wu_intensities_in_unit_range() {
    let result = rasterize(RasterKind::Wu, Point::new(0, 0), Point::new(11, 4));
    assert!(!result.is_empty());
    for step in &result {
        assert!(step.intensity() > 0.0 && step.intensity() <= 1.0, "{step:?}");
    }
}

#[test]
fn test_chain_matches_route() {
    let chain = pixelwalk::raster::chain::route(Point::new(0, 0), Point::new(4, 2));
    assert_eq!(chain.code(), "SDSD");

    let result = rasterize(RasterKind::OptimalChain, Point::new(0, 0), Point::new(4, 2));
    assert_eq!(result.len(), chain.moves.len() + 1);
}

#[test]
fn test_cursor_replays_result() {
    let result = rasterize(RasterKind::Dda, Point::new(0, 0), Point::new(4, 2));
    let mut cursor = result.cursor();

    let mut replayed = Vec::new();
    while let Some(step) = cursor.advance() {
        replayed.push(step.coordinates());
    }
    assert!(cursor.is_finished());
    assert_eq!(replayed, result.points());
    assert_eq!(cursor.revealed().len(), result.len());

    cursor.reset();
    assert_eq!(cursor.position(), None);
}

// ============================================================================
// Properties
// ============================================================================

fn coordinate() -> impl Strategy<Value = i32> {
    -200i32..200
}

fn chebyshev(a: Point, b: Point) -> usize {
    (b.x - a.x).unsigned_abs().max((b.y - a.y).unsigned_abs()) as usize
}

proptest! {
    #[test]
    fn prop_connected_lines(
        x0 in coordinate(), y0 in coordinate(), x1 in coordinate(), y1 in coordinate()
    ) {
        let (a, b) = (Point::new(x0, y0), Point::new(x1, y1));
        for kind in [RasterKind::Dda, RasterKind::BresenhamLine, RasterKind::OptimalChain] {
            let points = rasterize(kind, a, b).points();

            prop_assert_eq!(points.len(), chebyshev(a, b) + 1, "{}", kind);
            prop_assert_eq!(points[0], a, "{}", kind);
            prop_assert_eq!(*points.last().unwrap(), b, "{}", kind);
            for pair in points.windows(2) {
                prop_assert_eq!(pair[0].chebyshev(pair[1]), 1, "{} {:?}", kind, pair);
            }
            let unique: HashSet<_> = points.iter().collect();
            prop_assert_eq!(unique.len(), points.len(), "{}", kind);
        }
    }

    #[test]
    fn prop_circle_symmetric(
        cx in -50i32..50, cy in -50i32..50, r in 1i32..60
    ) {
        let result = rasterize(RasterKind::BresenhamCircle, Point::new(cx, cy), Point::new(cx + r, cy));
        let offsets: HashSet<(i32, i32)> = result.points().iter().map(|p| (p.x - cx, p.y - cy)).collect();

        for &(x, y) in &offsets {
            for mirrored in [(y, x), (-x, y), (x, -y), (-x, -y), (-y, x), (y, -x), (-y, -x)] {
                prop_assert!(offsets.contains(&mirrored), "missing {:?} for r={}", mirrored, r);
            }
        }
        prop_assert_eq!(offsets.len(), result.len());
    }

    #[test]
    fn prop_every_kind_total(
        x0 in coordinate(), y0 in coordinate(), x1 in coordinate(), y1 in coordinate()
    ) {
        for kind in RasterKind::ALL {
            let result = rasterize(kind, Point::new(x0, y0), Point::new(x1, y1));
            prop_assert!(!result.is_empty(), "{}", kind);
            prop_assert_eq!(result.kind(), kind);
        }
    }
}
