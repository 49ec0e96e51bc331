//! Xiaolin Wu's anti-aliased line.
//!
//! Each column along the major axis lights the two pixels straddling the
//! ideal line, splitting coverage by the fractional part of the intersection.
//! Endpoints are additionally weighted by how much of their pixel the segment
//! actually spans (the x-gap).
//!
//! Pixels that receive coverage more than once (the endpoint columns can
//! overlap the interior on very short segments) accumulate it: intensities are
//! summed, then clamped to 1. The final steps are sorted by `(x, y)` and
//! steps whose coverage is effectively zero are dropped.
//!
//! # References
//!
//! Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

use std::collections::BTreeMap;

use crate::geometry::{Point, PointF};
use crate::step::{Step, StepTrace};

/// Coverage at or below this is treated as zero.
const COVERAGE_EPSILON: f64 = 1e-9;

/// Segments shorter than this on both axes collapse to a single pixel.
const DEGENERATE_LENGTH: f64 = 1e-6;

/// One unmerged coverage sample.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Coverage {
    pub(crate) pixel: Point,
    pub(crate) intensity: f64,
}

/// Rasterize the segment between two pixel positions with anti-aliasing.
#[must_use]
pub fn wu_line(start: Point, end: Point) -> Vec<Step> {
    wu_line_f64(PointF::from(start), PointF::from(end))
}

/// Rasterize a segment with sub-pixel endpoints with anti-aliasing.
#[must_use]
pub fn wu_line_f64(start: PointF, end: PointF) -> Vec<Step> {
    if (end.x - start.x).abs() < DEGENERATE_LENGTH && (end.y - start.y).abs() < DEGENERATE_LENGTH {
        let pixel = Point::new(start.x.round() as i32, start.y.round() as i32);
        return vec![Step::new(pixel, "single point")];
    }

    let mut merged: BTreeMap<Point, (f64, u32)> = BTreeMap::new();
    for sample in coverage_samples(start, end) {
        let entry = merged.entry(sample.pixel).or_insert((0.0, 0));
        entry.0 += sample.intensity;
        entry.1 += 1;
    }

    let mut trace = StepTrace::with_capacity(merged.len());
    for (pixel, (coverage, hits)) in merged {
        if coverage <= COVERAGE_EPSILON {
            continue;
        }
        let label = if hits > 1 {
            format!("coverage {coverage:.2} ({hits} samples)")
        } else {
            format!("coverage {coverage:.2}")
        };
        trace.push_unique(Step::with_intensity(pixel, label, coverage));
    }
    trace.into_steps()
}

/// Raw per-column samples before merging, in generation order.
///
/// Samples come in pairs: the pixel on the floor side of the ideal line and
/// its neighbour one unit further along the minor axis.
pub(crate) fn coverage_samples(start: PointF, end: PointF) -> Vec<Coverage> {
    let (mut x0, mut y0, mut x1, mut y1) = (start.x, start.y, end.x, end.y);

    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = y1 - y0;
    let gradient = if dx.abs() < f64::EPSILON { 1.0 } else { dy / dx };

    let mut samples = Vec::new();
    let mut plot_pair = |column: i32, y: f64, weight: f64| {
        let row = y.floor() as i32;
        for (minor, intensity) in [(row, rfpart(y) * weight), (row + 1, fpart(y) * weight)] {
            let pixel = if steep { Point::new(minor, column) } else { Point::new(column, minor) };
            samples.push(Coverage { pixel, intensity });
        }
    };

    // First endpoint
    let xend = x0.round();
    let yend = y0 + gradient * (xend - x0);
    let xgap = rfpart(x0 + 0.5);
    let xpxl1 = xend as i32;
    plot_pair(xpxl1, yend, xgap);

    let mut intery = yend + gradient;

    // Second endpoint
    let xend = x1.round();
    let yend = y1 + gradient * (xend - x1);
    let xgap = fpart(x1 + 0.5);
    let xpxl2 = xend as i32;
    plot_pair(xpxl2, yend, xgap);

    // Main loop
    for x in (xpxl1 + 1)..xpxl2 {
        plot_pair(x, intery, 1.0);
        intery += gradient;
    }

    samples
}

/// Fractional part of a float.
#[inline]
fn fpart(x: f64) -> f64 {
    x - x.floor()
}

/// Reverse fractional part.
#[inline]
fn rfpart(x: f64) -> f64 {
    1.0 - fpart(x)
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
