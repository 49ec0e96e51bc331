//! Midpoint subdivision clipping.
//!
//! Instead of solving for edge intersections, the segment is bisected and
//! halves are classified by outcode. A half whose endpoints share an outside
//! side is invisible and dropped.
//!
//! The search runs in two phases:
//!
//! 1. If neither endpoint is inside, bisect until a midpoint lands inside the
//!    window (or the remaining piece is provably invisible).
//! 2. For each outside endpoint, bisect between it and a known interior point
//!    until the gap is below the convergence threshold; the interior side of
//!    the final gap becomes the clipped endpoint.
//!
//! Each search is limited to `max_iterations` bisections. When a search runs
//! out of budget, or phase 1 reaches a midpoint whose outcode shares no side
//! with either end, the exact Cohen–Sutherland clipper finishes the job.

use super::cohen_sutherland::cohen_sutherland;
use super::outcode::Outcode;
use super::ClipOutcome;
use crate::geometry::{ClipWindow, Line, PointF};

/// Iteration and precision limits for midpoint subdivision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MidpointLimits {
    /// Maximum bisections per search before falling back to Cohen–Sutherland.
    pub max_iterations: u32,
    /// A piece narrower than this on both axes counts as converged.
    pub convergence: f64,
}

impl MidpointLimits {
    /// Default bisection budget per search.
    pub const DEFAULT_MAX_ITERATIONS: u32 = 20;
    /// Default convergence threshold, half a pixel.
    pub const DEFAULT_CONVERGENCE: f64 = 0.5;
}

impl Default for MidpointLimits {
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            convergence: Self::DEFAULT_CONVERGENCE,
        }
    }
}

/// How the search for an interior point ended.
enum Interior {
    Found(PointF),
    /// The piece shrank below the threshold; holds its midpoint if inside.
    Collapsed(Option<PointF>),
    /// Both remaining halves are invisible.
    Invisible,
    /// Bisection cannot decide; the visible part (if any) lies in this piece.
    Undecided(Line),
}

/// Clip `line` against `window` by midpoint subdivision with default limits.
#[must_use]
pub fn midpoint_subdivision(line: Line, window: &ClipWindow) -> ClipOutcome {
    midpoint_subdivision_with(line, window, &MidpointLimits::default())
}

/// Clip `line` against `window` by midpoint subdivision.
///
/// Clipped endpoints are inside the window and within `limits.convergence`
/// of the exact crossing on each axis.
#[must_use]
pub fn midpoint_subdivision_with(line: Line, window: &ClipWindow, limits: &MidpointLimits) -> ClipOutcome {
    let code1 = Outcode::of(line.start, window);
    let code2 = Outcode::of(line.end, window);

    if code1.is_inside() && code2.is_inside() {
        return ClipOutcome::accepted(line, 0);
    }
    if code1.shares_side(code2) {
        return ClipOutcome::rejected(line, 0);
    }

    let mut iterations = 0;

    let anchor = if code1.is_inside() {
        line.start
    } else if code2.is_inside() {
        line.end
    } else {
        match find_interior(line, window, limits, &mut iterations) {
            Interior::Found(point) => point,
            Interior::Collapsed(Some(point)) => {
                return ClipOutcome::accepted(Line::new(point, point), iterations);
            }
            Interior::Collapsed(None) | Interior::Invisible => {
                return ClipOutcome::rejected(line, iterations);
            }
            Interior::Undecided(piece) => {
                return fall_back(line, piece, window, iterations);
            }
        }
    };

    let start = if code1.is_inside() {
        Some(line.start)
    } else {
        pull_inside(line.start, anchor, window, limits, &mut iterations)
    };
    let end = if code2.is_inside() {
        Some(line.end)
    } else {
        pull_inside(line.end, anchor, window, limits, &mut iterations)
    };

    match (start, end) {
        (Some(start), Some(end)) => ClipOutcome::accepted(Line::new(start, end), iterations),
        _ => fall_back(line, line, window, iterations),
    }
}

/// Phase 1: bisect until a midpoint is inside the window.
fn find_interior(
    line: Line,
    window: &ClipWindow,
    limits: &MidpointLimits,
    iterations: &mut u32,
) -> Interior {
    let (mut a, mut b) = (line.start, line.end);
    let mut code_a = Outcode::of(a, window);
    let mut code_b = Outcode::of(b, window);

    for _ in 0..limits.max_iterations {
        let mid = a.midpoint(b);
        if converged(a, b, limits) {
            return Interior::Collapsed(window.contains(mid).then_some(mid));
        }

        *iterations += 1;
        let code_mid = Outcode::of(mid, window);
        if code_mid.is_inside() {
            return Interior::Found(mid);
        }

        if code_mid.shares_side(code_a) {
            a = mid;
            code_a = code_mid;
        } else if code_mid.shares_side(code_b) {
            b = mid;
            code_b = code_mid;
        } else {
            return Interior::Undecided(Line::new(a, b));
        }

        if code_a.shares_side(code_b) {
            return Interior::Invisible;
        }
    }

    Interior::Undecided(Line::new(a, b))
}

/// Phase 2: walk an outside point toward an interior one.
///
/// Returns the interior end of the final gap, or `None` if the budget ran out.
fn pull_inside(
    outside: PointF,
    inside: PointF,
    window: &ClipWindow,
    limits: &MidpointLimits,
    iterations: &mut u32,
) -> Option<PointF> {
    let (mut out, mut inn) = (outside, inside);

    for _ in 0..limits.max_iterations {
        if converged(out, inn, limits) {
            return Some(inn);
        }
        *iterations += 1;
        let mid = out.midpoint(inn);
        if window.contains(mid) {
            inn = mid;
        } else {
            out = mid;
        }
    }

    converged(out, inn, limits).then_some(inn)
}

fn converged(a: PointF, b: PointF, limits: &MidpointLimits) -> bool {
    (b.x - a.x).abs() < limits.convergence && (b.y - a.y).abs() < limits.convergence
}

/// Finish with Cohen–Sutherland on `piece`. Anything outside `piece` has
/// already been shown invisible, so this is exact for the whole `line`.
fn fall_back(line: Line, piece: Line, window: &ClipWindow, iterations: u32) -> ClipOutcome {
    crate::warn!(
        "clip",
        "midpoint subdivision undecided after {iterations} bisections, using Cohen-Sutherland"
    );
    let exact = cohen_sutherland(piece, window);
    let total = iterations + exact.iterations;
    if exact.visible {
        ClipOutcome::accepted(exact.line, total)
    } else {
        ClipOutcome::rejected(line, total)
    }
}
