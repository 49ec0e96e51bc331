//! Line clipping against an axis-aligned rectangular window.
//!
//! Three clippers share one signature, `(Line, &ClipWindow) -> ClipOutcome`:
//!
//! - **Cohen–Sutherland**: region outcodes, then repeated edge intersection
//! - **Liang–Barsky**: parametric interval `[u1, u2]` narrowed per edge
//! - **Midpoint subdivision**: outcode-guided bisection, no divisions
//!
//! Clipping never fails. A segment that misses the window comes back with
//! `visible == false`.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::geometry::{ClipWindow, Line};

pub mod cohen_sutherland;
pub mod liang_barsky;
pub mod midpoint;
pub mod outcode;

pub use cohen_sutherland::cohen_sutherland;
pub use liang_barsky::liang_barsky;
pub use midpoint::{midpoint_subdivision, midpoint_subdivision_with, MidpointLimits};
pub use outcode::Outcode;

/// Result of clipping one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipOutcome {
    /// Whether any part of the segment lies inside the window.
    pub visible: bool,
    /// The visible part, or the unchanged input when not visible.
    pub line: Line,
    /// Algorithm-specific work count: edge intersections for
    /// Cohen–Sutherland, constraints examined for Liang–Barsky and
    /// bisections for midpoint subdivision.
    pub iterations: u32,
}

impl ClipOutcome {
    pub(crate) fn accepted(line: Line, iterations: u32) -> Self {
        Self { visible: true, line, iterations }
    }

    pub(crate) fn rejected(line: Line, iterations: u32) -> Self {
        Self { visible: false, line, iterations }
    }

    /// The visible segment, if any.
    #[must_use]
    pub fn visible_line(&self) -> Option<Line> {
        self.visible.then_some(self.line)
    }
}

/// Selects a clipping algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClipKind {
    /// Outcode-driven edge intersection.
    CohenSutherland,
    /// Parametric clipping.
    LiangBarsky,
    /// Bisection by outcode.
    MidpointSubdivision,
}

impl ClipKind {
    /// All clippers in presentation order.
    pub const ALL: [Self; 3] = [Self::CohenSutherland, Self::LiangBarsky, Self::MidpointSubdivision];

    /// Kebab-case name used by the CLI and configuration.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CohenSutherland => "cohen-sutherland",
            Self::LiangBarsky => "liang-barsky",
            Self::MidpointSubdivision => "midpoint-subdivision",
        }
    }
}

impl fmt::Display for ClipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ClipKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let kind = match normalized.as_str() {
            "cohen-sutherland" | "cohen" | "cs" => Self::CohenSutherland,
            "liang-barsky" | "liang" | "lb" => Self::LiangBarsky,
            "midpoint-subdivision" | "midpoint" => Self::MidpointSubdivision,
            _ => return Err(Error::UnknownAlgorithm(s.to_string())),
        };
        Ok(kind)
    }
}

/// Clip `line` against `window` with the chosen algorithm and default limits.
#[must_use]
pub fn clip(kind: ClipKind, line: Line, window: &ClipWindow) -> ClipOutcome {
    clip_with(kind, line, window, &MidpointLimits::default())
}

/// Clip `line` against `window`. `limits` only affects midpoint subdivision.
#[must_use]
pub fn clip_with(kind: ClipKind, line: Line, window: &ClipWindow, limits: &MidpointLimits) -> ClipOutcome {
    let start = Instant::now();
    let outcome = match kind {
        ClipKind::CohenSutherland => cohen_sutherland(line, window),
        ClipKind::LiangBarsky => liang_barsky(line, window),
        ClipKind::MidpointSubdivision => midpoint_subdivision_with(line, window, limits),
    };

    crate::debug!(
        "clip",
        "{kind} ({:.2}, {:.2})-({:.2}, {:.2}): visible={} iterations={} in {:.3}ms",
        line.start.x,
        line.start.y,
        line.end.x,
        line.end.y,
        outcome.visible,
        outcome.iterations,
        start.elapsed().as_secs_f64() * 1000.0
    );

    outcome
}

/// Clip every line in `lines` against one window, preserving order.
#[must_use]
pub fn clip_all(kind: ClipKind, lines: &[Line], window: &ClipWindow) -> Vec<ClipOutcome> {
    crate::time_scope!("clip", format!("{kind} x{}", lines.len()));
    let limits = MidpointLimits::default();
    lines.iter().map(|&line| clip_with(kind, line, window, &limits)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> ClipWindow {
        ClipWindow::new(0.0, 0.0, 10.0, 10.0)
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in ClipKind::ALL {
            assert_eq!(kind.name().parse::<ClipKind>().ok(), Some(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!("Liang_Barsky".parse::<ClipKind>().ok(), Some(ClipKind::LiangBarsky));
        assert!(matches!("sutherland-hodgman".parse::<ClipKind>(), Err(Error::UnknownAlgorithm(_))));
    }

    #[test]
    fn test_kind_serde_names() {
        let yaml = serde_yaml_ng::to_string(&ClipKind::MidpointSubdivision).unwrap();
        assert_eq!(yaml.trim(), "midpoint-subdivision");
    }

    #[test]
    fn test_inside_unchanged_for_every_kind() {
        let line = Line::from_coords(1.5, 2.0, 8.0, 7.25);
        for kind in ClipKind::ALL {
            let out = clip(kind, line, &window());
            assert!(out.visible, "{kind}");
            assert_eq!(out.line, line, "{kind}");
            assert_eq!(out.visible_line(), Some(line));
        }
    }

    #[test]
    fn test_rejected_keeps_input() {
        let line = Line::from_coords(-5.0, -5.0, -1.0, -1.0);
        for kind in ClipKind::ALL {
            let out = clip(kind, line, &window());
            assert!(!out.visible, "{kind}");
            assert_eq!(out.line, line);
            assert_eq!(out.visible_line(), None);
        }
    }

    #[test]
    fn test_clip_all_preserves_order() {
        let lines = [
            Line::from_coords(-5.0, 5.0, 15.0, 5.0),
            Line::from_coords(-5.0, -5.0, -1.0, -1.0),
            Line::from_coords(2.0, 2.0, 3.0, 3.0),
        ];
        let outcomes = clip_all(ClipKind::LiangBarsky, &lines, &window());
        let visible: Vec<bool> = outcomes.iter().map(|o| o.visible).collect();
        assert_eq!(visible, vec![true, false, true]);
        assert_eq!(outcomes[2].line, lines[2]);
    }

    #[test]
    fn test_clip_all_empty() {
        assert!(clip_all(ClipKind::CohenSutherland, &[], &window()).is_empty());
    }
}
