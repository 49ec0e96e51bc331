//! Discrete rasterization of line segments and circles.
//!
//! Every rasterizer is a pure function from two integer points to an ordered
//! list of [`Step`]s. [`rasterize`] selects one by [`RasterKind`], times it
//! and wraps the steps in an [`AlgorithmResult`].
//!
//! # Algorithms
//!
//! - **Naive slope**: exact `y = y0 + m(x - x0)` per column, rounded
//! - **DDA**: equal-parameter sampling from the pixel center
//! - **Bresenham's Line**: integer error term, one pixel per major-axis unit
//! - **Bresenham's Circle**: midpoint recurrence with 8-way symmetry
//! - **Wu's Anti-aliased Line**: two pixels per column with fractional coverage
//! - **Optimal chain (Castle–Pitway)**: greedy S/D chain code in the first octant
//!
//! # References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::geometry::Point;
use crate::step::{AlgorithmResult, Step};

pub mod bresenham;
pub mod chain;
pub mod circle;
pub mod dda;
pub mod naive;
pub mod wu;

pub use bresenham::bresenham_line;
pub use chain::{castle_pitway_line, ChainMove, OctantTransform};
pub use circle::bresenham_circle;
pub use dda::dda_line;
pub use naive::naive_slope_line;
pub use wu::{wu_line, wu_line_f64};

/// Selects a rasterization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RasterKind {
    /// Direct slope evaluation with rounding.
    NaiveSlope,
    /// Digital differential analyzer.
    Dda,
    /// Bresenham's integer line.
    BresenhamLine,
    /// Bresenham's midpoint circle; the second point sets the radius.
    BresenhamCircle,
    /// Wu's anti-aliased line.
    Wu,
    /// Castle–Pitway optimal chain.
    OptimalChain,
}

impl RasterKind {
    /// All rasterizers in presentation order.
    pub const ALL: [Self; 6] = [
        Self::NaiveSlope,
        Self::Dda,
        Self::BresenhamLine,
        Self::BresenhamCircle,
        Self::Wu,
        Self::OptimalChain,
    ];

    /// Kebab-case name used by the CLI and configuration.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NaiveSlope => "naive-slope",
            Self::Dda => "dda",
            Self::BresenhamLine => "bresenham-line",
            Self::BresenhamCircle => "bresenham-circle",
            Self::Wu => "wu",
            Self::OptimalChain => "optimal-chain",
        }
    }

    /// Whether the steps carry fractional intensities.
    #[must_use]
    pub const fn is_antialiased(self) -> bool {
        matches!(self, Self::Wu)
    }

    /// Whether the second point is a radius point rather than a line end.
    #[must_use]
    pub const fn is_circle(self) -> bool {
        matches!(self, Self::BresenhamCircle)
    }
}

impl fmt::Display for RasterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RasterKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let kind = match normalized.as_str() {
            "naive-slope" | "naive" | "step-by-step" => Self::NaiveSlope,
            "dda" => Self::Dda,
            "bresenham-line" | "bresenham" => Self::BresenhamLine,
            "bresenham-circle" | "circle" => Self::BresenhamCircle,
            "wu" | "xiaolin-wu" => Self::Wu,
            "optimal-chain" | "castle-pitway" => Self::OptimalChain,
            _ => return Err(Error::UnknownAlgorithm(s.to_string())),
        };
        Ok(kind)
    }
}

/// Run one rasterizer.
///
/// For [`RasterKind::BresenhamCircle`], `a` is the center and `b` a point on
/// the circle; for every other kind they are the segment endpoints. Never
/// fails: degenerate input yields a single step.
#[must_use]
pub fn rasterize(kind: RasterKind, a: Point, b: Point) -> AlgorithmResult {
    let start = Instant::now();
    let steps: Vec<Step> = match kind {
        RasterKind::NaiveSlope => naive_slope_line(a, b),
        RasterKind::Dda => dda_line(a, b),
        RasterKind::BresenhamLine => bresenham_line(a, b),
        RasterKind::BresenhamCircle => bresenham_circle(a, b),
        RasterKind::Wu => wu_line(a, b),
        RasterKind::OptimalChain => castle_pitway_line(a, b),
    };
    let elapsed = start.elapsed();

    crate::debug!(
        "raster",
        "{kind} ({}, {}) -> ({}, {}): {} steps in {:.3}ms",
        a.x,
        a.y,
        b.x,
        b.y,
        steps.len(),
        elapsed.as_secs_f64() * 1000.0
    );

    AlgorithmResult::new(kind, steps, elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in RasterKind::ALL {
            assert_eq!(kind.name().parse::<RasterKind>().ok(), Some(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_kind_aliases() {
        assert_eq!("Bresenham".parse::<RasterKind>().ok(), Some(RasterKind::BresenhamLine));
        assert_eq!("castle_pitway".parse::<RasterKind>().ok(), Some(RasterKind::OptimalChain));
        assert!(matches!("spline".parse::<RasterKind>(), Err(Error::UnknownAlgorithm(_))));
    }

    #[test]
    fn test_rasterize_tags_result() {
        let result = rasterize(RasterKind::Dda, Point::new(0, 0), Point::new(3, 1));
        assert_eq!(result.kind(), RasterKind::Dda);
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_every_kind_handles_degenerate_input() {
        for kind in RasterKind::ALL {
            let result = rasterize(kind, Point::new(5, 5), Point::new(5, 5));
            assert_eq!(result.points(), vec![Point::new(5, 5)], "{kind}");
            assert_eq!(result.steps()[0].intensity(), 1.0);
        }
    }

    #[test]
    fn test_circle_uses_second_point_as_radius() {
        let result = rasterize(RasterKind::BresenhamCircle, Point::new(0, 0), Point::new(0, 10));
        assert!(result.points().contains(&Point::new(10, 0)));
        assert!(result.points().contains(&Point::new(0, -10)));
    }

    #[test]
    fn test_kind_serde_names() {
        let yaml = serde_yaml_ng::to_string(&RasterKind::OptimalChain).unwrap();
        assert_eq!(yaml.trim(), "optimal-chain");
        let kind: RasterKind = serde_yaml_ng::from_str("bresenham-circle").unwrap();
        assert_eq!(kind, RasterKind::BresenhamCircle);
    }
}
