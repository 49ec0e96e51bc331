//! # pixelwalk
//!
//! Discrete rasterization and line clipping, step by step.
//!
//! Rasterizers turn two integer points into the ordered list of pixels an
//! algorithm visits, each with a short label describing its internal state
//! and a coverage intensity. Clippers cut a real-valued segment down to an
//! axis-aligned window and report whether anything is left.
//!
//! ## Quick Start
//!
//! ```rust
//! use pixelwalk::prelude::*;
//!
//! let result = rasterize(RasterKind::BresenhamLine, Point::new(0, 0), Point::new(4, 2));
//! assert_eq!(result.len(), 5);
//!
//! let window = ClipWindow::new(0.0, 0.0, 10.0, 10.0);
//! let outcome = clip(ClipKind::LiangBarsky, Line::from_coords(-5.0, 5.0, 15.0, 5.0), &window);
//! assert!(outcome.visible);
//! ```
//!
//! ## Algorithms
//!
//! - Rasterizers: naive slope, DDA, Bresenham line and circle, Wu
//!   anti-aliased line, Castle–Pitway optimal chain
//! - Clippers: Cohen–Sutherland, Liang–Barsky, midpoint subdivision
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Castle, C. M. A., & Pitteway, M. L. V. (1987). "An Efficient Structural Technique
//!   for Encoding 'Best-Fit' Straight Lines."
//! - Liang, Y.-D., & Barsky, B. A. (1984). "A New Concept and Method for Line Clipping."

#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Integer/float conversions are everywhere in pixel code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Points, segments and clip windows.
pub mod geometry;

/// Steps, algorithm results and playback cursors.
pub mod step;

// ============================================================================
// Algorithms
// ============================================================================

/// Line and circle rasterizers.
pub mod raster;

/// Line clippers.
pub mod clip;

// ============================================================================
// Ambient
// ============================================================================

/// Configuration file and environment overrides.
pub mod config;

/// Leveled stderr logging.
pub mod debug;

/// Error types for pixelwalk operations.
pub mod error;

pub use clip::{clip, clip_all, clip_with, ClipKind, ClipOutcome, MidpointLimits};
pub use error::{Error, Result};
pub use geometry::{ClipWindow, Line, Point, PointF};
pub use raster::{rasterize, RasterKind};
pub use step::{AlgorithmResult, Step, StepCursor};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use pixelwalk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::clip::{clip, clip_all, clip_with, ClipKind, ClipOutcome, MidpointLimits};
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{ClipWindow, Line, Point, PointF};
    pub use crate::raster::{rasterize, RasterKind};
    pub use crate::step::{AlgorithmResult, Step, StepCursor};
}
