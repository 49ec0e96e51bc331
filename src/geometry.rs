//! Geometric primitives shared by the rasterizers and clippers.
//!
//! Rasterizers work on whole pixels ([`Point`]); the clipping engine works on
//! real-valued segments ([`Line`]) against an axis-aligned [`ClipWindow`].

use crate::error::{Error, Result};

/// An integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance, the number of unit moves an 8-connected walk needs.
    #[must_use]
    pub fn chebyshev(self, other: Self) -> i32 {
        (other.x - self.x).abs().max((other.y - self.y).abs())
    }

    /// Whether `other` is one of the eight neighbours of `self` (or `self`).
    #[must_use]
    pub fn touches(self, other: Self) -> bool {
        self.chebyshev(other) <= 1
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A point with real-valued coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl PointF {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Midpoint between two points.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl From<Point> for PointF {
    fn from(p: Point) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

/// A line segment between two real-valued points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Start point.
    pub start: PointF,
    /// End point.
    pub end: PointF,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: PointF, end: PointF) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(PointF::new(x1, y1), PointF::new(x2, y2))
    }

    /// Get the length of the line.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Horizontal extent `x2 - x1`.
    #[must_use]
    pub fn dx(&self) -> f64 {
        self.end.x - self.start.x
    }

    /// Vertical extent `y2 - y1`.
    #[must_use]
    pub fn dy(&self) -> f64 {
        self.end.y - self.start.y
    }

    /// Point at parameter `t` along the segment (`0` = start, `1` = end).
    #[must_use]
    pub fn point_at(&self, t: f64) -> PointF {
        self.start.lerp(self.end, t)
    }

    /// Whether both endpoints lie within `tolerance` of `other`'s endpoints.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.start.x - other.start.x).abs() <= tolerance
            && (self.start.y - other.start.y).abs() <= tolerance
            && (self.end.x - other.end.x).abs() <= tolerance
            && (self.end.y - other.end.y).abs() <= tolerance
    }
}

/// An axis-aligned clip rectangle with `xmin <= xmax` and `ymin <= ymax`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipWindow {
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
}

impl ClipWindow {
    /// Create a window, swapping bounds that were given in the wrong order.
    #[must_use]
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin: xmin.min(xmax),
            ymin: ymin.min(ymax),
            xmax: xmin.max(xmax),
            ymax: ymin.max(ymax),
        }
    }

    /// Create a window, rejecting inverted or non-finite bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWindow`] if `xmin > xmax`, `ymin > ymax`, or
    /// any bound is NaN or infinite.
    pub fn try_new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self> {
        let finite = [xmin, ymin, xmax, ymax].iter().all(|v| v.is_finite());
        if !finite || xmin > xmax || ymin > ymax {
            return Err(Error::InvalidWindow { xmin, ymin, xmax, ymax });
        }
        Ok(Self { xmin, ymin, xmax, ymax })
    }

    /// Left bound.
    #[must_use]
    pub const fn xmin(&self) -> f64 {
        self.xmin
    }

    /// Bottom bound.
    #[must_use]
    pub const fn ymin(&self) -> f64 {
        self.ymin
    }

    /// Right bound.
    #[must_use]
    pub const fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Top bound.
    #[must_use]
    pub const fn ymax(&self) -> f64 {
        self.ymax
    }

    /// Check if a point is inside the window (boundary included).
    #[must_use]
    pub fn contains(&self, point: PointF) -> bool {
        point.x >= self.xmin && point.x <= self.xmax && point.y >= self.ymin && point.y <= self.ymax
    }

    /// Width of the window.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Height of the window.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }
}
