//! Cohen–Sutherland region outcodes.
//!
//! ```text
//!        |        |
//!  1001  |  1000  | 1010
//!        |        |
//! -------+--------+-------- ymax
//!        |        |
//!  0001  |  0000  | 0010
//!        |        |
//! -------+--------+-------- ymin
//!        |        |
//!  0101  |  0100  | 0110
//!        |        |
//!      xmin     xmax
//! ```

use bitflags::bitflags;

use crate::geometry::{ClipWindow, PointF};

bitflags! {
    /// Which half-planes of a [`ClipWindow`] a point violates.
    ///
    /// At most one bit per axis is ever set: a point cannot be both left and
    /// right of the window.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Outcode: u8 {
        /// `x < xmin`.
        const LEFT = 1 << 0;
        /// `x > xmax`.
        const RIGHT = 1 << 1;
        /// `y < ymin`.
        const BOTTOM = 1 << 2;
        /// `y > ymax`.
        const TOP = 1 << 3;
    }
}

impl Outcode {
    /// Classify `point` against `window`.
    #[must_use]
    pub fn of(point: PointF, window: &ClipWindow) -> Self {
        let mut code = Self::empty();
        if point.x < window.xmin() {
            code |= Self::LEFT;
        } else if point.x > window.xmax() {
            code |= Self::RIGHT;
        }
        if point.y < window.ymin() {
            code |= Self::BOTTOM;
        } else if point.y > window.ymax() {
            code |= Self::TOP;
        }
        code
    }

    /// The point lies inside the window (boundary included).
    #[must_use]
    pub fn is_inside(self) -> bool {
        self.is_empty()
    }

    /// Both codes are outside on a common side, so the segment between them
    /// cannot cross the window.
    #[must_use]
    pub fn shares_side(self, other: Self) -> bool {
        self.intersects(other)
    }

    /// The edge Cohen–Sutherland clips against next: TOP, BOTTOM, RIGHT, LEFT.
    #[must_use]
    pub fn first_edge(self) -> Option<Self> {
        [Self::TOP, Self::BOTTOM, Self::RIGHT, Self::LEFT]
            .into_iter()
            .find(|edge| self.contains(*edge))
    }
}
