use num_rational::Ratio;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Planar point with integer coordinates.
///
/// The derived `Ord` is the natural order used everywhere in the crate:
/// compare by `x` ascending, then by `y` ascending. Field order matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Slope between two points, used purely as an exact grouping key.
///
/// Variant order gives `Degenerate < Finite(_) < Vertical`, mirroring
/// −∞ < finite < +∞. `Finite` holds a reduced, sign-normalized rational so
/// mathematically equal slopes always compare equal; `Degenerate` marks an
/// identical-coordinates pair and must never reach a collinearity comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Slope {
    Degenerate,
    Finite(Ratio<i64>),
    Vertical,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Slope of the line through `self` and `other`.
    ///
    /// Vertical pairs (equal `x`, differing `y`) map to `Slope::Vertical`;
    /// an identical pair maps to `Slope::Degenerate`. Finite slopes are exact
    /// rationals, so `a.slope_to(b) == b.slope_to(a)` holds for any distinct
    /// non-vertical pair.
    pub fn slope_to(&self, other: &Point) -> Slope {
        let dx = i64::from(other.x) - i64::from(self.x);
        let dy = i64::from(other.y) - i64::from(self.y);
        match (dx, dy) {
            (0, 0) => Slope::Degenerate,
            (0, _) => Slope::Vertical,
            _ => Slope::Finite(Ratio::new(dy, dx)),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
