//! Canonical segment representation and result filtering.
//!
//! Both detectors describe a maximal collinear set by the same [`Segment`]
//! value: the set's two natural-order extremes, stored min-first. Because the
//! representation is canonical, two detections of the same line (from
//! different origins, different detectors, or different 4-subsets of a longer
//! run) are value-equal, and [`dedup`] can collapse raw detector output into
//! the final answer with a plain hash set.
//!
//! The `Display` form `(x1,y1) -> (x2,y2)` always uses the canonical endpoint
//! order, so logically equal segments render identically wherever segments
//! are logged or used as string keys.

use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Line segment spanning a maximal collinear point set.
///
/// Endpoints are normalized on construction: `p()` is the natural-order
/// minimum, `q()` the maximum. A degenerate pair (both endpoints equal) is
/// never produced by the detectors and is rejected by [`spanning`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Segment {
    p: Point,
    q: Point,
}

// Deserialization re-normalizes through `Segment::new` so a payload with
// flipped endpoints cannot smuggle in a segment violating the min-first
// invariant that equality, hashing, and `Display` rely on.
impl<'de> Deserialize<'de> for Segment {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Endpoints {
            p: Point,
            q: Point,
        }
        let raw = Endpoints::deserialize(deserializer)?;
        Ok(Segment::new(raw.p, raw.q))
    }
}

impl Segment {
    /// Builds a segment from two endpoints in either order.
    pub fn new(a: Point, b: Point) -> Self {
        if a <= b {
            Self { p: a, q: b }
        } else {
            Self { p: b, q: a }
        }
    }

    /// Natural-order minimum endpoint.
    pub fn p(&self) -> Point {
        self.p
    }

    /// Natural-order maximum endpoint.
    pub fn q(&self) -> Point {
        self.q
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.p, self.q)
    }
}

/// Canonicalizer: the spanning segment of a mutually collinear point set.
///
/// Returns the (min, max) pair under natural order, or `None` when the set
/// holds fewer than two distinct points and no segment exists.
pub fn spanning(points: &[Point]) -> Option<Segment> {
    let first = *points.first()?;
    let (min, max) = points
        .iter()
        .fold((first, first), |(lo, hi), &pt| (lo.min(pt), hi.max(pt)));
    if min == max {
        return None;
    }
    Some(Segment::new(min, max))
}

/// Collapses repeated segments, keeping the first occurrence of each distinct
/// endpoint pair in order. Mandatory final step of both detectors; raw
/// output reports a maximal set once per discovering origin or 4-subset.
pub fn dedup(raw: Vec<Segment>) -> Vec<Segment> {
    let mut seen: HashSet<Segment> = HashSet::with_capacity(raw.len());
    raw.into_iter().filter(|seg| seen.insert(*seg)).collect()
}
