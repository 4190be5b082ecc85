//! Maximal collinear set detection.
//!
//! Two detectors share one contract: given points with no duplicate
//! coordinates, return every maximal set of four or more collinear points as
//! a canonical [`Segment`], each distinct line exactly once.
//!
//! - [`brute_force_segments`] enumerates all 4-point combinations, O(n⁴).
//!   Reference behavior; useful as an oracle in tests.
//! - [`fast_segments`] sorts the remaining points by slope around every
//!   origin and scans for runs of equal slope, O(n² log n).
//!   [`fast_segments_par`] fans the per-origin scans out over rayon.
//!
//! Both validate their input up front and abort with
//! [`DetectError::DuplicatePoint`] on a repeated coordinate; there are no
//! partial results. Input slices are never mutated; each detector sorts a
//! private copy.

mod brute;
mod fast;

pub use brute::brute_force_segments;
pub use fast::{fast_segments, fast_segments_par};

use crate::error::{DetectError, Result};
use crate::point::Point;
use crate::segments::Segment;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Detection algorithm selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    BruteForce,
    #[default]
    Fast,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct DetectParams {
    pub algorithm: Algorithm,
    /// Run the per-origin scans of the fast detector on a rayon pool.
    /// Ignored by the brute-force detector.
    pub parallel: bool,
}

/// Front-end wrapping both detectors behind a single `detect` call.
pub struct CollinearDetector {
    params: DetectParams,
}

/// Final, deduplicated detection output.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetectionResult {
    pub segments: Vec<Segment>,
}

impl CollinearDetector {
    pub fn new(params: DetectParams) -> Self {
        Self { params }
    }

    pub fn detect(&self, points: &[Point]) -> Result<DetectionResult> {
        debug!(
            "detect: algorithm={:?} parallel={} n={}",
            self.params.algorithm,
            self.params.parallel,
            points.len()
        );
        let segments = match self.params.algorithm {
            Algorithm::BruteForce => {
                if self.params.parallel {
                    warn!("parallel flag has no effect on the brute-force detector");
                }
                brute_force_segments(points)?
            }
            Algorithm::Fast if self.params.parallel => fast_segments_par(points)?,
            Algorithm::Fast => fast_segments(points)?,
        };
        Ok(DetectionResult { segments })
    }
}

/// Validates the input and returns a private copy sorted by natural order.
///
/// Sorting makes duplicate detection a scan over adjacent entries and gives
/// both detectors a deterministic iteration order.
fn sorted_points(points: &[Point]) -> Result<Vec<Point>> {
    let mut pts = points.to_vec();
    pts.sort();
    for pair in pts.windows(2) {
        if pair[0] == pair[1] {
            return Err(DetectError::DuplicatePoint(pair[0]));
        }
    }
    Ok(pts)
}
