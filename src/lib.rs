#![doc = include_str!("../README.md")]

pub mod config;
pub mod detector;
pub mod error;
pub mod io;
pub mod point;
pub mod segments;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector front-end + results.
pub use crate::detector::{Algorithm, CollinearDetector, DetectParams, DetectionResult};
pub use crate::error::DetectError;

// Core value types.
pub use crate::point::{Point, Slope};
pub use crate::segments::Segment;

/// Small prelude for quick experiments.
///
/// ```
/// use collinear_detector::prelude::*;
///
/// let points = vec![
///     Point::new(1, 1),
///     Point::new(2, 2),
///     Point::new(3, 3),
///     Point::new(4, 4),
/// ];
/// let segments = fast_segments(&points).unwrap();
/// assert_eq!(segments[0].to_string(), "(1,1) -> (4,4)");
/// ```
pub mod prelude {
    pub use crate::detector::{brute_force_segments, fast_segments, fast_segments_par};
    pub use crate::{
        Algorithm, CollinearDetector, DetectError, DetectParams, DetectionResult, Point, Segment,
    };
}
