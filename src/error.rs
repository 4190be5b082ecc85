use crate::point::Point;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DetectError {
    /// The point collection, or an entry within it, is missing or malformed.
    /// Raised by the parsing layer; the detectors only ever see valid points.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Two entries share identical coordinates.
    #[error("duplicate point {0}")]
    DuplicatePoint(Point),
}

pub type Result<T> = std::result::Result<T, DetectError>;
