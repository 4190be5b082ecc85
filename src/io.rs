//! Point-file parsing.
//!
//! The classic input format is a count header line, one whitespace-separated
//! `x y` pair per line, and an optional blank terminator line. The header and
//! terminator are stripped here; the detectors only ever see parsed points.

use crate::error::{DetectError, Result};
use crate::point::Point;
use std::fs;
use std::path::Path;

pub fn read_points_file(path: &Path) -> Result<Vec<Point>> {
    let data = fs::read_to_string(path).map_err(|e| {
        DetectError::InvalidInput(format!("failed to read {}: {e}", path.display()))
    })?;
    read_points_str(&data)
}

pub fn read_points_str(data: &str) -> Result<Vec<Point>> {
    let mut lines = data.lines();
    let header = lines
        .next()
        .ok_or_else(|| DetectError::InvalidInput("empty input".into()))?;
    let count: usize = header.trim().parse().map_err(|_| {
        DetectError::InvalidInput(format!("bad point-count header {:?}", header.trim()))
    })?;

    let mut points = Vec::with_capacity(count);
    for (idx, line) in lines.enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        points.push(parse_point(line, idx + 2)?);
    }
    if points.len() != count {
        return Err(DetectError::InvalidInput(format!(
            "header promises {count} points, found {}",
            points.len()
        )));
    }
    Ok(points)
}

fn parse_point(line: &str, lineno: usize) -> Result<Point> {
    let bad = || DetectError::InvalidInput(format!("line {lineno}: expected `x y`, got {line:?}"));
    let mut tokens = line.split_whitespace();
    let x = tokens.next().ok_or_else(bad)?;
    let y = tokens.next().ok_or_else(bad)?;
    if tokens.next().is_some() {
        return Err(bad());
    }
    let x: i32 = x.parse().map_err(|_| bad())?;
    let y: i32 = y.parse().map_err(|_| bad())?;
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_points_and_trailing_terminator() {
        let data = "3\n1 1\n2 2\n3 3\n\n";
        let points = read_points_str(data).unwrap();
        assert_eq!(
            points,
            vec![Point::new(1, 1), Point::new(2, 2), Point::new(3, 3)]
        );
    }

    #[test]
    fn rejects_missing_header() {
        assert!(matches!(
            read_points_str(""),
            Err(DetectError::InvalidInput(_))
        ));
        assert!(matches!(
            read_points_str("1 1\n2 2\n"),
            Err(DetectError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_count_mismatch() {
        assert!(matches!(
            read_points_str("5\n1 1\n2 2\n"),
            Err(DetectError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_malformed_coordinate_line() {
        let err = read_points_str("2\n1 1\n2 two\n").unwrap_err();
        assert!(matches!(err, DetectError::InvalidInput(_)));
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn negative_coordinates_are_valid() {
        let points = read_points_str("2\n-3 7\n0 -1\n").unwrap();
        assert_eq!(points, vec![Point::new(-3, 7), Point::new(0, -1)]);
    }
}
