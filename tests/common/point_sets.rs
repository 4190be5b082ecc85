use collinear_detector::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// `n` points on the line through `origin` with integer step `(dx, dy)`.
pub fn line(origin: (i32, i32), step: (i32, i32), n: usize) -> Vec<Point> {
    assert!(step != (0, 0), "line step must be non-degenerate");
    (0..n as i32)
        .map(|i| Point::new(origin.0 + i * step.0, origin.1 + i * step.1))
        .collect()
}

/// `n` distinct random points on a `(range+1) x (range+1)` grid.
///
/// A small range forces plenty of accidental collinearity, which is exactly
/// what the cross-detector equivalence tests want.
pub fn random_grid_points(seed: u64, n: usize, range: i32) -> Vec<Point> {
    let cells = (i64::from(range) + 1) * (i64::from(range) + 1);
    assert!(cells >= n as i64, "grid too small for {n} distinct points");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = HashSet::new();
    let mut points = Vec::with_capacity(n);
    while points.len() < n {
        let p = Point::new(rng.gen_range(0..=range), rng.gen_range(0..=range));
        if seen.insert((p.x, p.y)) {
            points.push(p);
        }
    }
    points
}
