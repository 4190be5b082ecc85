use crate::error::Result;
use crate::point::Point;
use crate::segments::{self, Segment};
use log::debug;

/// Sort-based detector, O(n² log n).
///
/// For every origin, the remaining points are stable-sorted by their slope to
/// the origin; a run of three or more equal slopes means the run plus the
/// origin form at least four collinear points. Each origin of a maximal set
/// rediscovers the same canonical segment, so the dedup pass at the end is
/// what makes the output final.
pub fn fast_segments(points: &[Point]) -> Result<Vec<Segment>> {
    let pts = super::sorted_points(points)?;
    let mut raw = Vec::new();
    for origin in 0..pts.len() {
        scan_origin(&pts, origin, &mut raw);
    }
    debug!(
        "fast: {} raw candidates from {} points",
        raw.len(),
        pts.len()
    );
    Ok(segments::dedup(raw))
}

/// Parallel variant of [`fast_segments`]: per-origin scans are independent,
/// so they fan out over a rayon pool; the single dedup pass then runs over
/// the merged results. Output is identical to the serial detector, including
/// order.
pub fn fast_segments_par(points: &[Point]) -> Result<Vec<Segment>> {
    use rayon::prelude::*;

    let pts = super::sorted_points(points)?;
    let raw: Vec<Segment> = (0..pts.len())
        .into_par_iter()
        .flat_map_iter(|origin| {
            let mut local = Vec::new();
            scan_origin(&pts, origin, &mut local);
            local
        })
        .collect();
    debug!(
        "fast (parallel): {} raw candidates from {} points",
        raw.len(),
        pts.len()
    );
    Ok(segments::dedup(raw))
}

/// Emits one spanning segment per maximal run of ≥ 3 points sharing a slope
/// relative to `pts[origin]`.
fn scan_origin(pts: &[Point], origin: usize, out: &mut Vec<Segment>) {
    let o = pts[origin];
    let mut others: Vec<Point> = pts
        .iter()
        .copied()
        .enumerate()
        .filter(|&(i, _)| i != origin)
        .map(|(_, p)| p)
        .collect();
    // Stable sort keeps the natural-order tie-break among equal slopes.
    others.sort_by_key(|p| o.slope_to(p));

    let mut start = 0;
    while start < others.len() {
        let slope = o.slope_to(&others[start]);
        let mut end = start + 1;
        while end < others.len() && o.slope_to(&others[end]) == slope {
            end += 1;
        }
        if end - start >= 3 {
            let mut run = others[start..end].to_vec();
            run.push(o);
            if let Some(seg) = segments::spanning(&run) {
                out.push(seg);
            }
        }
        start = end;
    }
}
