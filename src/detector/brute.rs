use crate::error::Result;
use crate::point::{Point, Slope};
use crate::segments::{self, Segment};
use log::debug;

/// Exhaustive reference detector.
///
/// Checks every strictly increasing index quadruple: the four points are
/// collinear iff the three consecutive pair slopes are equal, which exact
/// rational slopes make a plain equality test. Each qualifying quadruple is
/// extended to every input point on its line before emission, so the segment
/// always spans the maximal set; a set larger than four is rediscovered once
/// per 4-subset and the final dedup pass collapses the value-equal repeats.
pub fn brute_force_segments(points: &[Point]) -> Result<Vec<Segment>> {
    let pts = super::sorted_points(points)?;
    let n = pts.len();
    let mut raw = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let slope_ij = pts[i].slope_to(&pts[j]);
            for k in (j + 1)..n {
                if pts[j].slope_to(&pts[k]) != slope_ij {
                    continue;
                }
                for l in (k + 1)..n {
                    if pts[k].slope_to(&pts[l]) == slope_ij {
                        if let Some(seg) = maximal_segment(&pts, i, slope_ij) {
                            raw.push(seg);
                        }
                    }
                }
            }
        }
    }
    debug!(
        "brute force: {} raw candidates from {} points",
        raw.len(),
        n
    );
    Ok(segments::dedup(raw))
}

/// Spanning segment of every input point on the line through `pts[anchor]`
/// with the given slope. Extending past the discovering quadruple keeps the
/// emitted endpoints the true extremes of the maximal set, so runs longer
/// than four collapse to one value under dedup instead of leaving
/// overlapping sub-segments behind.
fn maximal_segment(pts: &[Point], anchor: usize, slope: Slope) -> Option<Segment> {
    let a = pts[anchor];
    // The anchor's slope to itself is the degenerate sentinel, never `slope`,
    // so it is appended explicitly.
    let mut on_line: Vec<Point> = pts
        .iter()
        .copied()
        .filter(|p| a.slope_to(p) == slope)
        .collect();
    on_line.push(a);
    segments::spanning(&on_line)
}
