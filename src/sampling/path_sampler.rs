use kurbo::{ParamCurve, ParamCurveArclen, PathEl, PathSeg};

use crate::{
    assets::svg::{VectorGlyph, contour_length},
    foundation::core::{BezPath, Point, Vec2},
};

/// One retained sample. `index` is the position in the glyph's traversal-ordered sequence.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SampledPoint {
    pub index: usize,
    pub position: Point,
}

/// Maps source-space samples into the shared composition space.
///
/// `x' = (x + offset.x) * scale`, `y' = (-y + height / 2 + offset.y) * scale`: source y grows
/// downward, composition y grows upward, and each glyph is vertically centered on its
/// declared height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub scale: f64,
    pub offset: Vec2,
    pub height: f64,
}

impl Placement {
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            (p.x + self.offset.x) * self.scale,
            (-p.y + self.height * 0.5 + self.offset.y) * self.scale,
        )
    }
}

/// Distributes a fixed budget of samples over a glyph's sub-paths by arc length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSampler {
    pub division: u32,
    pub dedup_threshold: f64,
    pub accuracy: f64,
}

impl Default for PathSampler {
    fn default() -> Self {
        Self {
            division: 300,
            dedup_threshold: 0.01,
            accuracy: 1e-3,
        }
    }
}

impl PathSampler {
    /// Per-sub-path sample counts: `ceil(division * len_i / total)`.
    ///
    /// A zero total yields all zeros instead of dividing.
    pub fn allocate(&self, lengths: &[f64]) -> Vec<usize> {
        let total: f64 = lengths.iter().filter(|l| l.is_finite()).sum();
        if total <= 0.0 {
            return vec![0; lengths.len()];
        }
        let division = f64::from(self.division);
        lengths
            .iter()
            .map(|&len| {
                if len.is_finite() && len > 0.0 {
                    (division * len / total).ceil() as usize
                } else {
                    0
                }
            })
            .collect()
    }

    /// Evenly spaced samples of every sub-path, concatenated in sub-path order. No dedup.
    pub fn sample_raw(&self, subpaths: &[BezPath]) -> Vec<Point> {
        let lengths: Vec<f64> = subpaths
            .iter()
            .map(|p| contour_length(p, self.accuracy))
            .collect();
        let counts = self.allocate(&lengths);

        let mut out = Vec::with_capacity(counts.iter().sum());
        for ((path, &length), &count) in subpaths.iter().zip(&lengths).zip(&counts) {
            self.spaced_points(path, length, count, &mut out);
        }
        out
    }

    /// Drop every point whose distance to its circular successor in `raw` is within the
    /// threshold. Successors are taken from the raw sequence, so this is a single pass.
    pub fn dedup(&self, raw: &[Point]) -> Vec<Point> {
        let n = raw.len();
        (0..n)
            .filter(|&i| raw[i].distance(raw[(i + 1) % n]) > self.dedup_threshold)
            .map(|i| raw[i])
            .collect()
    }

    /// Sample, dedup and place a glyph.
    pub fn sample(&self, glyph: &VectorGlyph, placement: &Placement) -> Vec<SampledPoint> {
        let raw = self.sample_raw(&glyph.subpaths);
        self.dedup(&raw)
            .into_iter()
            .enumerate()
            .map(|(index, p)| SampledPoint {
                index,
                position: placement.apply(p),
            })
            .collect()
    }

    // Closed contours are spaced over the full loop without repeating the start point; open
    // contours include both endpoints.
    fn spaced_points(&self, path: &BezPath, length: f64, count: usize, out: &mut Vec<Point>) {
        if count == 0 || length <= 0.0 {
            return;
        }
        let segs: Vec<(PathSeg, f64)> = path
            .segments()
            .map(|s| (s, s.arclen(self.accuracy)))
            .filter(|(_, len)| *len > 0.0)
            .collect();
        if segs.is_empty() {
            return;
        }

        let step = if is_closed(path) {
            length / count as f64
        } else if count > 1 {
            length / (count - 1) as f64
        } else {
            0.0
        };

        let mut seg_idx = 0;
        let mut seg_start = 0.0;
        for k in 0..count {
            let target = (step * k as f64).min(length);
            while seg_idx + 1 < segs.len() && target > seg_start + segs[seg_idx].1 {
                seg_start += segs[seg_idx].1;
                seg_idx += 1;
            }
            let (seg, seg_len) = segs[seg_idx];
            let local = (target - seg_start).clamp(0.0, seg_len);
            let t = seg.inv_arclen(local, self.accuracy);
            out.push(seg.eval(t));
        }
    }
}

fn is_closed(path: &BezPath) -> bool {
    let els = path.elements();
    if matches!(els.last(), Some(PathEl::ClosePath)) {
        return true;
    }
    match (els.first(), els.last().and_then(PathEl::end_point)) {
        (Some(PathEl::MoveTo(start)), Some(end)) => els.len() > 1 && start.distance(end) < 1e-9,
        _ => false,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sampling/path_sampler.rs"]
mod tests;
