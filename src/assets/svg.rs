use anyhow::Context;
use kurbo::{ParamCurveArclen, PathEl};

use crate::foundation::{
    core::{Affine, BezPath, Point},
    error::{GlyphTrailError, GlyphTrailResult},
};

/// A letterform loaded from SVG: its contours in document order plus its declared size.
///
/// Each sub-path is a single contour that starts with a `MoveTo`. Immutable once built.
#[derive(Clone, Debug)]
pub struct VectorGlyph {
    pub key: String,
    pub width: f64,
    pub height: f64,
    pub subpaths: Vec<BezPath>,
}

impl VectorGlyph {
    /// Build from already split contours. Contours are not re-split.
    pub fn from_subpaths(
        key: impl Into<String>,
        width: f64,
        height: f64,
        subpaths: Vec<BezPath>,
    ) -> Self {
        Self {
            key: key.into(),
            width,
            height,
            subpaths,
        }
    }

    /// Parse SVG bytes. Every path node contributes its contours with the node's absolute
    /// transform applied.
    pub fn from_svg_bytes(key: impl Into<String>, bytes: &[u8]) -> GlyphTrailResult<Self> {
        let key = key.into();
        let opts = usvg::Options::default();
        let tree = usvg::Tree::from_data(bytes, &opts)
            .with_context(|| format!("parse svg for glyph '{key}'"))?;

        let size = tree.size();
        let (width, height) = (f64::from(size.width()), f64::from(size.height()));
        if !(width > 0.0 && height > 0.0) {
            return Err(GlyphTrailError::asset(format!(
                "glyph '{key}' must declare a positive width and height"
            )));
        }

        let mut subpaths = Vec::new();
        collect_contours(tree.root(), &mut subpaths);
        if subpaths.is_empty() {
            return Err(GlyphTrailError::asset(format!(
                "glyph '{key}' has no drawable path"
            )));
        }

        Ok(Self {
            key,
            width,
            height,
            subpaths,
        })
    }

    /// Arc length of every sub-path, in order.
    pub fn subpath_lengths(&self, accuracy: f64) -> Vec<f64> {
        self.subpaths
            .iter()
            .map(|p| contour_length(p, accuracy))
            .collect()
    }
}

pub(crate) fn contour_length(path: &BezPath, accuracy: f64) -> f64 {
    path.segments().map(|seg| seg.arclen(accuracy)).sum()
}

fn collect_contours(group: &usvg::Group, out: &mut Vec<BezPath>) {
    for child in group.children() {
        match child {
            usvg::Node::Group(g) => collect_contours(g.as_ref(), out),
            usvg::Node::Path(p) => {
                let path = tiny_path_to_kurbo(p.data());
                let path = transform_to_affine(p.abs_transform()) * path;
                out.extend(split_contours(&path));
            }
            usvg::Node::Text(_) | usvg::Node::Image(_) => {}
        }
    }
}

fn transform_to_affine(ts: usvg::Transform) -> Affine {
    Affine::new([
        f64::from(ts.sx),
        f64::from(ts.ky),
        f64::from(ts.kx),
        f64::from(ts.sy),
        f64::from(ts.tx),
        f64::from(ts.ty),
    ])
}

fn tiny_path_to_kurbo(path: &usvg::tiny_skia_path::Path) -> BezPath {
    use usvg::tiny_skia_path::PathSegment;

    fn pt(p: usvg::tiny_skia_path::Point) -> Point {
        Point::new(f64::from(p.x), f64::from(p.y))
    }

    let mut out = BezPath::new();
    for seg in path.segments() {
        match seg {
            PathSegment::MoveTo(p) => out.move_to(pt(p)),
            PathSegment::LineTo(p) => out.line_to(pt(p)),
            PathSegment::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathSegment::CubicTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathSegment::Close => out.close_path(),
        }
    }
    out
}

/// Split a path into one `BezPath` per `MoveTo`-delimited contour. Contours without any
/// drawing element are dropped.
pub fn split_contours(path: &BezPath) -> Vec<BezPath> {
    let mut out = Vec::new();
    let mut current = BezPath::new();
    for &el in path.elements() {
        if let PathEl::MoveTo(_) = el {
            let done = std::mem::take(&mut current);
            if done.elements().len() > 1 {
                out.push(done);
            }
        }
        current.push(el);
    }
    if current.elements().len() > 1 {
        out.push(current);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/assets/svg.rs"]
mod tests;
