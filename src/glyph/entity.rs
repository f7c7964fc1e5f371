use crate::{
    assets::svg::VectorGlyph,
    connector::graph::SlotId,
    foundation::core::Point,
    glyph::window::{VisibilityWindow, WindowBounds},
    sampling::path_sampler::{PathSampler, Placement, SampledPoint},
};

/// Which end of a glyph's hidden window an anchor sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub enum Edge {
    /// `edge1`: the point at the window start.
    Start,
    /// `edge2`: the point at the window end.
    End,
}

impl Edge {
    pub const BOTH: [Edge; 2] = [Edge::Start, Edge::End];

    /// Short tag used in slot labels (`e1` / `e2`).
    pub fn tag(self) -> &'static str {
        match self {
            Self::Start => "e1",
            Self::End => "e2",
        }
    }
}

/// Animation parameters a glyph is created with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphMotion {
    pub speed: f64,
    pub span: f64,
    pub phase_offset: f64,
}

/// One letter's animated point trail.
///
/// The point and visibility buffers are sized once at construction and never change length.
/// `speed` and `span` are plain fields so that tweens outside the glyph can drive them.
#[derive(Clone, Debug)]
pub struct Glyph {
    name: String,
    width: f64,
    height: f64,
    points: Vec<SampledPoint>,
    visibility: Vec<u8>,
    window: VisibilityWindow,
    pub speed: f64,
    pub span: f64,
    edge1_targets: Vec<SlotId>,
    edge2_targets: Vec<SlotId>,
}

impl Glyph {
    pub fn new(
        name: impl Into<String>,
        source: &VectorGlyph,
        sampler: &PathSampler,
        placement: &Placement,
        motion: GlyphMotion,
    ) -> Self {
        let points = sampler.sample(source, placement);
        let mut glyph = Self::from_sampled(name, points, motion);
        glyph.width = source.width;
        glyph.height = source.height;
        glyph
    }

    /// Build from points already in composition space. Indices follow slice order.
    pub fn from_points(name: impl Into<String>, points: &[Point], motion: GlyphMotion) -> Self {
        let points = points
            .iter()
            .enumerate()
            .map(|(index, &position)| SampledPoint { index, position })
            .collect();
        Self::from_sampled(name, points, motion)
    }

    fn from_sampled(name: impl Into<String>, points: Vec<SampledPoint>, motion: GlyphMotion) -> Self {
        let len = points.len();
        Self {
            name: name.into(),
            width: 0.0,
            height: 0.0,
            points,
            visibility: vec![1; len],
            window: VisibilityWindow::new(motion.phase_offset, len),
            speed: motion.speed,
            span: motion.span,
            edge1_targets: Vec::new(),
            edge2_targets: Vec::new(),
        }
    }

    /// Advance this glyph's window by one frame delta.
    pub fn update(&mut self, dt: f64) -> Option<WindowBounds> {
        self.window
            .advance(dt, self.speed, self.span, &mut self.visibility)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared source width, used for layout.
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn points(&self) -> &[SampledPoint] {
        &self.points
    }

    /// One flag per point: 1 = draw, 0 = skip.
    pub fn visibility(&self) -> &[u8] {
        &self.visibility
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn window(&self) -> &VisibilityWindow {
        &self.window
    }

    pub fn bounds(&self) -> Option<WindowBounds> {
        self.window.bounds()
    }

    pub fn hidden_arc(&self) -> Option<WindowBounds> {
        self.window.hidden_arc()
    }

    /// Live anchor position in composition space. `None` for a glyph without points.
    pub fn edge(&self, edge: Edge) -> Option<Point> {
        let bounds = self.window.bounds()?;
        let idx = match edge {
            Edge::Start => bounds.start,
            Edge::End => bounds.end,
        };
        self.points.get(idx).map(|p| p.position)
    }

    pub fn edge1(&self) -> Option<Point> {
        self.edge(Edge::Start)
    }

    pub fn edge2(&self) -> Option<Point> {
        self.edge(Edge::End)
    }

    /// Outbound connector targets recorded for one of this glyph's edges.
    pub fn targets(&self, edge: Edge) -> &[SlotId] {
        match edge {
            Edge::Start => &self.edge1_targets,
            Edge::End => &self.edge2_targets,
        }
    }

    pub(crate) fn push_target(&mut self, edge: Edge, target: SlotId) {
        match edge {
            Edge::Start => self.edge1_targets.push(target),
            Edge::End => self.edge2_targets.push(target),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/entity.rs"]
mod tests;
