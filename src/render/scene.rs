use crate::{
    foundation::core::{Affine, Canvas, Point},
    foundation::error::GlyphTrailResult,
    sampling::path_sampler::SampledPoint,
};

/// One glyph's points for this frame. Visibility carries one flag per point (1 = draw, 0 = skip);
/// styling is left to the scene.
#[derive(Clone, Copy, Debug)]
pub struct PointSet<'a> {
    pub name: &'a str,
    pub points: &'a [SampledPoint],
    pub visibility: &'a [u8],
    /// Composition group transform applied on top of the point positions.
    pub transform: Affine,
}

/// Connector line segments as flat vertex pairs, already in world space.
#[derive(Clone, Copy, Debug)]
pub struct SegmentSet<'a> {
    pub vertices: &'a [Point],
    /// Set when the vertices changed since the scene last saw them.
    pub dirty: bool,
}

/// Rendering surface that accepts point sets and line-segment sets once per frame.
pub trait Scene {
    fn begin_frame(&mut self) -> GlyphTrailResult<()>;

    fn submit_points(&mut self, set: PointSet<'_>) -> GlyphTrailResult<()>;

    fn submit_segments(&mut self, set: SegmentSet<'_>) -> GlyphTrailResult<()>;
}

/// Projection from world space to surface pixels, refreshed on viewport resize.
pub trait Camera {
    fn update(&mut self, viewport: Canvas);

    fn world_to_screen(&self) -> Affine;
}
