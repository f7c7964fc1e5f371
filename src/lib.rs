//! glyphtrail renders an animated dot-trail logo.
//!
//! Each letter is an SVG outline that gets sampled into an ordered point cloud. A hidden
//! window sweeps along every cloud over time, so the letters look like flowing dashes. A
//! handful of random connector lines join the window edges of different letters, which gives
//! the row the look of a small network diagram.
//!
//! # Pipeline overview
//!
//! 1. **Load**: `<dir>/<key>.svg -> VectorGlyph`, all files in parallel ([`GlyphAssetStore`])
//! 2. **Build**: `LogoConfig + assets + rng -> LogoSession` (sampling, layout, pairing, intro)
//! 3. **Tick**: `LogoSession::tick(dt)` moves the intro, every window, then the connectors
//! 4. **Submit**: `LogoSession::submit(&mut dyn Scene)` hands points and segments to a backend
//!    such as [`CpuScene`], which produces a [`FrameRGBA`]
//!
//! The frame loop is single-threaded and deterministic for a seeded rng. All IO happens while
//! loading assets.
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod connector;
mod foundation;
mod glyph;
mod render;
mod sampling;
mod session;

pub use animation::ease::Ease;
pub use animation::intro::IntroTween;
pub use assets::store::{GlyphAssetStore, glyph_file_name, validate_asset_key};
pub use assets::svg::{VectorGlyph, split_contours};
pub use connector::graph::{
    Connector, ConnectorGraph, DEFAULT_MAX_CONNECTORS, DRAWS_PER_EDGE, SlotId, offered_slots,
    pair_slots,
};
pub use foundation::config::{
    CameraConfig, ConnectorConfig, GlyphEntry, IntroConfig, LayoutConfig, LogoConfig,
    MotionConfig, RenderConfig, SamplingConfig, default_roster,
};
pub use foundation::core::{Affine, BezPath, Canvas, Fps, Point, Vec2};
pub use foundation::error::{GlyphTrailError, GlyphTrailResult};
pub use glyph::entity::{Edge, Glyph, GlyphMotion};
pub use glyph::window::{VisibilityWindow, WindowBounds};
pub use render::camera::OrthographicCamera;
pub use render::cpu::{CpuScene, SceneStyle};
pub use render::frame::FrameRGBA;
pub use render::scene::{Camera, PointSet, Scene, SegmentSet};
pub use sampling::path_sampler::{PathSampler, Placement, SampledPoint};
pub use session::clock::FrameClock;
pub use session::layout::{RowLayout, group_offset, row_layout};
pub use session::logo::{ConnectorSnapshot, GlyphSnapshot, LogoSession, SessionSnapshot};
