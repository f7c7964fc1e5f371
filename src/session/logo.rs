use rand::Rng;

use crate::{
    animation::intro::IntroTween,
    assets::store::GlyphAssetStore,
    connector::graph::ConnectorGraph,
    foundation::config::LogoConfig,
    foundation::core::{Affine, Canvas, Point, Vec2},
    foundation::error::GlyphTrailResult,
    glyph::{
        entity::{Glyph, GlyphMotion},
        window::WindowBounds,
    },
    render::scene::{Camera, PointSet, Scene, SegmentSet},
    sampling::path_sampler::{PathSampler, Placement},
    session::layout::{group_offset, row_layout},
};

/// The whole animated logo: glyphs laid out in a row, their connectors, and the startup tween.
///
/// Owns every per-glyph buffer. Only [`LogoSession::tick`] mutates animation state.
#[derive(Debug)]
pub struct LogoSession {
    glyphs: Vec<Glyph>,
    connectors: ConnectorGraph,
    group_offset: Vec2,
    intro: Option<IntroTween>,
    viewport: Canvas,
    time: f64,
    frame: u64,
}

impl LogoSession {
    /// Sample every roster glyph, lay the row out, pair connectors and arm the intro.
    ///
    /// `rng` draws the phase offsets first, in roster order, then the connector pairing.
    #[tracing::instrument(skip_all, fields(glyphs = cfg.roster.len()))]
    pub fn build<R: Rng + ?Sized>(
        cfg: &LogoConfig,
        assets: &GlyphAssetStore,
        rng: &mut R,
    ) -> GlyphTrailResult<Self> {
        cfg.validate()?;

        let sampler = PathSampler {
            division: cfg.sampling.division,
            dedup_threshold: cfg.sampling.dedup_threshold,
            accuracy: cfg.sampling.arclen_accuracy,
        };

        let sources = cfg
            .roster
            .iter()
            .map(|entry| assets.get(&entry.source))
            .collect::<GlyphTrailResult<Vec<_>>>()?;
        let widths: Vec<f64> = sources.iter().map(|s| s.width).collect();
        let layout = row_layout(&widths, cfg.layout.gap);

        let mut glyphs = Vec::with_capacity(cfg.roster.len());
        for ((entry, source), x) in cfg.roster.iter().zip(&sources).zip(&layout.positions) {
            let placement = Placement {
                scale: cfg.layout.scale,
                offset: Vec2::new(*x, 0.0),
                height: source.height,
            };
            let motion = GlyphMotion {
                speed: cfg.motion.speed,
                span: cfg.motion.span,
                phase_offset: draw_phase(rng, cfg.motion.phase_offset_max),
            };
            let glyph = Glyph::new(&entry.name, source, &sampler, &placement, motion);
            tracing::debug!(
                name = glyph.name(),
                source = %entry.source,
                points = glyph.len(),
                phase = motion.phase_offset,
                "sampled glyph"
            );
            glyphs.push(glyph);
        }

        let connectors =
            ConnectorGraph::build(&mut glyphs, cfg.connectors.max_connectors, rng);
        let intro = cfg
            .intro
            .enabled
            .then(|| IntroTween::start(&mut glyphs, &cfg.intro));

        let offset = group_offset(&layout, cfg.layout.gap, cfg.layout.scale);
        tracing::info!(
            glyphs = glyphs.len(),
            connectors = connectors.len(),
            offset_x = offset.x,
            "logo session ready"
        );

        let mut session = Self {
            glyphs,
            connectors,
            group_offset: offset,
            intro,
            viewport: cfg.render.canvas,
            time: 0.0,
            frame: 0,
        };
        // Anchors are valid before the first tick.
        session.connectors.sync(&session.glyphs, session.group_offset);
        Ok(session)
    }

    /// Advance the animation by `dt` seconds.
    ///
    /// Order matters: tween, then every glyph window, then connectors, so connector endpoints
    /// always match this frame's anchors.
    pub fn tick(&mut self, dt: f64) {
        self.time += dt;
        self.frame += 1;

        if let Some(intro) = self.intro.as_mut() {
            intro.advance(dt, &mut self.glyphs);
            if intro.is_finished() {
                tracing::debug!(time = self.time, "intro finished");
                self.intro = None;
            }
        }

        for glyph in &mut self.glyphs {
            glyph.update(dt);
        }

        self.connectors.sync(&self.glyphs, self.group_offset);
    }

    /// Hand the current frame to `scene`: every glyph's point set, then the connector segments.
    #[tracing::instrument(skip_all, fields(frame = self.frame))]
    pub fn submit(&mut self, scene: &mut dyn Scene) -> GlyphTrailResult<()> {
        scene.begin_frame()?;
        let transform = Affine::translate(self.group_offset);
        for glyph in &self.glyphs {
            scene.submit_points(PointSet {
                name: glyph.name(),
                points: glyph.points(),
                visibility: glyph.visibility(),
                transform,
            })?;
        }
        scene.submit_segments(SegmentSet {
            vertices: self.connectors.vertices(),
            dirty: self.connectors.is_dirty(),
        })?;
        self.connectors.mark_clean();
        Ok(())
    }

    /// Record the new viewport and refresh the camera projection.
    pub fn resize(&mut self, camera: &mut dyn Camera, viewport: Canvas) {
        self.viewport = viewport;
        camera.update(viewport);
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn connectors(&self) -> &ConnectorGraph {
        &self.connectors
    }

    /// Horizontal centering applied to every glyph and connector.
    pub fn group_offset(&self) -> Vec2 {
        self.group_offset
    }

    pub fn intro_active(&self) -> bool {
        self.intro.is_some()
    }

    pub fn viewport(&self) -> Canvas {
        self.viewport
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Ticks applied so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Serializable view of the current state, for inspection and debugging.
    pub fn snapshot(&self) -> SessionSnapshot {
        let names: Vec<&str> = self.glyphs.iter().map(Glyph::name).collect();
        let glyphs = self
            .glyphs
            .iter()
            .map(|g| GlyphSnapshot {
                name: g.name().to_owned(),
                points: g.len(),
                visible: g.visibility().iter().filter(|v| **v != 0).count(),
                speed: g.speed,
                span: g.span,
                elapsed_time: g.window().elapsed_time(),
                hidden: g.hidden_arc(),
                edge1: g.edge1(),
                edge2: g.edge2(),
            })
            .collect();
        let connectors = self
            .connectors
            .connectors()
            .iter()
            .zip(self.connectors.segments())
            .map(|(c, (from, to))| ConnectorSnapshot {
                source: c.source.label(&names),
                target: c.target.label(&names),
                from,
                to,
            })
            .collect();
        SessionSnapshot {
            frame: self.frame,
            time: self.time,
            intro_active: self.intro_active(),
            group_offset: self.group_offset,
            glyphs,
            connectors,
        }
    }
}

fn draw_phase<R: Rng + ?Sized>(rng: &mut R, max: f64) -> f64 {
    if max > 0.0 {
        rng.random_range(0.0..max)
    } else {
        0.0
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GlyphSnapshot {
    pub name: String,
    pub points: usize,
    pub visible: usize,
    pub speed: f64,
    pub span: f64,
    pub elapsed_time: f64,
    /// `None` before the first tick, when every point is still drawn.
    pub hidden: Option<WindowBounds>,
    pub edge1: Option<Point>,
    pub edge2: Option<Point>,
}

/// Endpoints are in composition space, group offset included.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ConnectorSnapshot {
    pub source: String,
    pub target: String,
    pub from: Point,
    pub to: Point,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SessionSnapshot {
    pub frame: u64,
    pub time: f64,
    pub intro_active: bool,
    pub group_offset: Vec2,
    pub glyphs: Vec<GlyphSnapshot>,
    pub connectors: Vec<ConnectorSnapshot>,
}

#[cfg(test)]
#[path = "../../tests/unit/session/logo.rs"]
mod tests;
