use std::{collections::HashSet, path::Path};

use anyhow::Context;

use crate::{
    animation::ease::Ease,
    foundation::core::{Canvas, Fps},
    foundation::error::{GlyphTrailError, GlyphTrailResult},
};

/// One entry of the left-to-right glyph roster.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlyphEntry {
    /// Unique display name (`O1`, `O2`, ...). Connector slots refer to glyphs by this name.
    pub name: String,
    /// Asset key resolved against the glyph directory as `<source>.svg`.
    pub source: String,
}

impl GlyphEntry {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal gap between glyphs, in source units.
    pub gap: f64,
    /// Uniform source-to-composition scale.
    pub scale: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gap: 20.0,
            scale: 0.01,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Target number of raw samples per glyph, split across sub-paths by arc length.
    pub division: u32,
    /// Points closer than this (source units) to their successor are dropped.
    pub dedup_threshold: f64,
    /// Accuracy passed to kurbo arc-length queries.
    pub arclen_accuracy: f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            division: 300,
            dedup_threshold: 0.01,
            arclen_accuracy: 1e-3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Steady-state window speed, in point indices per second.
    pub speed: f64,
    /// Steady-state hidden window width, in point indices.
    pub span: f64,
    /// Phase offsets are drawn uniformly from `[0, phase_offset_max)`.
    pub phase_offset_max: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            speed: 50.0,
            span: 50.0,
            phase_offset_max: 1000.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConnectorConfig {
    pub max_connectors: usize,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self { max_connectors: 12 }
    }
}

/// Startup settle: every glyph starts fast and wide, then eases to its steady state.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    pub enabled: bool,
    pub from_speed: f64,
    pub from_span: f64,
    pub duration_secs: f64,
    pub ease: Ease,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            from_speed: 1500.0,
            from_span: 300.0,
            duration_secs: 2.0,
            ease: Ease::PowerOut(1),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub canvas: Canvas,
    pub fps: Fps,
    /// Straight (non-premultiplied) RGBA8.
    pub background_rgba8: [u8; 4],
    pub point_rgba8: [u8; 4],
    pub point_radius_px: f64,
    pub line_rgba8: [u8; 4],
    pub line_width_px: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 1600,
                height: 400,
            },
            fps: Fps { num: 60, den: 1 },
            background_rgba8: [255, 255, 255, 255],
            point_rgba8: [0, 0, 0, 255],
            point_radius_px: 1.25,
            // black at 15% opacity
            line_rgba8: [0, 0, 0, 38],
            line_width_px: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Half of the visible world height of the orthographic camera.
    pub scale: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { scale: 2.0 }
    }
}

/// Full description of the logo animation. Every field has a default, so `{}` is a valid
/// configuration document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    pub roster: Vec<GlyphEntry>,
    pub layout: LayoutConfig,
    pub sampling: SamplingConfig,
    pub motion: MotionConfig,
    pub connectors: ConnectorConfig,
    pub intro: IntroConfig,
    pub render: RenderConfig,
    pub camera: CameraConfig,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            roster: default_roster(),
            layout: LayoutConfig::default(),
            sampling: SamplingConfig::default(),
            motion: MotionConfig::default(),
            connectors: ConnectorConfig::default(),
            intro: IntroConfig::default(),
            render: RenderConfig::default(),
            camera: CameraConfig::default(),
        }
    }
}

/// T, O, K, Y, O, N, O, D, E. The three O glyphs share one source file.
pub fn default_roster() -> Vec<GlyphEntry> {
    [
        ("T", "T"),
        ("O1", "O"),
        ("K", "K"),
        ("Y", "Y"),
        ("O2", "O"),
        ("N", "N"),
        ("O3", "O"),
        ("D", "D"),
        ("E", "E"),
    ]
    .into_iter()
    .map(|(name, source)| GlyphEntry::new(name, source))
    .collect()
}

impl LogoConfig {
    pub fn from_json_str(s: &str) -> GlyphTrailResult<Self> {
        let cfg: Self = serde_json::from_str(s).context("parse logo config JSON")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> GlyphTrailResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read logo config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Distinct asset keys in roster order.
    pub fn sources(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.roster
            .iter()
            .map(|e| e.source.as_str())
            .filter(|s| seen.insert(*s))
            .collect()
    }

    pub fn validate(&self) -> GlyphTrailResult<()> {
        if self.roster.is_empty() {
            return Err(GlyphTrailError::validation("roster must not be empty"));
        }
        let mut names = HashSet::new();
        for entry in &self.roster {
            if entry.name.is_empty() {
                return Err(GlyphTrailError::validation("glyph name must be non-empty"));
            }
            if !names.insert(entry.name.as_str()) {
                return Err(GlyphTrailError::validation(format!(
                    "duplicate glyph name '{}'",
                    entry.name
                )));
            }
        }

        let l = &self.layout;
        if !l.scale.is_finite() || l.scale <= 0.0 {
            return Err(GlyphTrailError::validation(
                "layout.scale must be finite and > 0",
            ));
        }
        if !l.gap.is_finite() || l.gap < 0.0 {
            return Err(GlyphTrailError::validation(
                "layout.gap must be finite and >= 0",
            ));
        }

        let s = &self.sampling;
        if s.division == 0 {
            return Err(GlyphTrailError::validation("sampling.division must be > 0"));
        }
        if !s.dedup_threshold.is_finite() || s.dedup_threshold < 0.0 {
            return Err(GlyphTrailError::validation(
                "sampling.dedup_threshold must be finite and >= 0",
            ));
        }
        if !s.arclen_accuracy.is_finite() || s.arclen_accuracy <= 0.0 {
            return Err(GlyphTrailError::validation(
                "sampling.arclen_accuracy must be finite and > 0",
            ));
        }

        let m = &self.motion;
        if !m.speed.is_finite() || !m.span.is_finite() {
            return Err(GlyphTrailError::validation(
                "motion.speed and motion.span must be finite",
            ));
        }
        if !m.phase_offset_max.is_finite() || m.phase_offset_max < 0.0 {
            return Err(GlyphTrailError::validation(
                "motion.phase_offset_max must be finite and >= 0",
            ));
        }

        let i = &self.intro;
        if !i.duration_secs.is_finite() || i.duration_secs < 0.0 {
            return Err(GlyphTrailError::validation(
                "intro.duration_secs must be finite and >= 0",
            ));
        }

        let r = &self.render;
        Canvas::new(r.canvas.width, r.canvas.height)?;
        Fps::new(r.fps.num, r.fps.den)?;
        if !r.point_radius_px.is_finite() || r.point_radius_px <= 0.0 {
            return Err(GlyphTrailError::validation(
                "render.point_radius_px must be finite and > 0",
            ));
        }
        if !r.line_width_px.is_finite() || r.line_width_px <= 0.0 {
            return Err(GlyphTrailError::validation(
                "render.line_width_px must be finite and > 0",
            ));
        }

        if !self.camera.scale.is_finite() || self.camera.scale <= 0.0 {
            return Err(GlyphTrailError::validation(
                "camera.scale must be finite and > 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
