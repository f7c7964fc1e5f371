use crate::{animation::ease::Ease, foundation::config::IntroConfig, glyph::entity::Glyph};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Track {
    from_speed: f64,
    to_speed: f64,
    from_span: f64,
    to_span: f64,
}

/// One-shot startup tween that eases every glyph's speed and span from exaggerated values down
/// to the values the glyph had when the tween was started. All glyphs run in parallel.
///
/// Kept separate from [`Glyph::update`]; the session advances it before the glyphs each frame
/// until it reports completion.
#[derive(Clone, Debug)]
pub struct IntroTween {
    tracks: Vec<Track>,
    elapsed: f64,
    duration: f64,
    ease: Ease,
}

impl IntroTween {
    /// Capture current values as targets and overwrite glyphs with the start values.
    pub fn start(glyphs: &mut [Glyph], cfg: &IntroConfig) -> Self {
        let tracks = glyphs
            .iter_mut()
            .map(|g| {
                let track = Track {
                    from_speed: cfg.from_speed,
                    to_speed: g.speed,
                    from_span: cfg.from_span,
                    to_span: g.span,
                };
                g.speed = track.from_speed;
                g.span = track.from_span;
                track
            })
            .collect();
        Self {
            tracks,
            elapsed: 0.0,
            duration: cfg.duration_secs,
            ease: cfg.ease,
        }
    }

    /// Normalized time in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Move the tween forward by `dt` seconds and write interpolated values into `glyphs`.
    ///
    /// Glyphs pair with tracks by position, so pass the same slice `start` was given.
    pub fn advance(&mut self, dt: f64, glyphs: &mut [Glyph]) {
        self.elapsed += dt.max(0.0);
        let t = self.progress();
        for (track, glyph) in self.tracks.iter().zip(glyphs.iter_mut()) {
            glyph.speed = self.ease.tween(track.from_speed, track.to_speed, t);
            glyph.span = self.ease.tween(track.from_span, track.to_span, t);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/intro.rs"]
mod tests;
