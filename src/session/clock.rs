use crate::foundation::core::Fps;

/// Fixed-step clock for offline rendering: every tick advances by exactly one frame duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    fps: Fps,
    frame: u64,
}

impl FrameClock {
    pub fn new(fps: Fps) -> Self {
        Self { fps, frame: 0 }
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        self.fps.frame_duration_secs()
    }

    /// Index of the frame the next tick produces.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Elapsed time after `frame` ticks. Computed from the frame index so it never drifts.
    pub fn time(&self) -> f64 {
        self.frame as f64 * self.dt()
    }

    /// Advance by one frame and return the delta to feed the simulation.
    pub fn tick(&mut self) -> f64 {
        self.frame += 1;
        self.dt()
    }

    /// Number of ticks needed to reach `secs` from the start.
    pub fn frames_until(&self, secs: f64) -> u64 {
        self.fps.secs_to_frames_floor(secs)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/clock.rs"]
mod tests;
