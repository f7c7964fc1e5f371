/// Easing curves for one-shot parameter tweens.
///
/// The power family follows the usual motion-design naming: `PowerOut(1)` is the classic
/// "power1.out" (quadratic ease-out), `PowerOut(2)` is cubic, and so on. `Power*(0)` is linear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    PowerIn(u8),
    PowerOut(u8),
    PowerInOut(u8),
}

impl Default for Ease {
    fn default() -> Self {
        Self::PowerOut(1)
    }
}

impl Ease {
    /// Map normalized time `t` to eased progress. Input is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::PowerIn(degree) => t.powi(exponent(degree)),
            Self::PowerOut(degree) => 1.0 - (1.0 - t).powi(exponent(degree)),
            Self::PowerInOut(degree) => {
                let e = exponent(degree);
                if t < 0.5 {
                    2f64.powi(e - 1) * t.powi(e)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(e) / 2.0
                }
            }
        }
    }

    /// Interpolate between `from` and `to` at normalized time `t`.
    pub fn tween(self, from: f64, to: f64, t: f64) -> f64 {
        from + (to - from) * self.apply(t)
    }
}

fn exponent(degree: u8) -> i32 {
    i32::from(degree) + 1
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
