//! Interpolation curves for transitions.

use serde::{Deserialize, Serialize};

/// Easing curve applied to a transition's normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply the curve to a progress value (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }

    /// Interpolate between `from` and `to` at progress `t`.
    #[inline]
    pub fn interpolate(self, from: f32, to: f32, t: f32) -> f32 {
        from + (to - from) * self.apply(t)
    }
}
