//! Easing functions and transition timing configuration.

use std::time::Duration;

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Duration and easing for one transition direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Default entrance transition: 300ms ease-in.
    pub fn show_default() -> Self {
        Self::new(Duration::from_millis(300), Easing::EaseIn)
    }

    /// Default exit transition: 200ms ease-out.
    pub fn hide_default() -> Self {
        Self::new(Duration::from_millis(200), Easing::EaseOut)
    }

    /// Zero-duration variant that completes on the next tick.
    pub fn instant(self) -> Self {
        Self::new(Duration::ZERO, self.easing)
    }
}
