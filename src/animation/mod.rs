mod animatable;
mod spring;
mod state;
mod timing;

pub use animatable::Animatable;
pub use spring::SpringConfig;
pub use state::{AdvanceResult, AnimationState};
pub use timing::TimingFunction;

use std::time::Duration;

/// Configuration for how a property animates between two values
#[derive(Clone, Debug)]
pub struct Transition {
    /// Duration of the animation in milliseconds
    pub duration_ms: f32,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
    /// Delay before animation starts in milliseconds
    pub delay_ms: f32,
}

impl Transition {
    /// Create a new transition with the given duration and timing function
    pub fn new(duration_ms: f32, timing: TimingFunction) -> Self {
        Self {
            duration_ms,
            timing,
            delay_ms: 0.0,
        }
    }

    /// Create a damped-spring transition that settles within `duration_ms`
    pub fn spring(duration_ms: f32, config: SpringConfig) -> Self {
        Self::new(duration_ms, TimingFunction::Spring(config))
    }

    /// Set the delay before the animation starts
    pub fn delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Total time from start to the final frame, delay included.
    pub fn total(&self) -> Duration {
        let micros = ((self.delay_ms + self.duration_ms).max(0.0) * 1000.0).round();
        Duration::from_micros(micros as u64)
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::spring(300.0, SpringConfig::CRITICAL)
    }
}
