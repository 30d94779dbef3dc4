//! Timing functions (easing curves) for animations.

use super::spring::SpringConfig;

/// Timing function that controls the animation curve
#[derive(Clone, Debug, PartialEq)]
pub enum TimingFunction {
    /// Linear interpolation (constant speed)
    Linear,
    /// Damped spring settling within the transition duration
    Spring(SpringConfig),
}

impl TimingFunction {
    /// Evaluate the timing function at time t (0.0 to 1.0)
    /// Returns the interpolation factor (can exceed [0, 1] for overshoot)
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
            TimingFunction::Spring(config) => config.evaluate(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        assert_eq!(TimingFunction::Linear.evaluate(0.0), 0.0);
        assert_eq!(TimingFunction::Linear.evaluate(0.5), 0.5);
        assert_eq!(TimingFunction::Linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(TimingFunction::Linear.evaluate(2.0), 1.0);
        assert_eq!(TimingFunction::Linear.evaluate(-1.0), 0.0);
        assert_eq!(TimingFunction::Spring(SpringConfig::CRITICAL).evaluate(1.5), 1.0);
    }

    #[test]
    fn test_spring_delegates_to_config() {
        let config = SpringConfig::CRITICAL;
        let timing = TimingFunction::Spring(config);
        assert_eq!(timing.evaluate(0.3), config.evaluate(0.3));
    }
}
