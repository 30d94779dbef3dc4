use std::time::{Duration, Instant};

use super::{Animatable, Transition};

/// Result of advancing an animation, indicating whether the value changed
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value did not change (animation not running or same value)
    NoChange,
    /// Value changed to a new value, animation still running
    Changed(T),
    /// The animation reached its target on this step
    Finished(T),
}

/// Animation state for a single animatable value, driven by an external clock.
///
/// The clock anchors on the first [`advance`](Self::advance) after
/// [`animate_to`](Self::animate_to), so starting an animation needs no
/// timestamp and the first frame always shows the start value.
#[derive(Debug)]
pub struct AnimationState<T: Animatable> {
    /// Current interpolated value
    current: T,
    /// Target value
    target: T,
    /// Value when animation started
    start: T,
    /// Time of the first frame, set lazily
    start_time: Option<Instant>,
    /// Whether a transition is in flight
    running: bool,
    /// Transition configuration
    transition: Transition,
}

impl<T: Animatable> AnimationState<T> {
    pub fn new(initial_value: T, transition: Transition) -> Self {
        Self {
            current: initial_value.clone(),
            target: initial_value.clone(),
            start: initial_value,
            start_time: None,
            running: false,
            transition,
        }
    }

    /// Start animating from the current value to a new target.
    ///
    /// Returns false without restarting when already heading to `new_target`.
    pub fn animate_to(&mut self, new_target: T) -> bool {
        if new_target == self.target && self.running {
            return false;
        }

        self.start = self.current.clone();
        self.target = new_target;
        self.start_time = None;
        self.running = true;
        true
    }

    /// Advance the animation to `now`.
    pub fn advance(&mut self, now: Instant) -> AdvanceResult<T> {
        if !self.running {
            return AdvanceResult::NoChange;
        }

        let start_time = *self.start_time.get_or_insert(now);
        let elapsed_ms = now.saturating_duration_since(start_time).as_secs_f32() * 1000.0;
        let adjusted_elapsed = elapsed_ms - self.transition.delay_ms;

        if adjusted_elapsed < 0.0 {
            // Still in delay period
            return AdvanceResult::NoChange;
        }

        let t = if self.transition.duration_ms <= 0.0 {
            1.0
        } else {
            (adjusted_elapsed / self.transition.duration_ms).min(1.0)
        };

        if t >= 1.0 {
            self.current = self.target.clone();
            self.running = false;
            return AdvanceResult::Finished(self.current.clone());
        }

        let new_value = T::lerp(&self.start, &self.target, self.transition.timing.evaluate(t));
        let changed = new_value != self.current;
        self.current = new_value;

        if changed {
            AdvanceResult::Changed(self.current.clone())
        } else {
            AdvanceResult::NoChange
        }
    }

    /// Check if animation is still running
    pub fn is_animating(&self) -> bool {
        self.running
    }

    /// Get current value
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Get target value
    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Time left until the final frame, measured from `now`.
    pub fn remaining(&self, now: Instant) -> Duration {
        if !self.running {
            return Duration::ZERO;
        }
        match self.start_time {
            Some(start) => self
                .transition
                .total()
                .saturating_sub(now.saturating_duration_since(start)),
            None => self.transition.total(),
        }
    }

    /// Set value immediately without animation, dropping any transition in flight
    pub fn set_immediate(&mut self, value: T) {
        self.current = value.clone();
        self.target = value.clone();
        self.start = value;
        self.start_time = None;
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::TimingFunction;

    fn linear(duration_ms: f32) -> Transition {
        Transition::new(duration_ms, TimingFunction::Linear)
    }

    #[test]
    fn test_animation_state_new() {
        let state = AnimationState::new(0.0f32, linear(300.0));

        assert_eq!(*state.current(), 0.0);
        assert_eq!(*state.target(), 0.0);
        assert!(!state.is_animating());
    }

    #[test]
    fn test_first_advance_anchors_clock() {
        let mut state = AnimationState::new(0.0f32, linear(100.0));
        state.animate_to(100.0);

        let t0 = Instant::now();
        assert_eq!(state.advance(t0), AdvanceResult::NoChange);
        match state.advance(t0 + Duration::from_millis(50)) {
            AdvanceResult::Changed(v) => assert!((v - 50.0).abs() < 1e-3, "got {}", v),
            other => panic!("expected Changed, got {:?}", other),
        }
        assert_eq!(
            state.advance(t0 + Duration::from_millis(150)),
            AdvanceResult::Finished(100.0)
        );
        assert!(!state.is_animating());
        assert_eq!(
            state.advance(t0 + Duration::from_millis(200)),
            AdvanceResult::NoChange
        );
    }

    #[test]
    fn test_animate_to_same_target_does_not_restart() {
        let mut state = AnimationState::new(0.0f32, linear(100.0));
        assert!(state.animate_to(100.0));

        let t0 = Instant::now();
        state.advance(t0);
        state.advance(t0 + Duration::from_millis(40));

        assert!(!state.animate_to(100.0));
        state.advance(t0 + Duration::from_millis(60));
        assert!((state.current() - 60.0).abs() < 1e-3);
    }

    #[test]
    fn test_delay_holds_start_value() {
        let mut state = AnimationState::new(0.0f32, linear(100.0).delay(50.0));
        state.animate_to(10.0);

        let t0 = Instant::now();
        state.advance(t0);
        assert_eq!(
            state.advance(t0 + Duration::from_millis(30)),
            AdvanceResult::NoChange
        );
        assert_eq!(*state.current(), 0.0);
        assert_eq!(state.remaining(t0 + Duration::from_millis(30)), Duration::from_millis(120));
    }

    #[test]
    fn test_zero_duration_finishes_on_first_frame() {
        let mut state = AnimationState::new(1.0f32, linear(0.0));
        state.animate_to(0.0);
        assert_eq!(state.advance(Instant::now()), AdvanceResult::Finished(0.0));
    }

    #[test]
    fn test_set_immediate_cancels() {
        let mut state = AnimationState::new(0.0f32, linear(300.0));
        state.animate_to(10.0);
        state.set_immediate(50.0);

        assert_eq!(*state.current(), 50.0);
        assert_eq!(*state.target(), 50.0);
        assert!(!state.is_animating());
    }
}
