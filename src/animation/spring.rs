//! Damped harmonic spring evaluated in closed form.
//!
//! The spring runs over normalized time `t` in `[0, 1]`, so it always
//! settles within the owning transition's duration. The natural frequency
//! is chosen so the envelope has decayed below the visible threshold by
//! `t = 1`; the final frame is snapped to the target.

/// Natural frequency in radians per unit of normalized time.
const NATURAL_FREQUENCY: f32 = 10.0;

/// Configuration for a damped spring curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Damping ratio. 1.0 is critically damped, lower values overshoot.
    pub damping_ratio: f32,
    /// Initial velocity toward the target, in total travel per unit time.
    pub initial_velocity: f32,
}

impl SpringConfig {
    /// Critically damped with a small push, no overshoot.
    pub const CRITICAL: Self = Self {
        damping_ratio: 1.0,
        initial_velocity: 1.0,
    };

    pub const fn new(damping_ratio: f32, initial_velocity: f32) -> Self {
        Self {
            damping_ratio,
            initial_velocity,
        }
    }

    /// Position of the spring at normalized time `t` (0.0 = start, 1.0 = target).
    pub fn evaluate(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        let omega = NATURAL_FREQUENCY;
        let v0 = self.initial_velocity;
        let zeta = self.damping_ratio.max(0.0);

        // Displacement from target d(t), with d(0) = -1 and d'(0) = v0.
        let displacement = if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let c2 = (v0 - zeta * omega) / omega_d;
            (-(omega_d * t).cos() + c2 * (omega_d * t).sin()) * (-zeta * omega * t).exp()
        } else {
            // Overdamped ratios are treated as critical.
            (-1.0 + (v0 - omega) * t) * (-omega * t).exp()
        };

        1.0 + displacement
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::CRITICAL
    }
}
