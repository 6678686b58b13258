//! Damped spring used to animate the displayed count.

use crate::config::AnimationConfig;

/// Largest integration step; longer frames are split.
const MAX_STEP_SECS: f64 = 0.004;
/// Within this distance and speed the spring snaps onto its target.
const REST_DELTA: f64 = 0.5;
const REST_SPEED: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
    mass: f64,
}

impl Spring {
    /// A spring at rest on `initial`.
    pub fn new(initial: f64, config: &AnimationConfig) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            target: initial,
            stiffness: config.stiffness,
            damping: config.damping,
            mass: config.mass,
        }
    }

    /// Retarget; motion continues from the current position and velocity.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Advance by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 && !self.is_settled() {
            let h = remaining.min(MAX_STEP_SECS);
            let before = self.position;
            let force = -self.stiffness * (self.position - self.target) - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            self.position += self.velocity * h;
            remaining -= h;

            // At large magnitudes a step can fall below f64 resolution and stall.
            if self.position == before && self.position != self.target {
                self.position = self.target;
                self.velocity = 0.0;
            }
        }
        if self.near_rest() {
            self.position = self.target;
            self.velocity = 0.0;
        }
    }

    pub fn is_settled(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    /// Current position rounded to a displayable count.
    pub fn value(&self) -> u64 {
        self.position.round().max(0.0) as u64
    }

    fn near_rest(&self) -> bool {
        (self.position - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, secs: f64) {
        let frames = (secs / 0.016).ceil() as usize;
        for _ in 0..frames {
            spring.step(0.016);
        }
    }

    #[test]
    fn test_settles_on_exact_target() {
        let mut spring = Spring::new(0.0, &AnimationConfig::default());
        spring.set_target(42000.0);
        assert!(!spring.is_settled());

        run(&mut spring, 0.1);
        let midway = spring.value();
        assert!(midway > 0 && midway < 42000, "{midway}");

        run(&mut spring, 5.0);
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 42000);
    }

    #[test]
    fn test_retarget_mid_flight() {
        let mut spring = Spring::new(41999.0, &AnimationConfig::default());
        spring.set_target(50000.0);
        run(&mut spring, 0.05);
        spring.set_target(42000.0);
        run(&mut spring, 5.0);
        assert_eq!(spring.value(), 42000);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_at_rest_does_not_move() {
        let mut spring = Spring::new(7.0, &AnimationConfig::default());
        assert!(spring.is_settled());
        spring.step(1.0);
        assert_eq!(spring.value(), 7);
    }

    #[test]
    fn test_large_targets_settle() {
        for target in [1e15, 9e15, 1e17, 1.8e19] {
            let mut spring = Spring::new(0.0, &AnimationConfig::default());
            spring.set_target(target);
            run(&mut spring, 10.0);
            assert!(spring.is_settled(), "{target}");
            assert_eq!(spring.value(), target as u64);
        }
    }

    #[test]
    fn test_long_frame_is_stable() {
        let mut spring = Spring::new(0.0, &AnimationConfig::default());
        spring.set_target(1000.0);
        spring.step(10.0);
        assert_eq!(spring.value(), 1000);
    }
}
