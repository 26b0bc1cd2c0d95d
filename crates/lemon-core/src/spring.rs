//! Damped spring used to smooth the parallax tilt.

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
        }
    }
}

impl SpringConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("spring stiffness", self.stiffness),
            ("spring damping", self.damping),
            ("spring mass", self.mass),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        Ok(())
    }

    /// `damping / (2 * sqrt(stiffness * mass))`; below 1 the spring overshoots.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// One-dimensional spring chasing a target, with its output clamped to
/// `[min, max]`.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    min: f32,
    max: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32, min: f32, max: f32) -> Self {
        Self {
            config,
            value: initial.clamp(min, max),
            velocity: 0.0,
            min,
            max,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_at_rest(&self, target: f32) -> bool {
        self.velocity.abs() < SPRING_REST_EPSILON && (self.value - target).abs() < SPRING_REST_EPSILON
    }

    /// Advance by `dt_sec` toward `target` and return the new value.
    pub fn step(&mut self, target: f32, dt_sec: f32) -> f32 {
        let target = target.clamp(self.min, self.max);
        let mut remaining = dt_sec.clamp(0.0, SPRING_MAX_DT_SEC);
        let k = self.config.stiffness;
        let c = self.config.damping;
        let inv_m = 1.0 / self.config.mass;
        while remaining > 0.0 {
            let h = remaining.min(SPRING_MAX_SUBSTEP_SEC);
            let accel = (-k * (self.value - target) - c * self.velocity) * inv_m;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if self.value <= self.min || self.value >= self.max {
            self.value = self.value.clamp(self.min, self.max);
            self.velocity = 0.0;
        }
        if self.is_at_rest(target) {
            self.value = target;
            self.velocity = 0.0;
        }
        self.value
    }
}
