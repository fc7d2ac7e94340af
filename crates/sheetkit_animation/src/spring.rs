//! Spring physics
//!
//! Damped harmonic oscillator integrated with RK4. A spring can be described
//! either by raw stiffness/damping/mass or, the way platform animators expose
//! it, by a damping ratio and a response time.

use std::f32::consts::PI;

/// Largest integration step; longer frames are subdivided
const MAX_STEP: f32 = 1.0 / 240.0;

/// Physical parameters of a spring
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Spring with the given damping ratio that completes one undamped
    /// period in `response` seconds (unit mass).
    ///
    /// A ratio of 1.0 is critically damped; below 1.0 it overshoots.
    pub fn from_damping_ratio(ratio: f32, response: f32) -> Self {
        let response = response.max(f32::EPSILON);
        let omega = 2.0 * PI / response;
        Self {
            stiffness: omega * omega,
            damping: 2.0 * ratio * omega,
            mass: 1.0,
        }
    }

    /// Fast, barely overshooting
    pub fn stiff() -> Self {
        Self::new(400.0, 30.0, 1.0)
    }

    /// Damping ratio `c / (2 * sqrt(k * m))`
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::stiff()
    }
}

/// A single animated value pulled toward a target by a spring
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    rest_threshold: f32,
    velocity_threshold: f32,
}

impl Spring {
    /// Create a spring resting at `initial`
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            rest_threshold: 0.05,
            velocity_threshold: 0.5,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget, keeping current value and velocity
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to the target and stop
    pub fn snap_to_target(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.rest_threshold
            && self.velocity.abs() < self.velocity_threshold
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 || self.is_settled() {
            if self.is_settled() {
                self.snap_to_target();
            }
            return;
        }

        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            self.rk4(h);
            remaining -= h;
        }

        if self.is_settled() {
            self.snap_to_target();
        }
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        (-stiffness * (x - self.target) - damping * v) / mass
    }

    fn rk4(&mut self, h: f32) {
        let (x, v) = (self.value, self.velocity);

        let k1x = v;
        let k1v = self.acceleration(x, v);

        let k2x = v + 0.5 * h * k1v;
        let k2v = self.acceleration(x + 0.5 * h * k1x, k2x);

        let k3x = v + 0.5 * h * k2v;
        let k3v = self.acceleration(x + 0.5 * h * k2x, k3x);

        let k4x = v + h * k3v;
        let k4v = self.acceleration(x + h * k3x, k4x);

        self.value = x + h / 6.0 * (k1x + 2.0 * k2x + 2.0 * k3x + k4x);
        self.velocity = v + h / 6.0 * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);
    }
}
