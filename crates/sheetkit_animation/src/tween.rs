//! Fixed-duration tweens

use crate::easing::Easing;

/// Interpolates a value from `from` to `to` over a fixed duration
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl Tween {
    /// `duration` is in seconds
    pub fn new(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
        }
    }

    pub fn to(&self) -> f32 {
        self.to
    }

    /// Linear progress through the duration, 0.0 to 1.0
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Get the current interpolated value
    pub fn value(&self) -> f32 {
        let progress = self.progress();
        if progress >= 1.0 {
            return self.to;
        }
        let eased = self.easing.apply(progress);
        self.from + (self.to - self.from) * eased
    }

    /// Advance by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}
