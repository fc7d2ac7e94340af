//! Interruptible single-value motions
//!
//! A [`Motion`] moves one value toward a target, either along a timed easing
//! curve or under spring physics. A motion that has finished never changes
//! again.

use crate::easing::Easing;
use crate::spring::{Spring, SpringConfig};
use crate::tween::Tween;

#[derive(Clone, Debug)]
enum MotionKind {
    Tween(Tween),
    Spring {
        spring: Spring,
        /// Seconds after which an unsettled spring is forced onto its target
        deadline: f32,
    },
}

/// A value animating toward a target
#[derive(Clone, Debug)]
pub struct Motion {
    kind: MotionKind,
    elapsed: f32,
    finished: bool,
}

impl Motion {
    /// Timed motion along an easing curve
    pub fn tween(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        let tween = Tween::new(from, to, duration, easing);
        let finished = tween.is_finished();
        Self {
            kind: MotionKind::Tween(tween),
            elapsed: 0.0,
            finished,
        }
    }

    /// Spring-driven motion starting at rest
    pub fn spring(from: f32, to: f32, config: SpringConfig, deadline: f32) -> Self {
        let mut spring = Spring::new(config, from);
        spring.set_target(to);
        let finished = spring.is_settled();
        if finished {
            spring.snap_to_target();
        }
        Self {
            kind: MotionKind::Spring { spring, deadline },
            elapsed: 0.0,
            finished,
        }
    }

    /// Current value
    pub fn value(&self) -> f32 {
        match &self.kind {
            MotionKind::Tween(tween) => tween.value(),
            MotionKind::Spring { spring, .. } => spring.value(),
        }
    }

    /// Value the motion ends at
    pub fn target(&self) -> f32 {
        match &self.kind {
            MotionKind::Tween(tween) => tween.to(),
            MotionKind::Spring { spring, .. } => spring.target(),
        }
    }

    /// Seconds since the motion started
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        if self.finished {
            return;
        }
        self.elapsed += dt.max(0.0);

        match &mut self.kind {
            MotionKind::Tween(tween) => {
                tween.tick(dt);
                self.finished = tween.is_finished();
            }
            MotionKind::Spring { spring, deadline } => {
                spring.step(dt);
                if !spring.is_settled() && self.elapsed >= *deadline {
                    tracing::trace!(
                        elapsed = self.elapsed,
                        value = spring.value(),
                        target = spring.target(),
                        "spring past deadline"
                    );
                    spring.snap_to_target();
                }
                self.finished = spring.is_settled();
            }
        }
    }
}
