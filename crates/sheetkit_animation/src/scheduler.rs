//! Animation scheduler
//!
//! Owns every running motion and advances them each frame. Widgets keep a
//! [`MotionId`] and read the motion's value after the scheduler has ticked.

use crate::motion::Motion;
use slotmap::{new_key_type, SlotMap};
use std::time::Instant;

new_key_type! {
    pub struct MotionId;
}

/// The animation scheduler that ticks all active motions
pub struct AnimationScheduler {
    motions: SlotMap<MotionId, Motion>,
    last_frame: Instant,
    target_fps: u32,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            motions: SlotMap::with_key(),
            last_frame: Instant::now(),
            target_fps: 120,
        }
    }

    pub fn set_target_fps(&mut self, fps: u32) {
        self.target_fps = fps.max(1);
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Duration of one frame at the target rate, in seconds
    pub fn frame_interval(&self) -> f32 {
        1.0 / self.target_fps as f32
    }

    pub fn add(&mut self, motion: Motion) -> MotionId {
        self.motions.insert(motion)
    }

    pub fn get(&self, id: MotionId) -> Option<&Motion> {
        self.motions.get(id)
    }

    pub fn remove(&mut self, id: MotionId) -> Option<Motion> {
        self.motions.remove(id)
    }

    /// Tick all motions by the wall-clock time since the previous tick
    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.advance(dt);
    }

    /// Tick all motions by an explicit `dt` in seconds
    pub fn advance(&mut self, dt: f32) {
        for (_, motion) in self.motions.iter_mut() {
            motion.tick(dt);
        }
    }

    /// Tick one frame at the target rate
    pub fn step_frame(&mut self) {
        self.advance(self.frame_interval());
    }

    /// Check if any motion is still running
    pub fn has_active_animations(&self) -> bool {
        self.motions.iter().any(|(_, m)| !m.is_finished())
    }

    pub fn motion_count(&self) -> usize {
        self.motions.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
