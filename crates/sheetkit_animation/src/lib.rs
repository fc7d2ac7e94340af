//! Sheetkit Animation System
//!
//! Spring physics, eased tweens, and an interruptible motion scheduler.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs, configurable by stiffness/damping/mass
//!   or by damping ratio and response time
//! - **Tweens**: Fixed-duration interpolation with easing curves
//! - **Motions**: A single value animating toward a target, either tweened or sprung,
//!   that can be stopped at any time
//! - **Scheduler**: Owns running motions and ticks them once per frame

pub mod easing;
pub mod motion;
pub mod scheduler;
pub mod spring;
pub mod tween;

pub use easing::Easing;
pub use motion::Motion;
pub use scheduler::{AnimationScheduler, MotionId};
pub use spring::{Spring, SpringConfig};
pub use tween::Tween;
