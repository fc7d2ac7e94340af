//! Snap animator
//!
//! Runs at most one interruptible motion of the sheet offset. Motions live in
//! a shared [`AnimationScheduler`] that the host ticks once per frame; the
//! animator keeps only the [`MotionId`] of its current run. Without a
//! scheduler every snap is applied instantly.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use sheetkit_animation::{AnimationScheduler, Easing, Motion, MotionId, SpringConfig};

use crate::config::InterruptPolicy;

/// Curve used to reach a snap target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapStyle {
    /// Configured easing curve over the requested duration
    #[default]
    Eased,
    /// Damped spring
    Spring,
}

/// A request to move the sheet to `target`
///
/// A zero duration means the move is applied synchronously.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapRequest {
    pub target: f32,
    /// Seconds
    pub duration: f32,
    pub style: SnapStyle,
}

impl SnapRequest {
    pub fn new(target: f32, duration: f32, style: SnapStyle) -> Self {
        Self {
            target,
            duration,
            style,
        }
    }

    pub fn instant(target: f32) -> Self {
        Self::new(target, 0.0, SnapStyle::Eased)
    }

    pub fn is_instant(&self) -> bool {
        self.duration <= 0.0
    }
}

/// Spring response as a fraction of the requested duration
///
/// At this response a spring with the default damping ratio is within a
/// fraction of a point of its target when the duration runs out, and is then
/// forced onto it.
const SPRING_RESPONSE_FRACTION: f32 = 0.5;

/// Owns the single in-flight snap animation
pub struct SnapAnimator {
    scheduler: Weak<RefCell<AnimationScheduler>>,
    handle: Option<MotionId>,
    damping_ratio: f32,
    easing: Easing,
    interrupt: InterruptPolicy,
}

impl SnapAnimator {
    pub fn new(damping_ratio: f32, interrupt: InterruptPolicy) -> Self {
        Self {
            scheduler: Weak::new(),
            handle: None,
            damping_ratio,
            easing: Easing::EaseInOut,
            interrupt,
        }
    }

    /// Set the animation scheduler motions are registered with
    pub fn set_scheduler(&mut self, scheduler: &Rc<RefCell<AnimationScheduler>>) {
        self.scheduler = Rc::downgrade(scheduler);
    }

    pub fn has_scheduler(&self) -> bool {
        self.scheduler.strong_count() > 0
    }

    pub fn set_damping_ratio(&mut self, ratio: f32) {
        self.damping_ratio = ratio;
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn set_interrupt_policy(&mut self, policy: InterruptPolicy) {
        self.interrupt = policy;
    }

    pub fn is_animating(&self) -> bool {
        self.handle.is_some()
    }

    /// Target of the running motion
    pub fn target(&self) -> Option<f32> {
        let id = self.handle?;
        let scheduler = self.scheduler.upgrade()?;
        let target = scheduler.borrow().get(id).map(Motion::target);
        target
    }

    /// Stop the running motion, if any
    ///
    /// `current` is the last offset the host was given. Returns the offset to
    /// commit: `current` under [`InterruptPolicy::Freeze`], the motion's end
    /// value under [`InterruptPolicy::Complete`]. `None` when nothing was
    /// running.
    pub fn stop(&mut self, current: f32) -> Option<f32> {
        let id = self.handle.take()?;
        let scheduler = self.scheduler.upgrade()?;
        let motion = scheduler.borrow_mut().remove(id)?;

        let committed = match self.interrupt {
            InterruptPolicy::Freeze => current,
            InterruptPolicy::Complete => motion.target(),
        };
        tracing::debug!(
            at = committed,
            target = motion.target(),
            elapsed = motion.elapsed(),
            policy = ?self.interrupt,
            "snap animation interrupted"
        );
        Some(committed)
    }

    /// Start animating from `from` toward `request.target`
    ///
    /// Any running motion must already have been stopped. Returns the value
    /// to apply immediately when the request cannot be animated (instant
    /// request, already at target, or no scheduler), `None` once a motion is
    /// running.
    pub fn start(&mut self, from: f32, request: SnapRequest) -> Option<f32> {
        debug_assert!(self.handle.is_none(), "previous snap animation not stopped");

        if request.is_instant() || from == request.target {
            return Some(request.target);
        }
        let Some(scheduler) = self.scheduler.upgrade() else {
            return Some(request.target);
        };

        let motion = match request.style {
            SnapStyle::Spring => Motion::spring(
                from,
                request.target,
                SpringConfig::from_damping_ratio(
                    self.damping_ratio,
                    request.duration * SPRING_RESPONSE_FRACTION,
                ),
                request.duration,
            ),
            SnapStyle::Eased => Motion::tween(from, request.target, request.duration, self.easing),
        };

        tracing::debug!(
            from,
            to = request.target,
            duration = request.duration,
            style = ?request.style,
            "snap animation started"
        );
        self.handle = Some(scheduler.borrow_mut().add(motion));
        None
    }

    /// Read the running motion
    ///
    /// Returns its current value and whether it has finished. A finished
    /// motion is released; the next call returns `None`.
    pub fn sample(&mut self) -> Option<(f32, bool)> {
        let id = self.handle?;
        let Some(scheduler) = self.scheduler.upgrade() else {
            self.handle = None;
            return None;
        };
        let mut scheduler = scheduler.borrow_mut();

        let Some(motion) = scheduler.get(id) else {
            self.handle = None;
            return None;
        };
        let value = motion.value();
        let finished = motion.is_finished();

        if finished {
            scheduler.remove(id);
            self.handle = None;
            tracing::debug!(at = value, "snap animation settled");
        }
        Some((value, finished))
    }
}

impl Drop for SnapAnimator {
    fn drop(&mut self) {
        if let (Some(id), Some(scheduler)) = (self.handle.take(), self.scheduler.upgrade()) {
            if let Ok(mut scheduler) = scheduler.try_borrow_mut() {
                scheduler.remove(id);
            }
        }
    }
}
