//! Bottom sheet controller
//!
//! Owns the sheet's visible offset and routes every input to it: pan
//! gestures, dragger-bar taps, content scroll notifications, presentation
//! changes and animation frames. All calls are expected on the UI thread, in
//! the order the host toolkit delivers them.
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use sheetkit::{BottomSheet, HeadlessHost, SheetConfig};
//! use sheetkit_animation::AnimationScheduler;
//!
//! let scheduler = Rc::new(RefCell::new(AnimationScheduler::new()));
//! let mut sheet = BottomSheet::new(SheetConfig::default(), HeadlessHost::new())
//!     .with_scheduler(&scheduler);
//!
//! sheet.set_presented(true);
//! while sheet.is_animating() {
//!     scheduler.borrow_mut().step_frame();
//!     sheet.tick();
//! }
//! assert_eq!(sheet.visible_offset(), 452.0);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use sheetkit_animation::AnimationScheduler;
use sheetkit_core::events::{GestureOrigin, GesturePhase, PanGesture, TapGesture};

use crate::animator::{SnapAnimator, SnapRequest, SnapStyle};
use crate::arbiter::ScrollArbiter;
use crate::config::SheetConfig;
use crate::drag::{release_request, DragMode, DragState, DragTracker};
use crate::host::SheetHost;
use crate::snap::SnapPoints;

/// A draggable bottom sheet bound to a host
pub struct BottomSheet<H: SheetHost> {
    host: H,
    config: SheetConfig,
    snap_points: SnapPoints,
    presented: bool,
    /// Last offset handed to the host
    offset: f32,
    drag: DragTracker,
    arbiter: ScrollArbiter,
    animator: SnapAnimator,
}

impl<H: SheetHost> BottomSheet<H> {
    /// Create a hidden sheet
    ///
    /// Applies the configured appearance and places the sheet at its resting
    /// point (hidden) without animating.
    pub fn new(config: SheetConfig, host: H) -> Self {
        let mut sheet = Self {
            host,
            snap_points: SnapPoints::new(config.snap_heights.iter().copied()),
            animator: SnapAnimator::new(config.timing.spring_damping_ratio, config.interrupt),
            config,
            presented: false,
            offset: 0.0,
            drag: DragTracker::new(),
            arbiter: ScrollArbiter::new(),
        };

        sheet.animator.set_easing(sheet.config.timing.easing);
        sheet.host.apply_appearance(&sheet.config.appearance());
        let target = sheet.nearest_snap_point();
        sheet.snap_to(SnapRequest::instant(target));
        sheet
    }

    /// Animate snaps through `scheduler`
    pub fn with_scheduler(mut self, scheduler: &Rc<RefCell<AnimationScheduler>>) -> Self {
        self.set_scheduler(scheduler);
        self
    }

    pub fn set_scheduler(&mut self, scheduler: &Rc<RefCell<AnimationScheduler>>) {
        self.animator.set_scheduler(scheduler);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        let BottomSheet { host, .. } = self;
        host
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn snap_points(&self) -> &SnapPoints {
        &self.snap_points
    }

    pub fn is_presented(&self) -> bool {
        self.presented
    }

    /// Current height of the sheet above the bottom edge (0 = hidden)
    pub fn visible_offset(&self) -> f32 {
        self.offset
    }

    pub fn drag_mode(&self) -> DragMode {
        self.drag.mode()
    }

    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    pub fn frozen_scroll_offset(&self) -> f32 {
        self.arbiter.frozen_scroll_offset()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Where the running snap animation is heading
    pub fn animation_target(&self) -> Option<f32> {
        self.animator.target()
    }

    /// Full height of the scrollable content, as measured by the host
    pub fn content_height(&self) -> f32 {
        self.host.measure_intrinsic_content_height()
    }

    // =========================================================================
    // Snap points
    // =========================================================================

    pub fn nearest_snap_point(&self) -> f32 {
        self.snap_points.nearest(self.offset, self.presented)
    }

    pub fn previous_snap_point(&self) -> f32 {
        self.snap_points.previous(self.offset, self.presented)
    }

    pub fn next_snap_point(&self, wrap: bool) -> f32 {
        self.snap_points.next(self.offset, self.presented, wrap)
    }

    // =========================================================================
    // Inputs
    // =========================================================================

    /// Show or hide the sheet
    ///
    /// Always snaps, even when the flag does not change: presenting goes to
    /// the nearest configured height, dismissing goes to 0.
    pub fn set_presented(&mut self, presented: bool) {
        self.presented = presented;
        let target = self.nearest_snap_point();
        tracing::debug!(presented, target, "presentation changed");
        self.snap_to(SnapRequest::new(
            target,
            self.config.timing.presentation_duration,
            SnapStyle::Eased,
        ));
    }

    /// Replace the configuration
    ///
    /// Appearance is applied to the host right away. The sheet stays where it
    /// is; new heights take effect on the next snap.
    pub fn set_configuration(&mut self, config: SheetConfig) {
        self.snap_points = SnapPoints::new(config.snap_heights.iter().copied());
        self.animator.set_damping_ratio(config.timing.spring_damping_ratio);
        self.animator.set_interrupt_policy(config.interrupt);
        self.animator.set_easing(config.timing.easing);
        self.host.apply_appearance(&config.appearance());
        self.config = config;
    }

    /// Handle a pan gesture callback from the header, dragger bar or content
    pub fn handle_pan(&mut self, pan: PanGesture) {
        let max_height = self.snap_points.max_height();

        match pan.phase {
            GesturePhase::Possible => {}

            GesturePhase::Began => {
                self.stop_snap_animation();
                let drags_sheet = self.arbiter.drags_sheet(
                    self.offset,
                    max_height,
                    self.host.content_scroll_offset(),
                    pan.origin.is_chrome(),
                );
                self.drag.begin(pan.origin, self.offset, drags_sheet);
                tracing::trace!(
                    origin = ?pan.origin,
                    start = self.offset,
                    mode = ?self.drag.mode(),
                    "drag began"
                );
            }

            GesturePhase::Changed => {
                let drags_sheet = self.arbiter.drags_sheet(
                    self.offset,
                    max_height,
                    self.host.content_scroll_offset(),
                    self.drag.is_from_chrome(),
                );
                let moved = self
                    .drag
                    .change(pan.translation_y, drags_sheet, max_height.unwrap_or(0.0));
                if let Some(offset) = moved {
                    // A snap requested mid-gesture must not fight the finger
                    self.animator.stop(self.offset);
                    self.set_offset(offset);
                }
                tracing::trace!(
                    translation = pan.translation_y,
                    pending = self.drag.state().pending_translation,
                    mode = ?self.drag.mode(),
                    offset = self.offset,
                    "drag changed"
                );
            }

            GesturePhase::Ended | GesturePhase::Cancelled | GesturePhase::Failed => {
                if self.drag.end() {
                    let request = release_request(
                        &self.snap_points,
                        self.offset,
                        self.presented,
                        pan.velocity_y,
                        &self.config.timing,
                    );
                    tracing::debug!(
                        velocity = pan.velocity_y,
                        target = request.target,
                        style = ?request.style,
                        "drag released"
                    );
                    self.snap_to(request);
                }
            }
        }
    }

    /// Handle a tap; taps on a visible dragger bar cycle through the heights
    pub fn handle_tap(&mut self, tap: TapGesture) {
        if tap.origin != GestureOrigin::DraggerBar || !self.config.dragger_bar_visible {
            return;
        }
        let target = self.next_snap_point(true);
        tracing::debug!(target, "dragger bar tapped");
        self.snap_to(SnapRequest::new(
            target,
            self.config.timing.dragger_tap_duration,
            SnapStyle::Eased,
        ));
    }

    /// The host's content scroll position changed
    ///
    /// Call from the scroll region's did-scroll notification.
    pub fn on_content_scrolled(&mut self) {
        let content_offset = self.host.content_scroll_offset();
        let correction = self.arbiter.on_content_scroll(
            self.offset,
            self.snap_points.max_height(),
            content_offset,
            self.drag.is_from_chrome(),
        );
        if let Some(frozen) = correction {
            self.host.set_content_scroll_offset(frozen, false);
        }
    }

    /// Copy the running animation's value to the host
    ///
    /// Call once per frame after ticking the scheduler. Returns true while an
    /// animation is still running.
    pub fn tick(&mut self) -> bool {
        let Some((value, finished)) = self.animator.sample() else {
            return false;
        };
        self.set_offset(value);
        !finished
    }

    /// Move the sheet to `request.target`
    ///
    /// Stops any running animation first. Instant requests (zero duration)
    /// are applied before this returns.
    pub fn snap_to(&mut self, request: SnapRequest) {
        let max_height = self.snap_points.max_height();
        if max_height == Some(request.target) && request.target != self.offset {
            // Settles any content rubber-banding before the sheet opens fully
            let current = self.host.content_scroll_offset();
            self.host.set_content_scroll_offset(current, true);
        }

        self.stop_snap_animation();

        if let Some(value) = self.animator.start(self.offset, request) {
            self.set_offset(value);
        }
    }

    fn stop_snap_animation(&mut self) {
        if let Some(committed) = self.animator.stop(self.offset) {
            if committed != self.offset {
                self.set_offset(committed);
            }
        }
    }

    fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
        self.host.set_visible_offset(offset);
        let viewport = (offset - self.host.chrome_height()).max(0.0);
        self.host.set_content_viewport_height(viewport);
    }
}
