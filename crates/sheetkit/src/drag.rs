//! Drag state machine
//!
//! Tracks one pan gesture from `began` to its terminal phase: where the sheet
//! was when the drag started, how much translation was absorbed by content
//! scrolling before the sheet took over, and whether the gesture came from
//! chrome (header or dragger bar) or from the scrollable content.
//!
//! The interaction mode is an explicit FSM:
//!
//! ```text
//!              BEGIN_CHROME                       END
//!   Idle ─────────────────────▶ DraggingChrome ─────────▶ Idle
//!    │
//!    │ BEGIN_CONTENT            SHEET_CAPTURE
//!    └──────────▶ ContentScrolling ◀──────────▶ DraggingContent
//!                        │        CONTENT_CAPTURE        │
//!                        └──────────── END ──────────────┴──▶ Idle
//! ```

use serde::Serialize;
use sheetkit_core::events::GestureOrigin;
use sheetkit_core::fsm::{EventId, StateMachine, StateTransitions};

use crate::animator::{SnapRequest, SnapStyle};
use crate::config::SnapTiming;
use crate::snap::SnapPoints;

/// Event ids driving [`DragMode`]
pub mod drag_events {
    use sheetkit_core::fsm::EventId;

    /// Gesture began on the header or dragger bar
    pub const BEGIN_CHROME: EventId = 1;
    /// Gesture began inside the scrollable content
    pub const BEGIN_CONTENT: EventId = 2;
    /// Arbiter gave the gesture to the sheet
    pub const SHEET_CAPTURE: EventId = 3;
    /// Arbiter gave the gesture to the content scroll
    pub const CONTENT_CAPTURE: EventId = 4;
    /// Gesture ended, was cancelled or failed
    pub const END: EventId = 5;
}

/// Who the active gesture is currently moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DragMode {
    /// No gesture in progress
    #[default]
    Idle,
    /// Chrome-originated drag, always moves the sheet
    DraggingChrome,
    /// Content-originated gesture scrolling the content
    ContentScrolling,
    /// Content-originated gesture handed over to the sheet
    DraggingContent,
}

impl DragMode {
    /// The gesture is moving the sheet rather than the content
    pub fn is_sheet_dragging(&self) -> bool {
        matches!(self, DragMode::DraggingChrome | DragMode::DraggingContent)
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, DragMode::Idle)
    }
}

impl StateTransitions for DragMode {
    fn on_event(&self, event: EventId) -> Option<Self> {
        use drag_events::*;
        match (self, event) {
            (DragMode::Idle, BEGIN_CHROME) => Some(DragMode::DraggingChrome),
            (DragMode::Idle, BEGIN_CONTENT) => Some(DragMode::ContentScrolling),
            (DragMode::ContentScrolling, SHEET_CAPTURE) => Some(DragMode::DraggingContent),
            (DragMode::DraggingContent, CONTENT_CAPTURE) => Some(DragMode::ContentScrolling),
            (DragMode::ContentScrolling, CONTENT_CAPTURE) => Some(DragMode::ContentScrolling),
            (DragMode::DraggingContent, SHEET_CAPTURE) => Some(DragMode::DraggingContent),
            (DragMode::DraggingChrome, SHEET_CAPTURE) => Some(DragMode::DraggingChrome),
            (DragMode::Idle, END) => None,
            (_, END) => Some(DragMode::Idle),
            _ => None,
        }
    }
}

/// Defines the state of an ongoing drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    /// Sheet offset when the gesture began
    pub drag_start_height: f32,
    /// Downward translation absorbed by content scrolling before the sheet
    /// took over, so the handoff does not jump
    pub pending_translation: f32,
    /// Gesture started on the header or dragger bar
    pub is_from_chrome: bool,
}

impl DragState {
    pub const INITIAL: DragState = DragState {
        drag_start_height: 0.0,
        pending_translation: 0.0,
        is_from_chrome: false,
    };
}

/// Sheet offset for a live drag: `clamp(start - translation + pending, 0, max)`
pub fn drag_offset(state: &DragState, translation: f32, max_height: f32) -> f32 {
    (state.drag_start_height - translation + state.pending_translation).clamp(0.0, max_height.max(0.0))
}

/// Where to snap when a sheet drag is released, and how
///
/// Fast releases move one height in the direction of travel (positive
/// velocity is downward, toward closing); slower ones settle on the nearest
/// height. Fast enough releases use a spring.
pub fn release_request(
    snaps: &SnapPoints,
    offset: f32,
    presented: bool,
    velocity: f32,
    timing: &SnapTiming,
) -> SnapRequest {
    let strength = velocity.abs();
    let target = if strength >= timing.fling_velocity {
        if velocity > 0.0 {
            snaps.previous(offset, presented)
        } else {
            snaps.next(offset, presented, false)
        }
    } else {
        snaps.nearest(offset, presented)
    };

    let style = if strength >= timing.spring_velocity {
        SnapStyle::Spring
    } else {
        SnapStyle::Eased
    };

    SnapRequest::new(target, timing.snap_duration, style)
}

/// Drives [`DragMode`] and owns the [`DragState`] for the active gesture
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    machine: StateMachine<DragMode>,
    state: DragState,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> DragMode {
        self.machine.current_state()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_from_chrome(&self) -> bool {
        self.state.is_from_chrome
    }

    /// Start a gesture at the current sheet offset
    ///
    /// `drags_sheet` is the arbiter's answer at gesture start; it decides the
    /// initial mode for content-originated gestures.
    pub fn begin(&mut self, origin: GestureOrigin, offset: f32, drags_sheet: bool) {
        if self.mode().is_active() {
            // Missed terminal phase; start over rather than inherit state
            self.machine.reset();
        }

        self.state = DragState {
            drag_start_height: offset,
            pending_translation: 0.0,
            is_from_chrome: origin.is_chrome(),
        };

        if origin.is_chrome() {
            self.machine.send(drag_events::BEGIN_CHROME);
        } else {
            self.machine.send(drag_events::BEGIN_CONTENT);
            self.capture(drags_sheet);
        }
    }

    /// Feed a `changed` event
    ///
    /// Returns the new sheet offset when the gesture is dragging the sheet,
    /// `None` when the content is scrolling instead (or no gesture is active).
    pub fn change(&mut self, translation: f32, drags_sheet: bool, max_height: f32) -> Option<f32> {
        if !self.mode().is_active() {
            return None;
        }

        let drags_sheet = drags_sheet || self.state.is_from_chrome;
        self.capture(drags_sheet);

        if drags_sheet {
            Some(drag_offset(&self.state, translation, max_height))
        } else {
            if translation > 0.0 {
                self.state.pending_translation = translation;
            }
            None
        }
    }

    /// Feed a terminal phase and reset
    ///
    /// Returns whether the gesture was dragging the sheet when it ended.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.mode().is_sheet_dragging();
        self.machine.send(drag_events::END);
        self.state = DragState::INITIAL;
        was_dragging
    }

    fn capture(&mut self, drags_sheet: bool) {
        let event = if drags_sheet {
            drag_events::SHEET_CAPTURE
        } else {
            drag_events::CONTENT_CAPTURE
        };
        self.machine.send(event);
    }
}
