//! Gesture events
//!
//! Platform-neutral description of the gestures a host toolkit delivers to a
//! sheet. Vertical values follow screen convention: positive translation and
//! velocity point down, toward closing the sheet.

use serde::{Deserialize, Serialize};

/// Phase of a continuous gesture
///
/// Phases for one gesture arrive in strict order: `Began`, zero or more
/// `Changed`, then exactly one terminal phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GesturePhase {
    /// Recognizer has not started tracking yet
    #[default]
    Possible,
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

impl GesturePhase {
    /// Returns true for `Ended`, `Cancelled` and `Failed`
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GesturePhase::Ended | GesturePhase::Cancelled | GesturePhase::Failed
        )
    }
}

/// Region of the sheet a gesture started in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureOrigin {
    /// Optional header above the scrollable content
    Header,
    /// The small grab handle at the top edge of the sheet
    DraggerBar,
    /// The embedded scrollable region
    Content,
}

impl GestureOrigin {
    /// Header and dragger bar always drag the sheet, whatever the scroll state
    pub fn is_chrome(&self) -> bool {
        matches!(self, GestureOrigin::Header | GestureOrigin::DraggerBar)
    }
}

/// A pan gesture callback
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanGesture {
    pub phase: GesturePhase,
    pub origin: GestureOrigin,
    /// Vertical translation since the gesture began (points)
    #[serde(default)]
    pub translation_y: f32,
    /// Vertical velocity (points per second)
    #[serde(default)]
    pub velocity_y: f32,
}

impl PanGesture {
    pub fn new(phase: GesturePhase, origin: GestureOrigin) -> Self {
        Self {
            phase,
            origin,
            translation_y: 0.0,
            velocity_y: 0.0,
        }
    }

    /// Set the translation since gesture start
    pub fn translation(mut self, translation_y: f32) -> Self {
        self.translation_y = translation_y;
        self
    }

    /// Set the current velocity
    pub fn velocity(mut self, velocity_y: f32) -> Self {
        self.velocity_y = velocity_y;
        self
    }
}

/// A discrete tap
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapGesture {
    pub origin: GestureOrigin,
}

impl TapGesture {
    pub fn new(origin: GestureOrigin) -> Self {
        Self { origin }
    }
}
