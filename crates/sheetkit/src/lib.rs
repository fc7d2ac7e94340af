//! Sheetkit Bottom Sheet
//!
//! A presentable, draggable bottom sheet: a header, a scrollable content
//! region and an always-visible bottom region beneath it. This crate holds
//! the behaviour only; rendering belongs to a [`SheetHost`].
//!
//! - **Snap points**: configured resting heights, queried in configured order
//! - **Drag state machine**: one FSM per gesture cycle with handoff translation
//! - **Scroll/drag arbiter**: per-event choice between moving the sheet and
//!   scrolling its content
//! - **Snap animator**: a single interruptible eased or spring motion
//! - **Presentation**: show/hide as a snap to the nearest height or to 0

pub mod animator;
pub mod arbiter;
pub mod config;
pub mod drag;
pub mod error;
pub mod host;
pub mod sheet;
pub mod snap;

pub use animator::{SnapAnimator, SnapRequest, SnapStyle};
pub use arbiter::ScrollArbiter;
pub use config::{
    Appearance, DismissInteraction, DismissInteractions, InterruptPolicy, SheetConfig,
    ShadowConfig, SnapTiming,
};
pub use drag::{DragMode, DragState, DragTracker};
pub use error::{ConfigError, Result};
pub use host::{HeadlessHost, SheetHost};
pub use sheet::BottomSheet;
pub use snap::SnapPoints;
