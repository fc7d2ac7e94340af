//! Sheetkit Core
//!
//! Foundational primitives shared by the sheetkit crates:
//!
//! - **Gesture Events**: Platform-neutral pan/tap gestures with phase, translation and velocity
//! - **State Machines**: Enum-based state transitions driven by event ids
//! - **Colors**: A small RGBA value type used by appearance configuration
//!
//! # Example
//!
//! ```rust
//! use sheetkit_core::events::{GestureOrigin, GesturePhase, PanGesture};
//!
//! let pan = PanGesture::new(GesturePhase::Changed, GestureOrigin::Header)
//!     .translation(-40.0)
//!     .velocity(-320.0);
//!
//! assert!(pan.origin.is_chrome());
//! assert!(!pan.phase.is_terminal());
//! ```

pub mod color;
pub mod events;
pub mod fsm;

pub use color::Color;
pub use events::{GestureOrigin, GesturePhase, PanGesture, TapGesture};
pub use fsm::{EventId, StateMachine, StateTransitions};
