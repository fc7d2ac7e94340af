//! State Machine Runtime
//!
//! Flat state machines whose states are plain enums. The state type declares
//! its own transitions by implementing [`StateTransitions`]; [`StateMachine`]
//! holds the current state and optionally records transition history.

use std::fmt::Debug;
use std::hash::Hash;

/// Identifier for an event type
pub type EventId = u32;

/// Trait for state types that can handle event transitions
///
/// # Example
///
/// ```
/// use sheetkit_core::fsm::{EventId, StateTransitions};
///
/// const PRESS: EventId = 1;
/// const RELEASE: EventId = 2;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// enum HandleState {
///     #[default]
///     Idle,
///     Held,
/// }
///
/// impl StateTransitions for HandleState {
///     fn on_event(&self, event: EventId) -> Option<Self> {
///         match (self, event) {
///             (HandleState::Idle, PRESS) => Some(HandleState::Held),
///             (HandleState::Held, RELEASE) => Some(HandleState::Idle),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait StateTransitions: Clone + Copy + PartialEq + Eq + Hash + Debug + 'static {
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventId) -> Option<Self>;
}

/// A state machine instance
#[derive(Debug, Clone)]
pub struct StateMachine<S: StateTransitions> {
    initial_state: S,
    current_state: S,
}

impl<S: StateTransitions> StateMachine<S> {
    pub fn new(initial_state: S) -> Self {
        Self {
            initial_state,
            current_state: initial_state,
        }
    }

    /// Get the current state
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Send an event, potentially triggering a transition
    ///
    /// Returns the state after the event. Events with no transition from the
    /// current state are ignored.
    pub fn send(&mut self, event: EventId) -> S {
        let from = self.current_state;
        let Some(to) = from.on_event(event) else {
            return from;
        };

        if from != to {
            tracing::trace!(?from, ?to, event, "state transition");
        }

        self.current_state = to;
        to
    }

    /// Return to the initial state without taking a transition
    pub fn reset(&mut self) {
        self.current_state = self.initial_state;
    }
}

impl<S: StateTransitions + Default> Default for StateMachine<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
