//! State Machine Runtime
//!
//! Enum-driven state machines for overlay and menu lifecycles. State types
//! describe their own transitions by implementing [`StateTransitions`];
//! [`StateMachine`] owns the current state and records transition history.

use smallvec::SmallVec;
use std::hash::Hash;

use crate::events::EventType;

/// Maximum number of transitions kept for debugging
const HISTORY_LIMIT: usize = 32;

/// Trait for state types that can handle event transitions
///
/// # Example
///
/// ```
/// use folio_core::events::event_types::*;
/// use folio_core::fsm::StateTransitions;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// enum Panel {
///     #[default]
///     Hidden,
///     Shown,
/// }
///
/// impl StateTransitions for Panel {
///     fn on_event(&self, event: u32) -> Option<Self> {
///         match (self, event) {
///             (Panel::Hidden, OPEN) => Some(Panel::Shown),
///             (Panel::Shown, CLOSE) => Some(Panel::Hidden),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventType) -> Option<Self>;
}

/// A state machine instance over a user-defined state type
#[derive(Debug, Clone)]
pub struct StateMachine<S: StateTransitions> {
    current_state: S,
    /// History of state transitions (for debugging)
    history: SmallVec<[(S, EventType, S); 4]>,
}

impl<S: StateTransitions> StateMachine<S> {
    /// Create a new state machine in the given initial state
    pub fn new(initial_state: S) -> Self {
        Self {
            current_state: initial_state,
            history: SmallVec::new(),
        }
    }

    /// Get the current state
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Check if an event can trigger a transition from current state
    pub fn can_send(&self, event: EventType) -> bool {
        self.current_state.on_event(event).is_some()
    }

    /// Send an event, returning true if a transition happened
    pub fn send(&mut self, event: EventType) -> bool {
        let from = self.current_state;
        let Some(to) = from.on_event(event) else {
            tracing::trace!("fsm: {:?} ignores event {}", from, event);
            return false;
        };

        if self.history.len() == HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push((from, event, to));
        self.current_state = to;
        tracing::trace!("fsm: {:?} --{}--> {:?}", from, event, to);
        true
    }

    /// Get transition history
    pub fn history(&self) -> &[(S, EventType, S)] {
        &self.history
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl<S: StateTransitions + Default> Default for StateMachine<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
