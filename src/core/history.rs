//! Immutable trails of state changes.
//!
//! A deactivation request keeps the phases it moved through, and the
//! navigator keeps the routes it visited. Both use [`StateHistory`].

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One recorded move between two states.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    pub from: S,
    pub to: S,
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Transition stamped with the current time.
    pub fn now(from: S, to: S) -> Self {
        Self {
            from,
            to,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered, append-only trail of transitions.
///
/// `record` returns a new history and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use berthguard::core::{DeactivationPhase, StateHistory, StateTransition};
///
/// let history = StateHistory::new()
///     .record(StateTransition::now(
///         DeactivationPhase::Idle,
///         DeactivationPhase::Queried,
///     ))
///     .record(StateTransition::now(
///         DeactivationPhase::Queried,
///         DeactivationPhase::Allowed,
///     ));
///
/// assert_eq!(
///     history.get_path(),
///     vec![
///         &DeactivationPhase::Idle,
///         &DeactivationPhase::Queried,
///         &DeactivationPhase::Allowed,
///     ]
/// );
/// assert_eq!(history.current(), Some(&DeactivationPhase::Allowed));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Return a new history with `transition` appended.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States in visiting order: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// The state reached by the latest transition.
    pub fn current(&self) -> Option<&S> {
        self.transitions.last().map(|t| &t.to)
    }

    /// Time between the first and last transition, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.transitions.first()?;
        let last = self.transitions.last()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
