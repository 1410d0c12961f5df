//! Committed transition history.
//!
//! Every successful dispatch appends one [`StateTransition`]. Discarded
//! commits (concurrent modification) and failed dispatches leave no record.
//! A machine keeps a bounded window of recent transitions; see
//! [`MachineOptions::history_limit`](crate::middleware::MachineOptions::history_limit).

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use switchyard::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: "Idle".to_string(),
///     to: "Running".to_string(),
///     event_kind: "StartEvent".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.event_kind, "StartEvent");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Kind of the event that caused the transition
    pub event_kind: String,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of committed transitions.
///
/// `record` is pure and returns a new history. The machine itself appends in
/// place and may drop the oldest entries when a history limit is configured.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let step = |from: &str, to: &str| StateTransition {
///     from: from.to_string(),
///     to: to.to_string(),
///     event_kind: "Next".to_string(),
///     timestamp: Utc::now(),
/// };
///
/// let history = StateHistory::new()
///     .record(step("Start", "Middle"))
///     .record(step("Middle", "End"));
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // Start -> Middle -> End
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push_back(transition);
        Self { transitions }
    }

    /// Append in place, keeping at most `limit` most recent entries.
    pub(crate) fn push(&mut self, transition: StateTransition<S>, limit: Option<usize>) {
        self.transitions.push_back(transition);
        if let Some(limit) = limit {
            while self.transitions.len() > limit {
                self.transitions.pop_front();
            }
        }
    }

    /// Get the path of states traversed.
    ///
    /// The `from` state of the first recorded transition, then the `to` state
    /// of each transition in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transitions.
    ///
    /// `None` when the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Recorded transitions, oldest first.
    pub fn transitions(&self) -> &VecDeque<StateTransition<S>> {
        &self.transitions
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
