//! Dispatch errors.

use crate::core::BoxError;
use thiserror::Error;

/// Errors returned by [`StateMachine::dispatch`](super::StateMachine::dispatch).
///
/// None are fatal and none are retried. Validation and lookup failures leave
/// the machine untouched. From `PreHook` onwards caller code has run, and its
/// side effects are not rolled back.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no transitions defined for state: {state}")]
    NoTransitionsForState { state: String },

    #[error("no valid transition found for event {event_kind} in state {state}")]
    NoValidTransition { event_kind: String, state: String },

    #[error("no handler registered for event type: {event_kind}")]
    NoHandlerRegistered { event_kind: String },

    #[error("invalid handler type for event: {event_kind} (handler accepts {accepts}, got {received})")]
    InvalidHandlerType {
        event_kind: String,
        accepts: &'static str,
        received: &'static str,
    },

    #[error("handler execution failed: {source}")]
    HandlerExecutionFailed {
        event_kind: String,
        #[source]
        source: BoxError,
    },

    #[error(transparent)]
    PreHook(BoxError),

    #[error(transparent)]
    PostHook(BoxError),

    /// Another dispatch committed between validation and commit. The
    /// handler has already run; the transition is discarded.
    #[error("concurrent state modification detected: expected state {expected}, found {found}")]
    ConcurrentModification { expected: String, found: String },
}
