//! The dispatch engine.
//!
//! [`StateMachine`] owns the transition table, handler registry, current
//! state and history behind one reader/writer lock, plus the middleware
//! pipeline fixed at construction. [`StateMachine::dispatch`] runs the
//! validate → pre-hooks → handler → post-hooks → commit pipeline.
//!
//! # Concurrency
//!
//! Locks are held only for validation, handler lookup and commit. Hooks and
//! handlers run unlocked, so a commit re-checks that the state observed at
//! validation time is still current. If it is not, the transition is
//! discarded even though the handler has already run.

mod dispatch;
mod error;
mod machine;

pub use error::DispatchError;
pub use machine::StateMachine;
