//! Core data model of the state machine.
//!
//! - States via the `State` trait
//! - Events and their kinds via the `Event` trait
//! - Guard predicates over events
//! - Transition rules and the per-state transition table
//! - Dispatch context and committed transition history
//!
//! Nothing in this module takes locks; the engine owns synchronization.

mod context;
mod event;
mod guard;
mod history;
mod rule;
mod state;

pub use context::Context;
pub use event::{BoxError, Event};
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use rule::{TransitionRule, TransitionTable};
pub use state::State;
