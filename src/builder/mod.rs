//! Builder API for declaring machines and transitions.
//!
//! - [`StateMachineBuilder`] collects the initial state and construction
//!   options
//! - [`TransitionBuilder`] / [`RuleBuilder`] implement the
//!   `from(..).on(..).when(..).to(..)` chain returned by
//!   [`StateMachine::from`](crate::engine::StateMachine::from)
//! - `state_enum!` and `impl_event!` cut boilerplate for states and events

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::{RuleBuilder, TransitionBuilder};
