//! Switchyard: an in-process, event-driven finite state machine
//!
//! Callers declare states, transitions keyed by event kind (optionally
//! guarded), and one handler per event kind. Dispatching an event validates
//! it against the current state, runs hooks and the handler, and commits the
//! new state under an optimistic concurrency check.
//!
//! # Core Concepts
//!
//! - **State**: any comparable label implementing [`State`] (`String` does)
//! - **Event**: a value whose [`kind`](Event::kind) selects both the rule and
//!   the handler
//! - **Guard**: a pure predicate over the event that must accept for its
//!   rule to fire
//! - **Handler**: processes one concrete event type; registered per kind
//! - **Hooks**: pre/post middleware configured at construction
//!
//! # Example
//!
//! ```rust
//! use switchyard::{handler_fn, impl_event, Context, DispatchError, StateMachine};
//!
//! struct UnlockEvent {
//!     code: u32,
//! }
//! impl_event!(UnlockEvent);
//!
//! let machine = StateMachine::new("Locked".to_string());
//! machine.register("UnlockEvent", handler_fn(|_ctx, _e: &UnlockEvent| Ok(())));
//! machine
//!     .from("Locked")
//!     .on(&UnlockEvent { code: 0 })
//!     .when(|_ctx, e| e.code == 1234)
//!     .to("Unlocked");
//!
//! let ctx = Context::new();
//! let err = machine.dispatch(&ctx, &UnlockEvent { code: 1111 }).unwrap_err();
//! assert!(matches!(err, DispatchError::NoValidTransition { .. }));
//! assert_eq!(machine.current_state(), "Locked");
//!
//! machine.dispatch(&ctx, &UnlockEvent { code: 1234 }).unwrap();
//! assert_eq!(machine.current_state(), "Unlocked");
//! ```

pub mod builder;
pub mod core;
pub mod diagnostics;
pub mod engine;
pub mod handler;
pub mod middleware;
mod visualize;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder};
pub use crate::core::{BoxError, Context, Event, Guard, State, StateHistory, StateTransition, TransitionRule};
pub use crate::diagnostics::{check_all_orphans, check_orphans, DiagnosticsError, OrphanFinder};
pub use crate::engine::{DispatchError, StateMachine};
pub use crate::handler::{handler_fn, Handler};
pub use crate::middleware::{hook, pipe, Hook, MachineOptions, DEFAULT_HISTORY_LIMIT};
