//! Read-only diagnostics over declared transitions and registered handlers.
//!
//! Single-machine checks fail fast; [`check_all_orphans`] collects every
//! machine's report with stillwater's `Validation` so one run surfaces all
//! problems at once.
//!
//! # Example
//!
//! ```rust
//! use switchyard::diagnostics::check_all_orphans;
//! use switchyard::engine::StateMachine;
//! use switchyard::impl_event;
//!
//! struct UndefinedEvent;
//! impl_event!(UndefinedEvent);
//!
//! let machine = StateMachine::new("Start".to_string());
//! machine.from("Start").on(&UndefinedEvent).to("End");
//!
//! let err = check_all_orphans([("SM", &machine)]).unwrap_err();
//! assert_eq!(err.to_string(), "SM has orphan transitions:\nUndefinedEvent\n");
//! ```

mod orphans;

pub use orphans::{check_all_orphans, check_orphans, DiagnosticsError, OrphanFinder, OrphanReport};
