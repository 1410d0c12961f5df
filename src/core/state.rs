//! The `State` trait for machine states.
//!
//! A state is an opaque, comparable label. Equality is the only thing the
//! engine relies on when matching rules and checking commits; the name is
//! used for error messages, logs and graph export.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: states are snapshotted at validation time and copied into rules
/// - `PartialEq`: rule lookup and the optimistic commit check compare states
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: transition history is serializable
///
/// `String` implements `State`, so plain string labels work out of the box.
/// Enums can use the [`state_enum!`](crate::state_enum) macro.
///
/// # Example
///
/// ```rust
/// use switchyard::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Locked,
///     Unlocked,
///     Removed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Locked => "Locked",
///             Self::Unlocked => "Unlocked",
///             Self::Removed => "Removed",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Removed)
///     }
/// }
///
/// assert_eq!(Door::Locked.name(), "Locked");
/// assert!(Door::Removed.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Label used in errors, logs and graph output.
    fn name(&self) -> &str;

    /// Whether this is a terminal state.
    ///
    /// Purely informational: the engine does not refuse events in a final
    /// state, it only reports the flag and highlights it in graph output.
    fn is_final(&self) -> bool {
        false
    }
}

impl State for String {
    fn name(&self) -> &str {
        self
    }
}
