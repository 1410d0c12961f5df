//! Events and their kinds.

use std::any::Any;

/// Boxed error type for caller-supplied failures (handlers and hooks).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An application-defined event.
///
/// The engine only ever looks at [`kind`](Event::kind): it is the key for
/// both transition matching and handler lookup. The rest of the value is
/// payload, handed untouched to guards and the registered handler.
///
/// The [`impl_event!`](crate::impl_event) macro derives the kind from the
/// type name.
///
/// # Example
///
/// ```rust
/// use switchyard::core::Event;
///
/// struct UnlockEvent {
///     code: u32,
/// }
///
/// impl Event for UnlockEvent {
///     fn kind(&self) -> &str {
///         "UnlockEvent"
///     }
/// }
///
/// let event = UnlockEvent { code: 1234 };
/// assert_eq!(event.kind(), "UnlockEvent");
/// # let _ = event.code;
/// ```
pub trait Event: Any + Send + Sync {
    /// The event kind identifier.
    fn kind(&self) -> &str;
}
