//! Event handlers and the handler registry.
//!
//! A handler processes events of exactly one concrete type. The registry maps
//! an event kind to one handler and remembers which event type that handler
//! accepts, so a dispatch can check capability before invoking it.

mod registry;

pub use registry::{HandlerRegistry, RegisteredHandler};

use crate::core::{BoxError, Context, Event};
use std::marker::PhantomData;

/// Processes events of one concrete type.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{BoxError, Context, Event};
/// use switchyard::handler::Handler;
///
/// struct StartEvent;
///
/// impl Event for StartEvent {
///     fn kind(&self) -> &str {
///         "StartEvent"
///     }
/// }
///
/// struct StartHandler;
///
/// impl Handler for StartHandler {
///     type Event = StartEvent;
///
///     fn execute(&self, _ctx: &Context, _event: &StartEvent) -> Result<(), BoxError> {
///         Ok(())
///     }
/// }
/// ```
pub trait Handler: Send + Sync + 'static {
    /// The event type this handler is capable of processing.
    type Event: Event;

    /// Process the event. An error leaves the machine's state unchanged.
    fn execute(&self, ctx: &Context, event: &Self::Event) -> Result<(), BoxError>;
}

/// Handler backed by a closure. See [`handler_fn`].
pub struct FnHandler<E, F> {
    f: F,
    _event: PhantomData<fn(&E)>,
}

impl<E, F> Handler for FnHandler<E, F>
where
    E: Event,
    F: Fn(&Context, &E) -> Result<(), BoxError> + Send + Sync + 'static,
{
    type Event = E;

    fn execute(&self, ctx: &Context, event: &E) -> Result<(), BoxError> {
        (self.f)(ctx, event)
    }
}

/// Build a handler from a closure.
///
/// ```rust
/// use switchyard::core::Event;
/// use switchyard::handler::handler_fn;
///
/// struct Ping;
///
/// impl Event for Ping {
///     fn kind(&self) -> &str {
///         "Ping"
///     }
/// }
///
/// let handler = handler_fn(|_ctx, _event: &Ping| Ok(()));
/// # let _ = handler;
/// ```
pub fn handler_fn<E, F>(f: F) -> FnHandler<E, F>
where
    E: Event,
    F: Fn(&Context, &E) -> Result<(), BoxError> + Send + Sync + 'static,
{
    FnHandler {
        f,
        _event: PhantomData,
    }
}
