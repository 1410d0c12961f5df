//! Guard predicates for controlling transitions.
//!
//! Guards are pure boolean functions over an event. A rule with a guard is
//! only eligible when the guard accepts the event being dispatched.

use super::context::Context;
use super::event::Event;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

type Predicate = Arc<dyn Fn(&Context, &dyn Any) -> bool + Send + Sync>;

/// Pure predicate that determines if a transition is eligible.
///
/// A guard is written against one concrete event type and stored with that
/// type erased. When checked against a value of any other type it rejects.
///
/// Guards run while the machine's lock is held for reading, so they must
/// not call back into the machine.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{Context, Event, Guard};
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
/// let correct_code = Guard::new(|_ctx, e: &UnlockEvent| e.code == 1234);
/// let ctx = Context::new();
///
/// assert!(correct_code.check(&ctx, &UnlockEvent { code: 1234 }));
/// assert!(!correct_code.check(&ctx, &UnlockEvent { code: 1111 }));
/// ```
#[derive(Clone)]
pub struct Guard {
    predicate: Predicate,
}

impl Guard {
    /// Create a guard from a pure predicate over events of type `E`.
    pub fn new<E, F>(predicate: F) -> Self
    where
        E: Event,
        F: Fn(&Context, &E) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(move |ctx: &Context, event: &dyn Any| {
                event
                    .downcast_ref::<E>()
                    .is_some_and(|event| predicate(ctx, event))
            }),
        }
    }

    /// Evaluate the guard against an event.
    pub fn check(&self, ctx: &Context, event: &dyn Any) -> bool {
        (self.predicate)(ctx, event)
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
