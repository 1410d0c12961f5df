//! The dispatch pipeline: validate, resolve handler, hooks, handler, commit.

use super::error::DispatchError;
use super::machine::StateMachine;
use crate::core::{Context, Event, State, StateTransition};
use crate::handler::RegisteredHandler;
use chrono::Utc;
use std::any::type_name;

/// Outcome of the validation step.
struct Validated<S> {
    snapshot: S,
    target: S,
}

impl<S: State> StateMachine<S> {
    /// Process `event` against the current state.
    ///
    /// 1. Under a read lock, pick the first rule from the current state whose
    ///    kind matches and whose guard accepts; remember the target and the
    ///    state observed.
    /// 2. Under a read lock, fetch the handler registered for the kind.
    /// 3. Check the handler accepts this event's concrete type.
    /// 4. Run pre-hooks, the handler, then post-hooks, with no lock held.
    /// 5. Under the write lock, commit the target if the state is still the
    ///    one observed in step 1; otherwise discard the transition with
    ///    [`DispatchError::ConcurrentModification`].
    ///
    /// Handlers may dispatch on the same machine. Side effects of hooks and
    /// handlers are never rolled back.
    pub fn dispatch<E: Event>(&self, ctx: &Context, event: &E) -> Result<(), DispatchError> {
        let event_kind = event.kind();
        let span = tracing::debug_span!("dispatch", dispatch_id = %ctx.id(), event_kind);
        let _entered = span.enter();

        let Validated { snapshot, target } = self.validate(ctx, event)?;
        let handler = self.resolve_handler(event_kind)?;

        if !handler.accepts::<E>() {
            return Err(invalid_handler_type::<E>(event_kind, &handler));
        }

        self.middleware
            .run_pre(ctx, event)
            .map_err(DispatchError::PreHook)?;

        match handler.execute(ctx, event) {
            Some(Ok(())) => {}
            Some(Err(source)) => {
                tracing::warn!(error = %source, "handler failed");
                return Err(DispatchError::HandlerExecutionFailed {
                    event_kind: event_kind.to_string(),
                    source,
                });
            }
            None => return Err(invalid_handler_type::<E>(event_kind, &handler)),
        }

        self.middleware
            .run_post(ctx, event)
            .map_err(DispatchError::PostHook)?;

        self.commit(event_kind, snapshot, target)
    }

    fn validate<E: Event>(&self, ctx: &Context, event: &E) -> Result<Validated<S>, DispatchError> {
        let inner = self.read();
        let current = &inner.current;
        let kind = event.kind();

        if inner.transitions.rules_for(current).is_none() {
            return Err(DispatchError::NoTransitionsForState {
                state: current.name().to_string(),
            });
        }

        match inner.transitions.find(ctx, current, kind, event) {
            Some(rule) => Ok(Validated {
                snapshot: current.clone(),
                target: rule.to.clone(),
            }),
            None => {
                tracing::trace!(state = current.name(), "no rule accepted the event");
                Err(DispatchError::NoValidTransition {
                    event_kind: kind.to_string(),
                    state: current.name().to_string(),
                })
            }
        }
    }

    fn resolve_handler(&self, event_kind: &str) -> Result<RegisteredHandler, DispatchError> {
        self.read()
            .handlers
            .get(event_kind)
            .cloned()
            .ok_or_else(|| DispatchError::NoHandlerRegistered {
                event_kind: event_kind.to_string(),
            })
    }

    fn commit(&self, event_kind: &str, snapshot: S, target: S) -> Result<(), DispatchError> {
        let mut inner = self.write();

        if inner.current != snapshot {
            tracing::warn!(
                expected = snapshot.name(),
                found = inner.current.name(),
                "state changed during dispatch, transition discarded"
            );
            return Err(DispatchError::ConcurrentModification {
                expected: snapshot.name().to_string(),
                found: inner.current.name().to_string(),
            });
        }

        let from = std::mem::replace(&mut inner.current, target.clone());
        tracing::debug!(from = from.name(), to = target.name(), "transition committed");

        let limit = self.history_limit;
        inner.history.push(
            StateTransition {
                from,
                to: target,
                event_kind: event_kind.to_string(),
                timestamp: Utc::now(),
            },
            limit,
        );
        Ok(())
    }
}

fn invalid_handler_type<E: Event>(event_kind: &str, handler: &RegisteredHandler) -> DispatchError {
    DispatchError::InvalidHandlerType {
        event_kind: event_kind.to_string(),
        accepts: handler.event_type_name(),
        received: type_name::<E>(),
    }
}
