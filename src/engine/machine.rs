//! The shared machine: transition table, handler registry, current state.

use crate::builder::TransitionBuilder;
use crate::core::{State, StateHistory, TransitionRule, TransitionTable};
use crate::handler::{Handler, HandlerRegistry};
use crate::middleware::{MachineOptions, MiddlewarePipeline};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Everything guarded by the machine's single reader/writer lock.
pub(crate) struct Inner<S: State> {
    pub(crate) current: S,
    pub(crate) transitions: TransitionTable<S>,
    pub(crate) handlers: HandlerRegistry,
    pub(crate) history: StateHistory<S>,
}

/// An event-driven state machine.
///
/// All methods take `&self`; share the machine across threads with
/// `Arc<StateMachine<S>>`. The transition table, handler registry, current
/// state and history sit behind one `parking_lot::RwLock`. The middleware
/// pipeline is fixed at construction and lives outside the lock.
///
/// # Example
///
/// ```rust
/// use switchyard::core::Context;
/// use switchyard::engine::StateMachine;
/// use switchyard::handler::handler_fn;
/// use switchyard::impl_event;
///
/// struct StartEvent;
/// impl_event!(StartEvent);
///
/// let machine = StateMachine::new("Idle".to_string());
/// machine.register("StartEvent", handler_fn(|_ctx, _e: &StartEvent| Ok(())));
/// machine.from("Idle").on(&StartEvent).to("Running");
///
/// machine.dispatch(&Context::new(), &StartEvent).unwrap();
/// assert_eq!(machine.current_state(), "Running");
/// ```
pub struct StateMachine<S: State> {
    pub(crate) inner: RwLock<Inner<S>>,
    pub(crate) middleware: MiddlewarePipeline,
    pub(crate) history_limit: Option<usize>,
}

impl<S: State> StateMachine<S> {
    /// Create a machine in `initial` with no rules, handlers or hooks.
    pub fn new(initial: S) -> Self {
        Self::with_options(initial, MachineOptions::default())
    }

    /// Create a machine with construction-time options.
    pub fn with_options(initial: S, options: MachineOptions) -> Self {
        Self {
            inner: RwLock::new(Inner {
                current: initial,
                transitions: TransitionTable::new(),
                handlers: HandlerRegistry::new(),
                history: StateHistory::new(),
            }),
            middleware: MiddlewarePipeline::new(options.pre_hooks, options.post_hooks),
            history_limit: options.history_limit,
        }
    }

    /// Begin declaring a rule from `state`.
    pub fn from(&self, state: impl Into<S>) -> TransitionBuilder<'_, S> {
        TransitionBuilder::new(self, state.into())
    }

    pub(crate) fn add_rule(&self, rule: TransitionRule<S>) {
        tracing::trace!(
            from = rule.from.name(),
            to = rule.to.name(),
            event_kind = %rule.event_kind,
            guarded = rule.is_guarded(),
            "declared transition"
        );
        self.write().transitions.push(rule);
    }

    /// Register `handler` for events of `kind`, replacing any earlier one.
    pub fn register<H: Handler>(&self, kind: impl Into<String>, handler: H) {
        let kind = kind.into();
        let replaced = self.write().handlers.insert(kind.clone(), handler);
        if let Some(previous) = replaced {
            tracing::debug!(
                event_kind = %kind,
                previous = previous.event_type_name(),
                "replaced registered handler"
            );
        }
    }

    /// Apply a single transform. See [`pipe`](crate::middleware::pipe).
    pub fn pipe<F>(self, transform: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        transform(self)
    }

    /// Snapshot of the current state.
    pub fn current_state(&self) -> S {
        self.read().current.clone()
    }

    /// Whether the current state is final.
    pub fn is_final(&self) -> bool {
        self.read().current.is_final()
    }

    /// Snapshot of the committed transition history.
    pub fn history(&self) -> StateHistory<S> {
        self.read().history.clone()
    }

    /// Every declared rule, grouped by source state in declaration order.
    pub fn transitions(&self) -> Vec<TransitionRule<S>> {
        self.read().transitions.rules().cloned().collect()
    }

    pub fn transition_count(&self) -> usize {
        self.read().transitions.len()
    }

    pub fn handler_count(&self) -> usize {
        self.read().handlers.len()
    }

    /// Whether a handler is registered for `kind`.
    pub fn has_handler(&self, kind: &str) -> bool {
        self.read().handlers.contains(kind)
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Inner<S>> {
        self.inner.read()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Inner<S>> {
        self.inner.write()
    }
}

impl<S: State> std::fmt::Debug for StateMachine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.read();
        f.debug_struct("StateMachine")
            .field("current", &inner.current)
            .field("transitions", &inner.transitions.len())
            .field("handlers", &inner.handlers.kinds())
            .field("middleware", &self.middleware)
            .finish()
    }
}
