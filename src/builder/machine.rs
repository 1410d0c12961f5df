//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{BoxError, Context, Event, State};
use crate::engine::StateMachine;
use crate::middleware::{Hook, MachineOptions};
use std::sync::Arc;

/// Builder for constructing state machines with a fluent API.
///
/// Collects the initial state and the construction-time options (hooks,
/// history limit). Transitions and handlers are declared on the built
/// machine.
pub struct StateMachineBuilder<S: State> {
    initial: Option<S>,
    options: MachineOptions,
}

impl<S: State> StateMachineBuilder<S> {
    pub fn new() -> Self {
        Self {
            initial: None,
            options: MachineOptions::default(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<S>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Append a hook that runs before the handler.
    pub fn pre_hook<F>(mut self, f: F) -> Self
    where
        F: Fn(&Context, &dyn Event) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.options.pre_hooks.push(Arc::new(f));
        self
    }

    /// Append a hook that runs after the handler, before commit.
    pub fn post_hook<F>(mut self, f: F) -> Self
    where
        F: Fn(&Context, &dyn Event) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.options.post_hooks.push(Arc::new(f));
        self
    }

    /// Replace the pre-hook list.
    pub fn pre_hooks(mut self, hooks: Vec<Hook>) -> Self {
        self.options.pre_hooks = hooks;
        self
    }

    /// Replace the post-hook list.
    pub fn post_hooks(mut self, hooks: Vec<Hook>) -> Self {
        self.options.post_hooks = hooks;
        self
    }

    /// Bound the number of committed transitions kept in history.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.options.history_limit = Some(limit);
        self
    }

    /// Keep every committed transition in history.
    pub fn unbounded_history(mut self) -> Self {
        self.options.history_limit = None;
        self
    }

    /// Build the state machine.
    pub fn build(self) -> Result<StateMachine<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(StateMachine::with_options(initial, self.options))
    }
}

impl<S: State> Default for StateMachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
