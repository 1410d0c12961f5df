//! Transition rules and the per-state transition table.

use super::context::Context;
use super::guard::Guard;
use super::state::State;
use std::any::Any;

/// A declared transition: `from --event_kind [guard]--> to`.
///
/// Rules are immutable once declared. The table hands out clones.
#[derive(Clone, Debug)]
pub struct TransitionRule<S: State> {
    pub from: S,
    pub to: S,
    pub event_kind: String,
    pub guard: Option<Guard>,
}

impl<S: State> TransitionRule<S> {
    pub fn is_guarded(&self) -> bool {
        self.guard.is_some()
    }

    /// Whether this rule fires for an event of `kind` (pure).
    ///
    /// The guard is only evaluated when the kind matches.
    pub fn accepts(&self, ctx: &Context, kind: &str, event: &dyn Any) -> bool {
        self.event_kind == kind && self.guard.as_ref().map_or(true, |g| g.check(ctx, event))
    }
}

/// Mapping from source state to its rules, in declaration order.
///
/// Source states are kept in the order they were first declared so that
/// scans (orphan detection, graph export) are deterministic. The table only
/// grows.
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State> {
    entries: Vec<(S, Vec<TransitionRule<S>>)>,
}

impl<S: State> Default for TransitionTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> TransitionTable<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a rule to its source state's list.
    pub fn push(&mut self, rule: TransitionRule<S>) {
        match self.entries.iter_mut().find(|(state, _)| *state == rule.from) {
            Some((_, rules)) => rules.push(rule),
            None => self.entries.push((rule.from.clone(), vec![rule])),
        }
    }

    /// Rules declared for `state`, or `None` if it has no outgoing rules.
    pub fn rules_for(&self, state: &S) -> Option<&[TransitionRule<S>]> {
        self.entries
            .iter()
            .find(|(from, _)| from == state)
            .map(|(_, rules)| rules.as_slice())
    }

    /// First rule from `state` that accepts the event, in declaration order.
    pub fn find(
        &self,
        ctx: &Context,
        state: &S,
        kind: &str,
        event: &dyn Any,
    ) -> Option<&TransitionRule<S>> {
        self.rules_for(state)?
            .iter()
            .find(|rule| rule.accepts(ctx, kind, event))
    }

    /// Every rule, grouped by source state.
    pub fn rules(&self) -> impl Iterator<Item = &TransitionRule<S>> {
        self.entries.iter().flat_map(|(_, rules)| rules.iter())
    }

    /// Source states in first-declaration order.
    pub fn source_states(&self) -> impl Iterator<Item = &S> {
        self.entries.iter().map(|(state, _)| state)
    }

    /// Total number of rules.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, rules)| rules.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
