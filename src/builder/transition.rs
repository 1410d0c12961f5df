//! Fluent declaration of transition rules.

use crate::core::{Context, Event, Guard, State, TransitionRule};
use crate::engine::StateMachine;
use std::marker::PhantomData;

/// First step of a declaration: the source state is fixed.
///
/// Created by [`StateMachine::from`]. Call [`on`](Self::on) to pick the
/// event kind.
pub struct TransitionBuilder<'m, S: State> {
    machine: &'m StateMachine<S>,
    from: S,
}

impl<'m, S: State> TransitionBuilder<'m, S> {
    pub(crate) fn new(machine: &'m StateMachine<S>, from: S) -> Self {
        Self { machine, from }
    }

    /// Take the rule's event kind from `event`.
    ///
    /// The value is only read for its kind; it also fixes the event type
    /// that a later [`when`](RuleBuilder::when) guard receives.
    pub fn on<E: Event>(self, event: &E) -> RuleBuilder<'m, S, E> {
        RuleBuilder {
            machine: self.machine,
            from: self.from,
            event_kind: event.kind().to_string(),
            guard: None,
            _event: PhantomData,
        }
    }
}

/// A rule with source state and event kind, ready for a guard and target.
///
/// [`to`](Self::to) appends a rule and returns the builder, so further `to`
/// calls append more rules with the same source, kind and guard.
pub struct RuleBuilder<'m, S: State, E> {
    machine: &'m StateMachine<S>,
    from: S,
    event_kind: String,
    guard: Option<Guard>,
    _event: PhantomData<fn(&E)>,
}

impl<'m, S: State, E: Event> RuleBuilder<'m, S, E> {
    /// Attach a guard. Only the last guard set before `to` is kept.
    ///
    /// The guard only ever sees events of type `E`. An event of another type
    /// that shares this rule's kind is rejected by the guard, so dispatching
    /// it reports `NoValidTransition` rather than `InvalidHandlerType`.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Context, &E) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Attach a pre-built guard. Replaces any earlier guard.
    pub fn guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Finalize the rule and append it to the machine's transition table.
    pub fn to(self, state: impl Into<S>) -> Self {
        self.machine.add_rule(TransitionRule {
            from: self.from.clone(),
            to: state.into(),
            event_kind: self.event_kind.clone(),
            guard: self.guard.clone(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unlock {
        code: u32,
    }

    impl Event for Unlock {
        fn kind(&self) -> &str {
            "Unlock"
        }
    }

    fn machine() -> StateMachine<String> {
        StateMachine::new("Locked".to_string())
    }

    #[test]
    fn to_appends_a_rule() {
        let machine = machine();
        machine.from("Locked").on(&Unlock { code: 0 }).to("Unlocked");

        let rules = machine.transitions();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].from, "Locked");
        assert_eq!(rules[0].to, "Unlocked");
        assert_eq!(rules[0].event_kind, "Unlock");
        assert!(!rules[0].is_guarded());
    }

    #[test]
    fn repeated_to_reuses_source_kind_and_guard() {
        let machine = machine();
        machine
            .from("Locked")
            .on(&Unlock { code: 0 })
            .when(|_ctx, e| e.code == 1234)
            .to("Unlocked")
            .to("Open");

        let rules = machine.transitions();
        assert_eq!(rules.len(), 2);
        assert!(rules.iter().all(|r| r.from == "Locked" && r.is_guarded()));
        assert_eq!(rules[1].to, "Open");
    }

    #[test]
    fn last_guard_wins() {
        let machine = machine();
        machine
            .from("Locked")
            .on(&Unlock { code: 0 })
            .when(|_ctx, _e| true)
            .when(|_ctx, _e| false)
            .to("Unlocked");

        let rule = &machine.transitions()[0];
        let guard = rule.guard.as_ref().unwrap();
        assert!(!guard.check(&Context::new(), &Unlock { code: 1234 }));
    }

    #[test]
    fn prebuilt_guard_replaces_closure_guard() {
        let machine = machine();
        machine
            .from("Locked")
            .on(&Unlock { code: 0 })
            .when(|_ctx, _e| false)
            .guard(Guard::new(|_ctx, e: &Unlock| e.code == 7))
            .to("Unlocked");

        let guard = machine.transitions()[0].guard.clone().unwrap();
        assert!(guard.check(&Context::new(), &Unlock { code: 7 }));
    }
}
