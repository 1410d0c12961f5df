//! Declarative machine composition.

use crate::core::State;
use crate::engine::StateMachine;

/// A function that extends a machine and hands it back.
pub type Transform<S> = Box<dyn FnOnce(StateMachine<S>) -> StateMachine<S>>;

/// Apply `transforms` to `machine` left to right and return the result.
///
/// # Example
///
/// ```rust
/// use switchyard::engine::StateMachine;
/// use switchyard::middleware::{pipe, Transform};
/// use switchyard::impl_event;
///
/// struct Start;
/// impl_event!(Start);
///
/// let add_start: Transform<String> = Box::new(|machine| {
///     machine.from("Idle").on(&Start).to("Running");
///     machine
/// });
///
/// let machine = pipe(StateMachine::new("Idle".to_string()), vec![add_start]);
/// assert_eq!(machine.transition_count(), 1);
/// ```
pub fn pipe<S, I, F>(machine: StateMachine<S>, transforms: I) -> StateMachine<S>
where
    S: State,
    I: IntoIterator<Item = F>,
    F: FnOnce(StateMachine<S>) -> StateMachine<S>,
{
    transforms
        .into_iter()
        .fold(machine, |machine, transform| transform(machine))
}
