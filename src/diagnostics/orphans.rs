//! Orphan-transition detection.
//!
//! An orphan is a declared rule whose event kind has no registered handler.
//! Dispatching such an event would always fail with
//! `NoHandlerRegistered`, however the machine reached the source state.

use crate::core::{State, TransitionRule};
use crate::engine::StateMachine;
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Anything that can list the event kinds of its orphaned rules.
///
/// Lets machines over different state types be scanned together.
pub trait OrphanFinder {
    /// Event kind of every orphaned rule, in table order.
    fn orphan_event_kinds(&self) -> Vec<String>;
}

impl<S: State> StateMachine<S> {
    /// Every rule whose event kind has no handler registered right now.
    ///
    /// Reachability of the source state is not considered. Rules are
    /// returned by source state in declaration order.
    pub fn find_orphan_transitions(&self) -> Vec<TransitionRule<S>> {
        let inner = self.read();
        inner
            .transitions
            .rules()
            .filter(|rule| !inner.handlers.contains(&rule.event_kind))
            .cloned()
            .collect()
    }
}

impl<S: State> OrphanFinder for StateMachine<S> {
    fn orphan_event_kinds(&self) -> Vec<String> {
        self.find_orphan_transitions()
            .into_iter()
            .map(|rule| rule.event_kind)
            .collect()
    }
}

/// Orphans found in one named machine.
#[derive(Clone, Debug, PartialEq)]
pub struct OrphanReport {
    pub machine: String,
    pub event_kinds: Vec<String>,
}

impl OrphanReport {
    /// Scan `finder`; `None` when it has no orphans.
    pub fn scan<F>(machine: impl Into<String>, finder: &F) -> Option<Self>
    where
        F: OrphanFinder + ?Sized,
    {
        let event_kinds = finder.orphan_event_kinds();
        if event_kinds.is_empty() {
            return None;
        }
        Some(Self {
            machine: machine.into(),
            event_kinds,
        })
    }
}

impl fmt::Display for OrphanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} has orphan transitions:", self.machine)?;
        for kind in &self.event_kinds {
            writeln!(f, "{kind}")?;
        }
        Ok(())
    }
}

/// Failure raised when at least one scanned machine has orphans.
#[derive(Debug, Error, PartialEq)]
pub enum DiagnosticsError {
    #[error("{}", render(.reports))]
    OrphanTransitions { reports: Vec<OrphanReport> },
}

impl DiagnosticsError {
    pub fn reports(&self) -> &[OrphanReport] {
        match self {
            Self::OrphanTransitions { reports } => reports,
        }
    }
}

fn render(reports: &[OrphanReport]) -> String {
    reports.iter().map(ToString::to_string).collect()
}

/// Fail if `finder` has any orphaned rule.
pub fn check_orphans<F>(name: impl Into<String>, finder: &F) -> Result<(), DiagnosticsError>
where
    F: OrphanFinder + ?Sized,
{
    match OrphanReport::scan(name, finder) {
        None => Ok(()),
        Some(report) => Err(DiagnosticsError::OrphanTransitions {
            reports: vec![report],
        }),
    }
}

/// Scan every named machine and fail with all reports combined.
///
/// Machines without orphans are left out of the report. Reports keep the
/// iteration order of `machines`.
pub fn check_all_orphans<'a, N, F, I>(machines: I) -> Result<(), DiagnosticsError>
where
    N: Into<String>,
    F: OrphanFinder + ?Sized + 'a,
    I: IntoIterator<Item = (N, &'a F)>,
{
    let checks: Vec<Validation<(), NonEmptyVec<OrphanReport>>> = machines
        .into_iter()
        .map(|(name, finder)| match OrphanReport::scan(name, finder) {
            None => Validation::success(()),
            Some(report) => Validation::fail(report),
        })
        .collect();

    match Validation::all_vec(checks) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(reports) => {
            let reports: Vec<OrphanReport> = reports.iter().cloned().collect();
            tracing::warn!(machines = reports.len(), "orphan transitions found");
            Err(DiagnosticsError::OrphanTransitions { reports })
        }
    }
}
