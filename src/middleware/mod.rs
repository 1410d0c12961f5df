//! Pre/post transition hooks and machine construction options.
//!
//! Hooks are configured once, when the machine is built, and are immutable
//! afterwards. Pre-hooks run after the handler has been resolved but before
//! it executes; post-hooks run after the handler succeeds and before the
//! state is committed. In each phase the first failing hook stops the rest.

mod pipe;

pub use pipe::{pipe, Transform};

use crate::core::{BoxError, Context, Event};
use std::fmt;
use std::sync::Arc;

/// A hook run against every dispatched event.
pub type Hook = Arc<dyn Fn(&Context, &dyn Event) -> Result<(), BoxError> + Send + Sync>;

/// Wrap a closure as a [`Hook`].
pub fn hook<F>(f: F) -> Hook
where
    F: Fn(&Context, &dyn Event) -> Result<(), BoxError> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// History window used unless a machine is configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

/// Construction-time configuration of a machine.
#[derive(Clone)]
pub struct MachineOptions {
    /// Hooks run, in order, before the handler.
    pub pre_hooks: Vec<Hook>,
    /// Hooks run, in order, after the handler and before commit.
    pub post_hooks: Vec<Hook>,
    /// Keep at most this many committed transitions in history, dropping
    /// the oldest. Defaults to [`DEFAULT_HISTORY_LIMIT`]; `None` keeps
    /// everything and grows with every commit.
    pub history_limit: Option<usize>,
}

impl Default for MachineOptions {
    fn default() -> Self {
        Self {
            pre_hooks: Vec::new(),
            post_hooks: Vec::new(),
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }
}

impl fmt::Debug for MachineOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MachineOptions")
            .field("pre_hooks", &self.pre_hooks.len())
            .field("post_hooks", &self.post_hooks.len())
            .field("history_limit", &self.history_limit)
            .finish()
    }
}

/// Ordered pre and post hook lists.
#[derive(Clone, Default)]
pub struct MiddlewarePipeline {
    pre: Vec<Hook>,
    post: Vec<Hook>,
}

impl MiddlewarePipeline {
    pub fn new(pre: Vec<Hook>, post: Vec<Hook>) -> Self {
        Self { pre, post }
    }

    pub fn run_pre(&self, ctx: &Context, event: &dyn Event) -> Result<(), BoxError> {
        run_all(&self.pre, ctx, event)
    }

    pub fn run_post(&self, ctx: &Context, event: &dyn Event) -> Result<(), BoxError> {
        run_all(&self.post, ctx, event)
    }

    pub fn pre_len(&self) -> usize {
        self.pre.len()
    }

    pub fn post_len(&self) -> usize {
        self.post.len()
    }
}

impl fmt::Debug for MiddlewarePipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MiddlewarePipeline")
            .field("pre", &self.pre.len())
            .field("post", &self.post.len())
            .finish()
    }
}

fn run_all(hooks: &[Hook], ctx: &Context, event: &dyn Event) -> Result<(), BoxError> {
    hooks.iter().try_for_each(|hook| hook(ctx, event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    struct Ping;

    impl Event for Ping {
        fn kind(&self) -> &str {
            "Ping"
        }
    }

    fn recording(log: &Arc<Mutex<Vec<String>>>, name: &'static str) -> Hook {
        let log = Arc::clone(log);
        hook(move |_ctx, event| {
            log.lock().push(format!("{name}:{}", event.kind()));
            Ok(())
        })
    }

    fn failing(message: &'static str) -> Hook {
        hook(move |_ctx, _event| Err(message.into()))
    }

    #[test]
    fn hooks_run_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let pipeline = MiddlewarePipeline::new(
            vec![recording(&log, "pre1"), recording(&log, "pre2")],
            vec![recording(&log, "post1")],
        );
        let ctx = Context::new();

        pipeline.run_pre(&ctx, &Ping).unwrap();
        pipeline.run_post(&ctx, &Ping).unwrap();

        assert_eq!(*log.lock(), vec!["pre1:Ping", "pre2:Ping", "post1:Ping"]);
    }

    #[test]
    fn first_failure_short_circuits_the_phase() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let pipeline = MiddlewarePipeline::new(
            vec![
                recording(&log, "before"),
                failing("rejected"),
                recording(&log, "after"),
            ],
            Vec::new(),
        );

        let err = pipeline.run_pre(&Context::new(), &Ping).unwrap_err();

        assert_eq!(err.to_string(), "rejected");
        assert_eq!(*log.lock(), vec!["before:Ping"]);
    }

    #[test]
    fn empty_pipeline_is_a_no_op() {
        let pipeline = MiddlewarePipeline::default();
        assert!(pipeline.run_pre(&Context::new(), &Ping).is_ok());
        assert!(pipeline.run_post(&Context::new(), &Ping).is_ok());
        assert_eq!((pipeline.pre_len(), pipeline.post_len()), (0, 0));
    }

    #[test]
    fn default_options_are_empty() {
        let options = MachineOptions::default();
        assert!(options.pre_hooks.is_empty());
        assert!(options.post_hooks.is_empty());
        assert_eq!(options.history_limit, Some(DEFAULT_HISTORY_LIMIT));
    }
}
