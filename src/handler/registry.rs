//! Kind-keyed handler storage with explicit capability tags.

use super::Handler;
use crate::core::{BoxError, Context, Event};
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Object-safe view of a [`Handler`] with its event type erased.
trait ErasedHandler: Send + Sync {
    fn event_type(&self) -> TypeId;

    fn event_type_name(&self) -> &'static str;

    /// `None` when `event` is not the handler's event type.
    fn call(&self, ctx: &Context, event: &dyn Any) -> Option<Result<(), BoxError>>;
}

impl<H: Handler> ErasedHandler for H {
    fn event_type(&self) -> TypeId {
        TypeId::of::<H::Event>()
    }

    fn event_type_name(&self) -> &'static str {
        type_name::<H::Event>()
    }

    fn call(&self, ctx: &Context, event: &dyn Any) -> Option<Result<(), BoxError>> {
        event
            .downcast_ref::<H::Event>()
            .map(|event| self.execute(ctx, event))
    }
}

/// A registry entry: a shared handler tagged with the event type it accepts.
///
/// Cheap to clone, so the engine can take it out of the registry and run it
/// without holding the machine's lock.
#[derive(Clone)]
pub struct RegisteredHandler {
    kind: String,
    inner: Arc<dyn ErasedHandler>,
}

impl RegisteredHandler {
    pub fn new<H: Handler>(kind: impl Into<String>, handler: H) -> Self {
        Self {
            kind: kind.into(),
            inner: Arc::new(handler),
        }
    }

    /// The event kind this entry was registered under.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Whether the handler is capable of processing events of type `E`.
    pub fn accepts<E: Event>(&self) -> bool {
        self.inner.event_type() == TypeId::of::<E>()
    }

    /// Type name of the event the handler accepts.
    pub fn event_type_name(&self) -> &'static str {
        self.inner.event_type_name()
    }

    /// Run the handler. `None` means the event is not of the accepted type.
    pub fn execute<E: Event>(&self, ctx: &Context, event: &E) -> Option<Result<(), BoxError>> {
        self.inner.call(ctx, event)
    }
}

impl fmt::Debug for RegisteredHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredHandler")
            .field("kind", &self.kind)
            .field("accepts", &self.event_type_name())
            .finish()
    }
}

/// Mapping from event kind to exactly one handler.
///
/// Inserting under an existing kind replaces the previous entry; the last
/// registration wins.
#[derive(Clone, Debug, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, RegisteredHandler>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handler` for `kind`, returning the entry it replaced.
    pub fn insert<H: Handler>(
        &mut self,
        kind: impl Into<String>,
        handler: H,
    ) -> Option<RegisteredHandler> {
        let entry = RegisteredHandler::new(kind, handler);
        self.handlers.insert(entry.kind.clone(), entry)
    }

    pub fn get(&self, kind: &str) -> Option<&RegisteredHandler> {
        self.handlers.get(kind)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.handlers.contains_key(kind)
    }

    /// Registered kinds, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::handler_fn;

    struct Alpha;

    impl Event for Alpha {
        fn kind(&self) -> &str {
            "Shared"
        }
    }

    struct Beta;

    impl Event for Beta {
        fn kind(&self) -> &str {
            "Shared"
        }
    }

    struct AlphaHandler;

    impl Handler for AlphaHandler {
        type Event = Alpha;

        fn execute(&self, _ctx: &Context, _event: &Alpha) -> Result<(), BoxError> {
            Ok(())
        }
    }

    #[test]
    fn entry_reports_its_capability() {
        let entry = RegisteredHandler::new("Shared", AlphaHandler);

        assert_eq!(entry.kind(), "Shared");
        assert!(entry.accepts::<Alpha>());
        assert!(!entry.accepts::<Beta>());
        assert!(entry.event_type_name().ends_with("Alpha"));
    }

    #[test]
    fn execute_rejects_other_event_types() {
        let entry = RegisteredHandler::new("Shared", AlphaHandler);
        let ctx = Context::new();

        assert!(matches!(entry.execute(&ctx, &Alpha), Some(Ok(()))));
        assert!(entry.execute(&ctx, &Beta).is_none());
    }

    #[test]
    fn insert_replaces_previous_entry() {
        let mut registry = HandlerRegistry::new();

        assert!(registry.insert("Shared", AlphaHandler).is_none());
        let replaced = registry.insert("Shared", handler_fn(|_ctx, _e: &Beta| Ok(())));

        assert!(replaced.is_some_and(|old| old.accepts::<Alpha>()));
        assert_eq!(registry.len(), 1);
        assert!(registry.get("Shared").unwrap().accepts::<Beta>());
    }

    #[test]
    fn lookup_by_kind() {
        let mut registry = HandlerRegistry::new();
        registry.insert("Shared", AlphaHandler);
        registry.insert("Other", handler_fn(|_ctx, _e: &Beta| Ok(())));

        assert!(registry.contains("Shared"));
        assert!(!registry.contains("Missing"));
        assert!(registry.get("Missing").is_none());
        assert_eq!(registry.kinds(), vec!["Other", "Shared"]);
        assert!(!registry.is_empty());
    }
}
