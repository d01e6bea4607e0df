//! Request-scoped context and context extractors
//!
//! A [`Context`] travels with a request and carries values that logging can
//! turn into fields. Extractors registered on the builder run against the
//! context passed to each logging call.

use super::field::Fields;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Derives fields from a [`Context`].
///
/// Extractors may panic; the panic is contained and reported on the record
/// instead of unwinding into the caller.
pub type ContextExtractor = Arc<dyn Fn(&Context) -> Fields + Send + Sync>;

/// Wrap a closure as a [`ContextExtractor`]
pub fn extractor<F>(f: F) -> ContextExtractor
where
    F: Fn(&Context) -> Fields + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Immutable, cheaply clonable key/value store scoped to one request.
///
/// Deriving a context with [`Context::with_value`] never alters the parent.
///
/// ```
/// use rust_logger_facade::Context;
///
/// let parent = Context::background().with_value("request_id", "abc-123");
/// let child = parent.with_value("user_id", 42u64);
///
/// assert_eq!(child.value::<&str>("request_id"), Some(&"abc-123"));
/// assert_eq!(child.value::<u64>("user_id"), Some(&42));
/// assert!(parent.value::<u64>("user_id").is_none());
/// ```
#[derive(Clone, Default)]
pub struct Context {
    values: Arc<HashMap<String, Arc<dyn Any + Send + Sync>>>,
}

impl Context {
    /// Empty root context
    pub fn background() -> Self {
        Self::default()
    }

    /// Derive a context carrying `value` under `key`
    #[must_use]
    pub fn with_value<K, V>(&self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Any + Send + Sync,
    {
        let mut values = (*self.values).clone();
        values.insert(key.into(), Arc::new(value));
        Self {
            values: Arc::new(values),
        }
    }

    /// Look up `key`, returning `None` when absent or of another type
    pub fn value<V: Any>(&self, key: &str) -> Option<&V> {
        self.values.get(key)?.downcast_ref::<V>()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.values.keys().collect();
        keys.sort();
        f.debug_struct("Context").field("keys", &keys).finish()
    }
}
