//! Render-time placeholder context.

use indexmap::IndexMap;

/// Caller-supplied mapping from placeholder key to replacement text.
///
/// A context is scoped to one render call and may be over-complete: keys
/// never referenced by any fragment are silently ignored. Keys are unique;
/// inserting an existing key overwrites its value in place.
///
/// # Example
///
/// ```
/// use codemosaic_fragments::Context;
///
/// let ctx = Context::new()
///     .with("processing_operation", "normalize_with_threshold")
///     .with("guard_condition", "len(input_data) > self.MAX_BATCH_SIZE");
/// assert_eq!(ctx.get("processing_operation"), Some("normalize_with_threshold"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    values: IndexMap<String, String>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding, consuming the context for chained construction.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a binding, overwriting any existing value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Look up a replacement value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether the context holds a value for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the context is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ctx = Self::new();
        for (key, value) in iter {
            ctx.insert(key, value);
        }
        ctx
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Context {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}
