use indexmap::IndexMap;
use serde::Serialize;

use crate::value::Value;

/// Ordered top-level entries of a document, in source order.
pub type Entries = IndexMap<String, Value>;

/// One parsed YAML document: its top-level entries and where they came from.
///
/// A `Document` is never modified after construction. Keys are unique; the
/// loader rejects source text that repeats a top-level key.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Document {
    origin: String,
    entries: Entries,
}

impl Document {
    /// Build a document from already-parsed entries.
    pub fn new(origin: impl Into<String>, entries: Entries) -> Self {
        Self {
            origin: origin.into(),
            entries,
        }
    }

    /// Build a document from `(key, value)` pairs whose keys are already
    /// unique, such as the entries of another map.
    ///
    /// Unlike [`Document::parse`], repeated keys are not rejected: a later pair
    /// replaces the earlier value and keeps its position. Source text should
    /// go through the loader instead.
    pub fn from_pairs<K, I>(origin: impl Into<String>, pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self::new(
            origin,
            pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        )
    }

    /// The identifier of this document, usually its file path.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn entries(&self) -> &Entries {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Top-level keys in source order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
