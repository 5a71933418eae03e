//! Result of comparing two documents.

use serde::Serialize;
use ys_types::Value;

/// A key whose value is equal in both documents.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Duplicate {
    pub key: String,
    pub value: Value,
}

/// A key present in both documents with unequal values, captured in display form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Difference {
    pub key: String,
    pub value_in_a: String,
    pub value_in_b: String,
}

/// Keys present in one document and entirely absent from the other.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AdditionalKeys {
    /// Keys only in the first document, in its order.
    pub only_in_a: Vec<String>,
    /// Keys only in the second document, in its order.
    pub only_in_b: Vec<String>,
}

impl AdditionalKeys {
    pub fn is_empty(&self) -> bool {
        self.only_in_a.is_empty() && self.only_in_b.is_empty()
    }
}

/// The outcome of one pairwise comparison.
///
/// `duplicates` and `differences` follow the key order of the second
/// document. A key appears in at most one of the four lists.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// Origin of the first document.
    pub origin_a: String,
    /// Origin of the second document.
    pub origin_b: String,
    pub duplicates: Vec<Duplicate>,
    pub differences: Vec<Difference>,
    pub additional: AdditionalKeys,
}

impl ComparisonResult {
    /// Returns `true` if no section has any rows.
    pub fn is_empty(&self) -> bool {
        self.duplicates.is_empty() && self.differences.is_empty() && self.additional.is_empty()
    }

    /// Returns `true` if `key` was reported as a duplicate.
    pub fn is_duplicate(&self, key: &str) -> bool {
        self.duplicates.iter().any(|d| d.key == key)
    }

    /// Returns the difference row for `key`, if any.
    pub fn difference(&self, key: &str) -> Option<&Difference> {
        self.differences.iter().find(|d| d.key == key)
    }
}
