//! Provenance output: source comments for the merged text and the
//! duplication history report.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use ys_types::dump;

use crate::error::MergeResult;
use crate::state::MergeState;

/// Two documents in a fold where a key's value stayed the same.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SourcePair {
    /// The document that supplied the value at that point.
    pub earlier: String,
    /// The document that repeated it.
    pub later: String,
}

impl fmt::Display for SourcePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.earlier, self.later)
    }
}

impl MergeState {
    /// One comment per key naming the document that supplied its value.
    pub fn comments_by_key(&self) -> IndexMap<String, String> {
        self.sources().clone()
    }

    /// Serialize the merged mapping as YAML. With `annotate_source`, each key
    /// is preceded by a `# <origin>` comment.
    pub fn as_text(&self, annotate_source: bool) -> MergeResult<String> {
        let comments = if annotate_source {
            self.comments_by_key()
        } else {
            IndexMap::new()
        };
        Ok(dump(self.data(), &comments)?)
    }

    /// Keys whose value was repeated at least once, with their history.
    pub fn duplications(&self) -> impl Iterator<Item = (&str, &[SourcePair])> {
        self.duplicated()
            .iter()
            .filter(|(_, pairs)| !pairs.is_empty())
            .map(|(key, pairs)| (key.as_str(), pairs.as_slice()))
    }
}
