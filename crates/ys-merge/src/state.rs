//! The merge state and the fold step.

use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info};
use ys_types::{Document, Entries, Value};

use crate::error::{MergeError, MergeResult};
use crate::provenance::SourcePair;

/// The running result of folding documents together.
///
/// `data`, `sources` and `duplicated` always hold the same key set, in the
/// key order of the first document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MergeState {
    data: Entries,
    sources: IndexMap<String, String>,
    duplicated: IndexMap<String, Vec<SourcePair>>,
}

impl MergeState {
    /// Start a merge from its first document. Every key is attributed to it
    /// and has an empty duplication history.
    pub fn new(first: &Document) -> Self {
        let origin = first.origin().to_string();
        Self {
            data: first.entries().clone(),
            sources: first.keys().map(|k| (k.to_string(), origin.clone())).collect(),
            duplicated: first.keys().map(|k| (k.to_string(), Vec::new())).collect(),
        }
    }

    /// Fold one more document into the state, returning the new state.
    ///
    /// Only keys already in the state are visited. For each one, the value in
    /// `next` (null when `next` omits the key) either replaces the current
    /// value and takes over its attribution, or, when equal, extends the
    /// key's duplication history with `(current source, next)`.
    ///
    /// Omitting a key is an override: merging `{a: 1}` with `{}` leaves
    /// `a: null`, not `a: 1`.
    pub fn combine(&self, next: &Document) -> Self {
        let mut merged = self.clone();
        let mut overridden = 0usize;
        let mut repeated = 0usize;

        for (key, current) in &self.data {
            let incoming = next.get(key).cloned().unwrap_or(Value::Null);
            if incoming != *current {
                merged.data.insert(key.clone(), incoming);
                merged.sources.insert(key.clone(), next.origin().to_string());
                overridden += 1;
            } else {
                let pair = SourcePair {
                    earlier: self.source_of(key).unwrap_or_default().to_string(),
                    later: next.origin().to_string(),
                };
                merged.duplicated.entry(key.clone()).or_default().push(pair);
                repeated += 1;
            }
        }

        let ignored = next.keys().filter(|k| !self.data.contains_key(*k)).count();
        debug!(
            origin = %next.origin(),
            overridden,
            repeated,
            ignored,
            "folded document"
        );
        merged
    }

    /// The merged mapping.
    pub fn data(&self) -> &Entries {
        &self.data
    }

    /// Key → origin of the document that supplied its current value.
    pub fn sources(&self) -> &IndexMap<String, String> {
        &self.sources
    }

    /// Key → every `(earlier, later)` pair at which its value was repeated.
    pub fn duplicated(&self) -> &IndexMap<String, Vec<SourcePair>> {
        &self.duplicated
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn source_of(&self, key: &str) -> Option<&str> {
        self.sources.get(key).map(String::as_str)
    }

    /// Duplication history of `key`; empty for unknown keys.
    pub fn history(&self, key: &str) -> &[SourcePair] {
        self.duplicated.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Fold `documents` left to right.
pub fn merge_documents<'a, I>(documents: I) -> MergeResult<MergeState>
where
    I: IntoIterator<Item = &'a Document>,
{
    let mut documents = documents.into_iter();
    let first = documents.next().ok_or(MergeError::Empty)?;
    let state = documents.fold(MergeState::new(first), |state, next| state.combine(next));
    info!(keys = state.len(), "merge complete");
    Ok(state)
}

/// Load every file, then fold them in the given order.
///
/// All files are loaded before the fold starts, so a malformed file anywhere
/// in the list aborts the merge without producing a result.
pub fn merge_files<P: AsRef<Path>>(paths: &[P]) -> MergeResult<MergeState> {
    let documents = paths
        .iter()
        .map(Document::load)
        .collect::<Result<Vec<_>, _>>()?;
    merge_documents(&documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn doc(origin: &str, text: &str) -> Document {
        Document::parse(origin, text).unwrap()
    }

    fn pair(earlier: &str, later: &str) -> SourcePair {
        SourcePair {
            earlier: earlier.into(),
            later: later.into(),
        }
    }

    #[test]
    fn initial_state_attributes_everything_to_first_document() {
        let state = MergeState::new(&doc("base.yaml", "a: 1\nb: 2\n"));
        assert_eq!(state.source_of("a"), Some("base.yaml"));
        assert_eq!(state.source_of("b"), Some("base.yaml"));
        assert!(state.history("a").is_empty());
        assert_eq!(state.duplicated().len(), 2);
    }

    #[test]
    fn last_different_value_wins() {
        let docs = [
            doc("d1", "name: A\n"),
            doc("d2", "name: A\n"),
            doc("d3", "name: B\n"),
        ];
        let state = merge_documents(&docs).unwrap();
        assert_eq!(state.get("name"), Some(&Value::from("B")));
        assert_eq!(state.source_of("name"), Some("d3"));
        assert_eq!(state.history("name"), &[pair("d1", "d2")]);
    }

    #[test]
    fn history_records_current_source_not_first() {
        let docs = [
            doc("d1", "name: A\n"),
            doc("d2", "name: B\n"),
            doc("d3", "name: B\n"),
            doc("d4", "name: B\n"),
        ];
        let state = merge_documents(&docs).unwrap();
        assert_eq!(state.source_of("name"), Some("d2"));
        assert_eq!(state.history("name"), &[pair("d2", "d3"), pair("d2", "d4")]);
    }

    #[test]
    fn omitted_key_is_overridden_to_null() {
        let state = merge_documents(&[doc("d1", "a: 1\n"), doc("d2", "")]).unwrap();
        assert_eq!(state.get("a"), Some(&Value::Null));
        assert_eq!(state.source_of("a"), Some("d2"));
        assert!(state.history("a").is_empty());
    }

    #[test]
    fn null_then_omitted_counts_as_repeat() {
        let state = merge_documents(&[doc("d1", "a: null\n"), doc("d2", "b: 1\n")]).unwrap();
        assert_eq!(state.get("a"), Some(&Value::Null));
        assert_eq!(state.source_of("a"), Some("d1"));
        assert_eq!(state.history("a"), &[pair("d1", "d2")]);
    }

    #[test]
    fn new_keys_in_later_documents_are_ignored() {
        let state = merge_documents(&[doc("d1", "a: 1\n"), doc("d2", "a: 2\nextra: x\n")]).unwrap();
        assert!(!state.is_empty());
        let keys: Vec<_> = state.keys().collect();
        assert_eq!(keys, vec!["a"]);
        assert!(state.get("extra").is_none());
        assert!(state.source_of("extra").is_none());
    }

    #[test]
    fn key_order_follows_first_document() {
        let state = merge_documents(&[doc("d1", "z: 1\na: 1\nm: 1\n"), doc("d2", "a: 2\nm: 2\nz: 2\n")])
            .unwrap();
        let keys: Vec<_> = state.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn combine_does_not_touch_previous_state() {
        let d1 = doc("d1", "a: 1\n");
        let before = MergeState::new(&d1);
        let after = before.combine(&doc("d2", "a: 2\n"));
        assert_eq!(before.get("a"), Some(&Value::from(1)));
        assert_eq!(before.source_of("a"), Some("d1"));
        assert_eq!(after.get("a"), Some(&Value::from(2)));
    }

    #[test]
    fn single_document_merge() {
        let state = merge_documents(&[doc("only", "a: 1\n")]).unwrap();
        assert_eq!(state, MergeState::new(&doc("only", "a: 1\n")));
    }

    #[test]
    fn empty_first_document_gives_empty_merge() {
        let state = merge_documents(&[doc("d1", ""), doc("d2", "a: 1\n")]).unwrap();
        assert!(state.is_empty());
        assert_eq!(state.len(), 0);
    }

    #[test]
    fn empty_input_is_an_error() {
        let docs: Vec<Document> = Vec::new();
        assert!(matches!(merge_documents(&docs), Err(MergeError::Empty)));
    }

    #[test]
    fn merge_files_aborts_on_malformed_input() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.yaml");
        let bad = dir.path().join("bad.yaml");
        std::fs::write(&good, "name: A\n").unwrap();
        std::fs::write(&bad, "name: A\nname: B\n").unwrap();

        let err = merge_files(&[&good, &bad]).unwrap_err();
        match err {
            MergeError::Load(load) => assert_eq!(load.duplicate_key(), Some("name")),
            other => panic!("expected load error, got {other:?}"),
        }
    }

    #[test]
    fn merge_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("base.yaml");
        let prod = dir.path().join("prod.yaml");
        std::fs::write(&base, "host: localhost\nport: 80\n").unwrap();
        std::fs::write(&prod, "host: example.com\nport: 80\n").unwrap();

        let state = merge_files(&[&base, &prod]).unwrap();
        assert_eq!(state.get("host"), Some(&Value::from("example.com")));
        assert_eq!(state.source_of("host"), Some(prod.display().to_string().as_str()));
        assert_eq!(state.history("port").len(), 1);
    }

    fn value_strategy() -> impl Strategy<Value = Value> {
        prop_oneof![(0i64..3).prop_map(Value::from), Just(Value::Null)]
    }

    fn docs_strategy() -> impl Strategy<Value = Vec<Document>> {
        prop::collection::vec(prop::collection::btree_map("[a-e]", value_strategy(), 0..5), 1..5)
            .prop_map(|maps| {
                maps.into_iter()
                    .enumerate()
                    .map(|(i, m)| Document::from_pairs(format!("d{i}"), m))
                    .collect()
            })
    }

    proptest! {
        #[test]
        fn merged_key_set_is_first_document_key_set(docs in docs_strategy()) {
            let state = merge_documents(&docs).unwrap();
            let merged: Vec<&str> = state.keys().collect();
            let first: Vec<&str> = docs[0].keys().collect();
            prop_assert_eq!(merged, first);
            prop_assert_eq!(state.sources().len(), state.len());
            prop_assert_eq!(state.duplicated().len(), state.len());
        }

        #[test]
        fn folding_the_same_document_twice_is_idempotent(docs in docs_strategy()) {
            let once = merge_documents(&docs).unwrap();
            let last = docs.last().unwrap();
            let twice = once.combine(last);

            prop_assert_eq!(twice.data(), once.data());
            prop_assert_eq!(twice.sources(), once.sources());
            for key in once.keys() {
                prop_assert_eq!(twice.history(key).len(), once.history(key).len() + 1);
            }
        }
    }
}
