//! Hierarchical merge for yamlstats.
//!
//! Folds an ordered sequence of documents left to right into a single
//! [`MergeState`]. The last document that supplied a *different* value for a
//! key wins, and every step records which document a key's value came from
//! and where it was merely repeated.
//!
//! The merged key set is the key set of the first document. Later documents
//! can change or blank out those keys but never add new ones.

pub mod error;
pub mod provenance;
pub mod state;

pub use error::{MergeError, MergeResult};
pub use provenance::SourcePair;
pub use state::{merge_documents, merge_files, MergeState};
