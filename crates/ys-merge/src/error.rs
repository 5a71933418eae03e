//! Error types for the merge crate.

use ys_types::{EmitError, LoadError};

/// Errors that can occur while merging documents.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// No documents were given.
    #[error("nothing to merge: at least one document is required")]
    Empty,

    /// A source document failed to load.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The merged mapping could not be serialized.
    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
