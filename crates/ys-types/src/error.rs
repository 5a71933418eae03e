//! Error types for loading and emitting documents.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while turning source text into a [`Document`](crate::Document).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The same top-level key was declared more than once in one document.
    #[error("duplicate key `{key}` in {origin}")]
    DuplicateKey { key: String, origin: String },

    /// Two different top-level keys, such as `1` and `'1'`, have the same
    /// string form and cannot both be kept.
    #[error("keys in {origin} collide as `{key}` once converted to strings")]
    KeyCollision { key: String, origin: String },

    /// The text is not valid YAML, or its top level is not a mapping.
    #[error("invalid YAML in {origin}: {source}")]
    Syntax {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },
}

impl LoadError {
    /// The duplicated key, if this is a [`LoadError::DuplicateKey`].
    pub fn duplicate_key(&self) -> Option<&str> {
        match self {
            Self::DuplicateKey { key, .. } => Some(key),
            _ => None,
        }
    }
}

/// Convenience alias for load results.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors produced while serializing a mapping back to YAML.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("cannot serialize `{key}`: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_yaml::Error,
    },
}
