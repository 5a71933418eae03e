//! Foundation types for yamlstats.
//!
//! This crate provides the document model shared by the comparator and the
//! merger, together with the YAML boundary on either side of it: loading text
//! into an ordered [`Document`] and emitting an ordered mapping back to text
//! with per-key comments.
//!
//! # Key Types
//!
//! - [`Document`] -- Ordered top-level key/value mapping plus its origin
//! - [`Value`] -- Any YAML value, compared by semantic deep equality
//! - [`LoadError`] -- Failures while reading or parsing a document
//! - [`EmitError`] -- Failures while serializing a mapping

pub mod document;
pub mod emit;
pub mod error;
pub mod load;
pub mod value;

pub use document::{Document, Entries};
pub use emit::dump;
pub use error::{EmitError, LoadError, LoadResult};
pub use value::{display_value, is_empty_value, Value};
