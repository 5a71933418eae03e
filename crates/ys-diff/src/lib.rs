//! Pairwise comparison of two YAML documents.
//!
//! Classifies the top-level keys of two [`Document`](ys_types::Document)s
//! into keys with identical values, keys with differing values, and keys
//! present on one side only. Values are compared with a single deep-equality
//! test per key; nested structure is never walked.
//!
//! # Key Types
//!
//! - [`ComparisonResult`] -- Duplicates, differences, and additional keys
//! - [`CompareOptions`] -- Which passes to run and how empty values are treated

pub mod compare;
pub mod result;

pub use compare::{compare, compare_files, CompareOptions};
pub use result::{AdditionalKeys, ComparisonResult, Difference, Duplicate};
