//! The comparison passes.
//!
//! Every pass walks the keys of document **b** in its own order, so the rows
//! of the duplicates and differences sections follow b. Keys that exist only
//! in one document are never duplicates or differences; they are reported by
//! the additional-keys pass alone.

use std::path::Path;

use tracing::debug;
use ys_types::{display_value, is_empty_value, Document, LoadResult};

use crate::result::{AdditionalKeys, ComparisonResult, Difference, Duplicate};

/// Which comparison passes to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompareOptions {
    /// Run the differences pass.
    pub show_differences: bool,
    /// Run the additional-keys pass.
    pub show_additional: bool,
    /// Skip keys in the differences pass when either value is empty (null,
    /// `""`, `[]` or `{}`). Such keys then appear in no section at all.
    pub treat_empty_as_absent: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            show_differences: false,
            show_additional: false,
            treat_empty_as_absent: true,
        }
    }
}

impl CompareOptions {
    /// All passes enabled, empty values treated as absent.
    pub fn all() -> Self {
        Self {
            show_differences: true,
            show_additional: true,
            ..Default::default()
        }
    }
}

/// Compare two documents.
pub fn compare(a: &Document, b: &Document, options: &CompareOptions) -> ComparisonResult {
    let mut result = ComparisonResult {
        origin_a: a.origin().to_string(),
        origin_b: b.origin().to_string(),
        ..Default::default()
    };

    for (key, vb) in b.entries() {
        let Some(va) = a.get(key) else {
            continue;
        };

        if va == vb {
            result.duplicates.push(Duplicate {
                key: key.clone(),
                value: vb.clone(),
            });
            continue;
        }

        if !options.show_differences {
            continue;
        }
        if options.treat_empty_as_absent && (is_empty_value(va) || is_empty_value(vb)) {
            continue;
        }
        result.differences.push(Difference {
            key: key.clone(),
            value_in_a: display_value(va),
            value_in_b: display_value(vb),
        });
    }

    if options.show_additional {
        result.additional = AdditionalKeys {
            only_in_a: a.keys().filter(|k| !b.contains_key(k)).map(String::from).collect(),
            only_in_b: b.keys().filter(|k| !a.contains_key(k)).map(String::from).collect(),
        };
    }

    debug!(
        a = %a.origin(),
        b = %b.origin(),
        duplicates = result.duplicates.len(),
        differences = result.differences.len(),
        only_in_a = result.additional.only_in_a.len(),
        only_in_b = result.additional.only_in_b.len(),
        "compared documents"
    );
    result
}

/// Load both files and compare them.
///
/// A load failure on either side aborts the comparison; no partial result is
/// produced.
pub fn compare_files(
    a: impl AsRef<Path>,
    b: impl AsRef<Path>,
    options: &CompareOptions,
) -> LoadResult<ComparisonResult> {
    let a = Document::load(a)?;
    let b = Document::load(b)?;
    Ok(compare(&a, &b, options))
}
