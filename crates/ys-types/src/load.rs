//! YAML loading: source text to [`Document`].
//!
//! Only the top level is interpreted. Each top-level value is kept whole as a
//! [`Value`]; nested structure is never walked. A repeated top-level key is
//! reported as [`LoadError::DuplicateKey`] instead of silently overwriting the
//! earlier entry.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use tracing::debug;

use crate::document::{Document, Entries};
use crate::error::{LoadError, LoadResult};
use crate::value::{display_value, Value};

impl Document {
    /// Parse YAML source text into a document named `origin`.
    ///
    /// Empty and comment-only text yields an empty document. Non-string
    /// scalar keys are converted to their display form (`1:` becomes `"1"`);
    /// two distinct keys with the same display form, like `1` and `'1'`, are
    /// rejected with [`LoadError::KeyCollision`].
    pub fn parse(origin: impl Into<String>, text: &str) -> LoadResult<Self> {
        let origin = origin.into();
        if is_blank(text) {
            return Ok(Document::new(origin, Entries::new()));
        }

        let top: TopLevel = serde_yaml::from_str(text).map_err(|source| LoadError::Syntax {
            origin: origin.clone(),
            source,
        })?;

        if let Some(key) = top.duplicate {
            return Err(LoadError::DuplicateKey { key, origin });
        }
        if let Some(key) = top.collision {
            return Err(LoadError::KeyCollision { key, origin });
        }

        debug!(origin = %origin, keys = top.entries.len(), "parsed document");
        Ok(Document::new(origin, top.entries))
    }

    /// Read and parse the file at `path`. The path's display form becomes the
    /// document's origin.
    pub fn load(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path.display().to_string(), &text)
    }
}

/// Text with nothing but whitespace and comments.
fn is_blank(text: &str) -> bool {
    text.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

/// Top-level mapping as deserialized, plus the first key seen twice and the
/// first pair of distinct keys that share a string form.
#[derive(Default)]
struct TopLevel {
    entries: Entries,
    duplicate: Option<String>,
    collision: Option<String>,
}

impl<'de> Deserialize<'de> for TopLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TopLevelVisitor)
    }
}

struct TopLevelVisitor;

impl<'de> Visitor<'de> for TopLevelVisitor {
    type Value = TopLevel;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a mapping of top-level keys")
    }

    fn visit_unit<E: de::Error>(self) -> Result<TopLevel, E> {
        Ok(TopLevel::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<TopLevel, E> {
        Ok(TopLevel::default())
    }

    fn visit_map<A>(self, mut map: A) -> Result<TopLevel, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut top = TopLevel::default();
        let mut seen = HashSet::new();
        while let Some(raw) = map.next_key::<Value>()? {
            let value: Value = map.next_value()?;
            let key = display_value(&raw);
            // keep consuming so syntax errors later in the text still win
            if !seen.insert(raw) {
                top.duplicate.get_or_insert(key);
                continue;
            }
            if top.entries.contains_key(&key) {
                top.collision.get_or_insert(key);
                continue;
            }
            top.entries.insert(key, value);
        }
        Ok(top)
    }
}
