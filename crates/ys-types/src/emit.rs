//! Serialize an ordered mapping back to YAML with optional per-key comments.

use indexmap::IndexMap;
use serde_yaml::Mapping;

use crate::document::Entries;
use crate::error::EmitError;
use crate::value::Value;

/// Emit `entries` as block YAML in iteration order.
///
/// When `comments` has an entry for a key, it is written as a `#` comment
/// line immediately before that key. Multi-line comments get one `#` per line.
pub fn dump(entries: &Entries, comments: &IndexMap<String, String>) -> Result<String, EmitError> {
    let mut out = String::new();
    for (key, value) in entries {
        if let Some(comment) = comments.get(key) {
            for line in comment.lines() {
                out.push_str("# ");
                out.push_str(line);
                out.push('\n');
            }
        }

        let mut single = Mapping::new();
        single.insert(Value::String(key.clone()), value.clone());
        let text = serde_yaml::to_string(&single).map_err(|source| EmitError::Serialize {
            key: key.clone(),
            source,
        })?;
        out.push_str(&text);
    }
    Ok(out)
}
