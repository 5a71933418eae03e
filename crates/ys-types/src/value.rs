//! Value model: equality and display forms for top-level entry values.
//!
//! Values are plain [`serde_yaml::Value`]s. Equality is the parser's semantic
//! equality, so `'x'`, `"x"` and `x` are the same string while `'1'` and `1`
//! are not (one is a string, the other a number).

pub use serde_yaml::Value;

/// Render a value the way it is shown in reports.
///
/// Strings are returned verbatim, without quotes. Everything else is rendered
/// as YAML with the trailing newline removed.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{other:?}")),
    }
}

/// Returns `true` for values that carry no content: null, the empty string,
/// an empty sequence and an empty mapping.
///
/// `false` and `0` are not empty.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Sequence(seq) => seq.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        Value::Tagged(tagged) => is_empty_value(&tagged.value),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
