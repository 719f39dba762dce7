//! Checks file loading.
//!
//! A checks file is a JSON array of CSS selector strings, e.g.
//! `["h1", ".navigation", "#main"]`. The list is read once per invocation and
//! treated as read-only; ordering is normalized later by the evaluator.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};

/// Load a selector list from a checks file.
///
/// Returns the selectors in file order (the evaluator sorts its own copy).
/// Duplicates are permitted and preserved.
///
/// # Errors
///
/// - [`Error::MissingInput`] if `path` does not exist.
/// - [`Error::ChecksFormat`] if the file is not a JSON array of non-empty
///   strings.
pub fn load_checks(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(Error::MissingInput {
            path: path.to_path_buf(),
        });
    }
    let raw = fs::read_to_string(path)?;
    parse_checks(&raw)
}

/// Parse checks file contents.
///
/// Shape-checks the document at the value level so diagnostics name what was
/// actually found ("expected a JSON array, found object") rather than a
/// serde type mismatch.
pub fn parse_checks(raw: &str) -> Result<Vec<String>> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| Error::ChecksFormat(e.to_string()))?;

    let Some(items) = value.as_array() else {
        return Err(Error::ChecksFormat(format!(
            "expected a JSON array, found {}",
            json_type_name(&value)
        )));
    };

    let mut selectors = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Some(selector) = item.as_str() else {
            return Err(Error::ChecksFormat(format!(
                "element {index} is not a string (found {})",
                json_type_name(item)
            )));
        };
        if selector.is_empty() {
            return Err(Error::ChecksFormat(format!(
                "element {index} is an empty selector"
            )));
        }
        selectors.push(selector.to_string());
    }

    Ok(selectors)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
