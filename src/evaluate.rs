//! Check evaluation.
//!
//! The evaluator takes a parsed document and a selector list, sorts the list
//! lexicographically, and records for each selector whether at least one
//! matching element exists. The sorted order is preserved in the output
//! mapping, so serialized reports always have lexicographically ordered keys.

use indexmap::IndexMap;
use serde::Serialize;

use crate::dom::{self, Document};
use crate::error::Result;

/// Result of a check run: an ordered selector -> presence mapping.
///
/// Iteration and serialization order is the lexicographically sorted order of
/// the input selectors. Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CheckReport(IndexMap<String, bool>);

impl CheckReport {
    /// Presence result for a selector, if it was part of the check run.
    #[must_use]
    pub fn get(&self, selector: &str) -> Option<bool> {
        self.0.get(selector).copied()
    }

    /// Number of distinct selectors in the report.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the check run had no selectors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(selector, present)` entries in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Render the report as pretty-printed JSON with 4-space indentation.
    ///
    /// An empty report renders as `{}`.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json output is valid UTF-8.
        String::from_utf8(buf).map_err(|e| {
            crate::Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }
}

impl<'a> IntoIterator for &'a CheckReport {
    type Item = (&'a String, &'a bool);
    type IntoIter = indexmap::map::Iter<'a, String, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Evaluate a selector list against a parsed document.
///
/// The input list is not mutated; a sorted copy drives evaluation. Each
/// selector is queried read-only against the tree and mapped to `true` when
/// the match count is greater than zero. Duplicate selectors overwrite their
/// own earlier entry with an identical value, so the report carries exactly
/// one entry per distinct selector.
///
/// # Errors
///
/// [`crate::Error::Selector`] if any selector is not a valid query
/// expression. The fault aborts the whole run; no partial report is returned.
pub fn evaluate(doc: &Document, selectors: &[String]) -> Result<CheckReport> {
    let mut sorted: Vec<&str> = selectors.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    let mut results = IndexMap::with_capacity(sorted.len());
    for selector in sorted {
        let present = dom::matches(doc, selector)?;
        results.insert(selector.to_string(), present);
    }

    Ok(CheckReport(results))
}
