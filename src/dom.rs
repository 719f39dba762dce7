//! DOM Operations Adapter
//!
//! Thin adapter over the `dom_query` crate. Keeps the rest of the crate
//! independent of the query engine's API surface: parsing lives here, and
//! selector faults are converted into typed errors instead of panics.

use dom_query::Matcher;

use crate::error::{Error, Result};

// Re-export core types for external use
pub use dom_query::{Document, Selection};

/// Parse HTML text into a queryable document tree.
///
/// The parser is lenient: arbitrary (even malformed) HTML produces a tree.
/// Parsing never fails; a selector query against the result is the first
/// point where an error can occur.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Count the elements matching a CSS selector.
///
/// The selector is parsed explicitly, so only a parse failure surfaces as
/// [`Error::Selector`]; a valid selector with no matches counts as zero.
/// The fault is propagated, never masked (`dom_query`'s panicking `select`
/// is deliberately avoided here, and `try_select` conflates "invalid" with
/// "matched nothing").
pub fn match_count(doc: &Document, selector: &str) -> Result<usize> {
    let matcher = Matcher::new(selector).map_err(|_| Error::Selector {
        selector: selector.to_string(),
    })?;
    Ok(doc.select_matcher(&matcher).length())
}

/// Test whether at least one element matches a CSS selector.
///
/// # Example
///
/// ```rust
/// use htmlcheck::dom;
///
/// let doc = dom::parse(r#"<div><p class="content">text</p></div>"#);
/// assert!(dom::matches(&doc, "p.content")?);
/// assert!(!dom::matches(&doc, "span")?);
/// # Ok::<(), htmlcheck::Error>(())
/// ```
#[inline]
pub fn matches(doc: &Document, selector: &str) -> Result<bool> {
    Ok(match_count(doc, selector)? > 0)
}
