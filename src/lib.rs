//! # htmlcheck
//!
//! Check an HTML document for the presence of elements matching a list of
//! CSS selectors.
//!
//! Given a document (local file, raw HTML text, or a URL to fetch) and a
//! checks file (a JSON array of selector strings), htmlcheck reports for each
//! selector whether at least one matching element exists. Selectors are
//! sorted lexicographically before evaluation, so serialized reports always
//! have deterministically ordered keys.
//!
//! ## Quick Start
//!
//! ```rust
//! use htmlcheck::check_html;
//!
//! let html = r#"<html><head></head><body><div id="x"></div></body></html>"#;
//! let selectors = vec!["div".to_string(), "span".to_string(), "#x".to_string()];
//!
//! let report = check_html(html, &selectors)?;
//! assert_eq!(report.get("#x"), Some(true));
//! assert_eq!(report.get("div"), Some(true));
//! assert_eq!(report.get("span"), Some(false));
//! # Ok::<(), htmlcheck::Error>(())
//! ```
//!
//! The same evaluation is available from the command line:
//!
//! ```text
//! htmlcheck --checks checks.json --file index.html
//! ```

mod checks;
mod error;
mod evaluate;
mod fetch;

/// DOM operations adapter over the `dom_query` crate.
pub mod dom;

use std::fs;
use std::path::Path;
use std::time::Duration;

// Public API - re-exports
pub use checks::{load_checks, parse_checks};
pub use error::{Error, Result};
pub use evaluate::{evaluate, CheckReport};
pub use fetch::{fetch_document, fetch_to_file, DEFAULT_TIMEOUT_SECS};

/// Default checks file path.
pub const CHECKS_FILE_DEFAULT: &str = "checks.json";

/// Default path for the intermediate artifact persisted after a URL fetch.
pub const TEMP_FILE_DEFAULT: &str = "temp.html";

/// Check raw HTML text against a selector list.
///
/// Parses the document and runs the evaluator. See [`evaluate`] for the
/// ordering and duplicate-selector semantics.
pub fn check_html(html: &str, selectors: &[String]) -> Result<CheckReport> {
    let doc = dom::parse(html);
    evaluate(&doc, selectors)
}

/// Check a local HTML file against a checks file.
///
/// This is the library-level entry point mirroring the CLI's `--file` mode:
/// both paths must exist, the checks file must be a JSON array of selector
/// strings, and the result maps each selector to its presence in the
/// document.
///
/// # Errors
///
/// [`Error::MissingInput`] if either path does not exist; otherwise any
/// checks-format, selector, or I/O error from the underlying steps.
pub fn check_file(html_path: &Path, checks_path: &Path) -> Result<CheckReport> {
    if !html_path.exists() {
        return Err(Error::MissingInput {
            path: html_path.to_path_buf(),
        });
    }
    let selectors = load_checks(checks_path)?;
    let html = fs::read_to_string(html_path)?;
    check_html(&html, &selectors)
}

/// Fetch a remote HTML document and check it against a checks file.
///
/// The fetch blocks until it completes or times out; the body is persisted
/// to [`TEMP_FILE_DEFAULT`] and then checked like a local file. A fetch
/// failure aborts the run before any evaluation happens.
pub fn check_url(url: &str, checks_path: &Path, timeout: Duration) -> Result<CheckReport> {
    check_url_with_artifact(url, Path::new(TEMP_FILE_DEFAULT), checks_path, timeout)
}

/// Like [`check_url`], with an explicit intermediate artifact path.
pub fn check_url_with_artifact(
    url: &str,
    artifact_path: &Path,
    checks_path: &Path,
    timeout: Duration,
) -> Result<CheckReport> {
    // Validate the checks file before touching the network.
    let selectors = load_checks(checks_path)?;
    fetch::fetch_to_file(url, artifact_path, timeout)?;
    let html = fs::read_to_string(artifact_path)?;
    check_html(&html, &selectors)
}
