//! Remote document retrieval.
//!
//! Fetching is a blocking call that completes -- successfully or with a
//! propagated failure -- before any evaluation runs. A fetched body is
//! persisted to an intermediate artifact path and read back like any local
//! file, which keeps the file and URL code paths identical downstream.

use std::fs;
use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Default timeout for remote fetches, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Validate that `url` is a well-formed http(s) URL.
fn validate_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(Error::InvalidUrl(format!(
            "{url}: unsupported scheme {:?}",
            parsed.scheme()
        )));
    }
    Ok(parsed)
}

/// Fetch a remote HTML document, returning the response body as text.
///
/// Blocks until the transfer completes or `timeout` expires. Non-success
/// HTTP statuses are treated as fetch failures.
pub fn fetch_document(url: &str, timeout: Duration) -> Result<String> {
    let parsed = validate_url(url)?;
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;
    let response = client.get(parsed).send()?.error_for_status()?;
    let body = response.text()?;
    log::info!("Read {url}");
    Ok(body)
}

/// Fetch a remote document and persist it to `path`.
///
/// The artifact at `path` is overwritten only after a complete, successful
/// fetch; a failed fetch aborts the run instead of leaving the caller to
/// read a stale copy.
pub fn fetch_to_file(url: &str, path: &Path, timeout: Duration) -> Result<()> {
    let body = fetch_document(url, timeout)?;
    fs::write(path, body.as_bytes())?;
    log::debug!("Wrote fetched document to {}", path.display());
    Ok(())
}
