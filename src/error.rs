//! Error types for htmlcheck.
//!
//! This module defines the error types returned by check operations.

use std::path::PathBuf;

/// Error type for check operations.
///
/// Every variant is fatal to the invocation that produced it; there is no
/// partial-result or retry path. Library code only ever returns these --
/// exit-code decisions belong to the binary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required input file does not exist.
    #[error("{} does not exist", path.display())]
    MissingInput {
        /// The path that was checked.
        path: PathBuf,
    },

    /// The checks file is not a JSON array of non-empty strings.
    #[error("invalid checks file: {0}")]
    ChecksFormat(String),

    /// A selector string is not a valid query expression.
    #[error("invalid selector expression: {selector:?}")]
    Selector {
        /// The selector that failed to parse.
        selector: String,
    },

    /// The supplied URL is not a fetchable http(s) URL.
    #[error("not a valid http(s) URL: {0}")]
    InvalidUrl(String),

    /// The remote document could not be retrieved.
    #[error("failed to fetch remote document: {0}")]
    Fetch(#[from] reqwest::Error),

    /// JSON serialization of the result mapping failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// An underlying I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for check operations.
pub type Result<T> = std::result::Result<T, Error>;
