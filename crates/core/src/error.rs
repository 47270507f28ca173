//! Error types for claimbook operations.
//!
//! This module defines the main error type [`ClaimbookError`] which represents
//! all possible errors that can occur while loading claim data, rendering
//! documents, and updating the navigation index.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for document generation.
///
/// Every variant is fatal: the batch either runs to completion or aborts on
/// the first failure. A missing bias rating is deliberately *not* represented
/// here — it is handled with fallback values during rendering.
#[derive(Error, Debug)]
pub enum ClaimbookError {
    /// A required input file does not exist.
    ///
    /// The claims file and ratings file are required. The navigation index
    /// file is optional and its absence is handled before this error is
    /// ever constructed.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// A JSON input could not be deserialized.
    #[error("Failed to parse JSON from {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A publication date was present but not a valid ISO date.
    ///
    /// Only the literal string `"None"` marks an absent date; anything else
    /// must parse.
    #[error("Malformed ISO date: {value}")]
    MalformedDate {
        value: String,
        #[source]
        source: time::error::Parse,
    },

    /// A claim references a source URL with no matching article in its cluster.
    #[error("Claim source has no matching article in cluster: {link}")]
    UnmatchedClaimSource { link: String },

    /// File or directory I/O errors.
    ///
    /// Wraps standard I/O errors for document writes, directory creation,
    /// and navigation index persistence.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for ClaimbookError.
pub type Result<T> = std::result::Result<T, ClaimbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let err = ClaimbookError::FileNotFound(PathBuf::from("claims.json"));
        assert!(err.to_string().contains("claims.json"));
    }

    #[test]
    fn test_unmatched_claim_source_display() {
        let err = ClaimbookError::UnmatchedClaimSource { link: "https://example.com/story".to_string() };
        assert!(err.to_string().contains("https://example.com/story"));
    }

    #[test]
    fn test_json_error_carries_path() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ClaimbookError::Json { path: PathBuf::from("ratings.json"), source };
        assert!(err.to_string().contains("ratings.json"));
    }
}
