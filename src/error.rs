use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for pr-publish operations
///
/// Every variant is terminal for a run: the workflow returns the first error
/// it hits and the binary maps it to a non-zero exit.
#[derive(Error, Debug)]
pub enum PrPublishError {
    #[error("Invalid semantic version: {0}")]
    InvalidVersion(String),

    #[error("PR version ({pr}) must be greater than main version ({main})")]
    NonIncreasing { pr: String, main: String },

    #[error("Invalid version bump: {0}")]
    BadBump(String),

    #[error("Metadata file is missing: {0}")]
    FileMissing(PathBuf),

    #[error("Required field '{0}' is missing in library metadata")]
    FieldMissing(String),

    #[error("Invalid dependency format: {0}")]
    BadDependencyName(String),

    #[error("Code style validation failed: {0}")]
    LintFailed(String),

    #[error("GitHub API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Convenience type alias for Results in pr-publish
pub type Result<T> = std::result::Result<T, PrPublishError>;

impl PrPublishError {
    /// Create an invalid-version error with context
    pub fn invalid_version(msg: impl Into<String>) -> Self {
        PrPublishError::InvalidVersion(msg.into())
    }

    /// Create a bad-bump error with context
    pub fn bad_bump(msg: impl Into<String>) -> Self {
        PrPublishError::BadBump(msg.into())
    }

    /// Create a lint failure carrying the tool's diagnostic text
    pub fn lint(msg: impl Into<String>) -> Self {
        PrPublishError::LintFailed(msg.into())
    }

    /// Create an API error from a response status and raw body
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        PrPublishError::Api {
            status,
            body: body.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        PrPublishError::Config(msg.into())
    }
}
