//! GitHub hosting API abstraction layer.
//!
//! The primary abstraction is the [ReleaseHost] trait, which defines the two
//! side-effecting operations this tool performs against the hosting
//! platform. The concrete implementations include:
//!
//! - [api::GitHubClient]: a real implementation over the GitHub REST API
//! - [mock::MockHost]: a recording mock implementation for testing
//!
//! Workflow code depends on the trait rather than a concrete client so tests
//! can substitute fakes without opening sockets.

pub mod api;
pub mod mock;

pub use api::GitHubClient;
pub use mock::MockHost;

use serde::Deserialize;

use crate::error::Result;

/// Request to merge a pull request with the merge-commit method
#[derive(Debug, Clone, PartialEq)]
pub struct MergeRequest {
    /// Pull request number
    pub number: u64,
    /// Pull request title
    pub title: String,
    /// Pull request description, carried verbatim as the commit message so
    /// issue-closing references survive the merge
    pub body: String,
}

impl MergeRequest {
    /// Commit title generated for the merge commit
    pub fn commit_title(&self) -> String {
        format!("Merge PR #{} - {}", self.number, self.title)
    }
}

/// Request to publish a tagged release for a version
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseRequest {
    /// The released version string (without the `v` prefix)
    pub version: String,
}

impl ReleaseRequest {
    /// Tag requested for the release
    pub fn tag_name(&self) -> String {
        format!("v{}", self.version)
    }

    /// Human-readable release name
    pub fn release_name(&self) -> String {
        format!("Release v{}", self.version)
    }

    /// Auto-generated changelog body embedding the version
    pub fn changelog_body(&self) -> String {
        format!("Changelog:\n- Updated to version {}", self.version)
    }
}

/// Details returned by a successful merge call (HTTP 200)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MergeOutcome {
    #[serde(default)]
    pub sha: Option<String>,
    #[serde(default)]
    pub merged: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Details returned by a successful release creation (HTTP 201)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReleaseOutcome {
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Hosting-platform operations with external consequence.
///
/// Both operations are single requests with no retry; any status other than
/// the exact success code is an `Api` error carrying the status and raw
/// response body.
pub trait ReleaseHost: Send + Sync {
    /// Merge a pull request. Success is exactly HTTP 200.
    fn merge_pull_request(&self, request: &MergeRequest) -> Result<MergeOutcome>;

    /// Create a tagged release. Success is exactly HTTP 201.
    fn create_release(&self, request: &ReleaseRequest) -> Result<ReleaseOutcome>;
}
