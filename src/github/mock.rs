use std::sync::Mutex;

use super::{MergeOutcome, MergeRequest, ReleaseHost, ReleaseOutcome, ReleaseRequest};
use crate::error::{PrPublishError, Result};

/// Mock release host for testing without network access.
///
/// Records every request it receives; individual operations can be
/// programmed to fail with a given status and body.
pub struct MockHost {
    merge_failure: Option<(u16, String)>,
    release_failure: Option<(u16, String)>,
    merges: Mutex<Vec<MergeRequest>>,
    releases: Mutex<Vec<ReleaseRequest>>,
}

impl MockHost {
    /// Create a host on which both operations succeed
    pub fn new() -> Self {
        MockHost {
            merge_failure: None,
            release_failure: None,
            merges: Mutex::new(Vec::new()),
            releases: Mutex::new(Vec::new()),
        }
    }

    /// Program the merge endpoint to fail with a status and body
    pub fn set_merge_failure(&mut self, status: u16, body: impl Into<String>) {
        self.merge_failure = Some((status, body.into()));
    }

    /// Program the release endpoint to fail with a status and body
    pub fn set_release_failure(&mut self, status: u16, body: impl Into<String>) {
        self.release_failure = Some((status, body.into()));
    }

    /// Merge requests received so far
    pub fn merge_calls(&self) -> Vec<MergeRequest> {
        self.merges.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    /// Release requests received so far
    pub fn release_calls(&self) -> Vec<ReleaseRequest> {
        self.releases.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseHost for MockHost {
    fn merge_pull_request(&self, request: &MergeRequest) -> Result<MergeOutcome> {
        if let Ok(mut calls) = self.merges.lock() {
            calls.push(request.clone());
        }

        match &self.merge_failure {
            Some((status, body)) => Err(PrPublishError::api(*status, body.clone())),
            None => Ok(MergeOutcome {
                sha: Some("abc123".to_string()),
                merged: true,
                message: Some("Pull Request successfully merged".to_string()),
            }),
        }
    }

    fn create_release(&self, request: &ReleaseRequest) -> Result<ReleaseOutcome> {
        if let Ok(mut calls) = self.releases.lock() {
            calls.push(request.clone());
        }

        match &self.release_failure {
            Some((status, body)) => Err(PrPublishError::api(*status, body.clone())),
            None => Ok(ReleaseOutcome {
                html_url: Some(format!(
                    "https://example.com/releases/{}",
                    request.tag_name()
                )),
            }),
        }
    }
}
