use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::StatusCode;
use serde_json::json;

use super::{MergeOutcome, MergeRequest, ReleaseHost, ReleaseOutcome, ReleaseRequest};
use crate::error::{PrPublishError, Result};

/// User agent sent with every API request
const USER_AGENT: &str = concat!("pr-publish/", env!("CARGO_PKG_VERSION"));

/// GitHub REST API client for the merge and release endpoints.
///
/// Every request is bearer-authenticated with the configured token and sent
/// synchronously with no timeout and no retry.
pub struct GitHubClient {
    client: Client,
    api_base: String,
    repository: String,
    token: String,
}

impl GitHubClient {
    /// Create a client for the given `owner/repo` against an API base URL.
    pub fn new(
        api_base: impl Into<String>,
        repository: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        let api_base: String = api_base.into();

        Ok(GitHubClient {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            repository: repository.into(),
            token: token.into(),
        })
    }

    /// Send an authenticated request, requiring an exact success status.
    fn send(&self, request: RequestBuilder, expected: StatusCode) -> Result<Response> {
        let response = request
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", "application/vnd.github.v3+json")
            .send()?;

        let status = response.status();
        if status != expected {
            let body = response.text().unwrap_or_default();
            return Err(PrPublishError::api(status.as_u16(), body));
        }

        Ok(response)
    }
}

impl ReleaseHost for GitHubClient {
    fn merge_pull_request(&self, request: &MergeRequest) -> Result<MergeOutcome> {
        let url = format!(
            "{}/repos/{}/pulls/{}/merge",
            self.api_base, self.repository, request.number
        );
        let body = json!({
            "commit_title": request.commit_title(),
            "commit_message": request.body,
            "merge_method": "merge",
        });

        let response = self.send(self.client.put(&url).json(&body), StatusCode::OK)?;
        Ok(response.json()?)
    }

    fn create_release(&self, request: &ReleaseRequest) -> Result<ReleaseOutcome> {
        let url = format!("{}/repos/{}/releases", self.api_base, self.repository);
        // prerelease is always false here, even when the version string
        // carries a pre-release tag; the validator's advisory is the only
        // surfacing of that tag.
        let body = json!({
            "tag_name": request.tag_name(),
            "name": request.release_name(),
            "body": request.changelog_body(),
            "draft": false,
            "prerelease": false,
        });

        let response = self.send(self.client.post(&url).json(&body), StatusCode::CREATED)?;
        Ok(response.json()?)
    }
}
