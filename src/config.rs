use std::env;
use std::fmt;

use crate::error::{PrPublishError, Result};

/// Default GitHub REST API base URL
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Runtime configuration for a single pr-publish invocation.
///
/// Built once at the entry point from the CI environment and passed by
/// reference into each validator and executor; no other component reads the
/// process environment directly.
#[derive(Clone, PartialEq)]
pub struct Config {
    /// Bearer credential for GitHub API calls; never printed
    pub token: String,

    /// `owner/repo` identifier of the repository under release
    pub repository: String,

    /// Number of the version-bump pull request
    pub pr_number: u64,

    /// Pull request title, used in the generated merge commit title
    pub pr_title: String,

    /// Pull request description, carried verbatim into the merge commit
    /// message to preserve issue-closing references
    pub pr_body: String,

    /// Version string proposed by the pull request
    pub pr_version: String,

    /// Current version on the main branch
    pub main_version: String,

    /// GitHub API base URL (overridable for enterprise hosts and tests)
    pub api_base: String,
}

impl Config {
    /// Build the configuration from the CI environment.
    ///
    /// Required variables: `GITHUB_TOKEN`, `GITHUB_REPOSITORY`, `PR_NUMBER`,
    /// `PR_TITLE`, `pr_version`, `main_version`. `PR_BODY` defaults to an
    /// empty string and `GITHUB_API_URL` to the public API host.
    ///
    /// # Returns
    /// * `Ok(Config)` - All required variables present and well-formed
    /// * `Err` - `Config` error naming the first missing or malformed variable
    pub fn from_env() -> Result<Self> {
        let token = required_var("GITHUB_TOKEN")?;
        let repository = required_var("GITHUB_REPOSITORY")?;
        let pr_number = required_var("PR_NUMBER")?.parse::<u64>().map_err(|_| {
            PrPublishError::config("PR_NUMBER must be a non-negative integer")
        })?;
        let pr_title = required_var("PR_TITLE")?;
        let pr_body = env::var("PR_BODY").unwrap_or_default();
        let pr_version = required_var("pr_version")?;
        let main_version = required_var("main_version")?;
        let api_base =
            env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Ok(Config {
            token,
            repository,
            pr_number,
            pr_title,
            pr_body,
            pr_version,
            main_version,
            api_base,
        })
    }
}

// Manual Debug keeps the token out of any diagnostic output.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("repository", &self.repository)
            .field("pr_number", &self.pr_number)
            .field("pr_title", &self.pr_title)
            .field("pr_body", &self.pr_body)
            .field("pr_version", &self.pr_version)
            .field("main_version", &self.main_version)
            .field("api_base", &self.api_base)
            .finish()
    }
}

fn required_var(name: &str) -> Result<String> {
    env::var(name).map_err(|_| {
        PrPublishError::config(format!("Missing required environment variable: {}", name))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL_VARS: [&str; 8] = [
        "GITHUB_TOKEN",
        "GITHUB_REPOSITORY",
        "PR_NUMBER",
        "PR_TITLE",
        "PR_BODY",
        "pr_version",
        "main_version",
        "GITHUB_API_URL",
    ];

    fn clear_env() {
        for var in ALL_VARS {
            env::remove_var(var);
        }
    }

    fn set_complete_env() {
        env::set_var("GITHUB_TOKEN", "test-token");
        env::set_var("GITHUB_REPOSITORY", "octo/lib");
        env::set_var("PR_NUMBER", "42");
        env::set_var("PR_TITLE", "Bump version to 1.0.1");
        env::set_var("PR_BODY", "Closes #7");
        env::set_var("pr_version", "1.0.1");
        env::set_var("main_version", "1.0.0");
    }

    #[test]
    #[serial]
    fn test_from_env_complete() {
        clear_env();
        set_complete_env();

        let config = Config::from_env().unwrap();
        assert_eq!(config.repository, "octo/lib");
        assert_eq!(config.pr_number, 42);
        assert_eq!(config.pr_title, "Bump version to 1.0.1");
        assert_eq!(config.pr_body, "Closes #7");
        assert_eq!(config.pr_version, "1.0.1");
        assert_eq!(config.main_version, "1.0.0");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    #[serial]
    fn test_from_env_missing_token() {
        clear_env();
        set_complete_env();
        env::remove_var("GITHUB_TOKEN");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("GITHUB_TOKEN"));
    }

    #[test]
    #[serial]
    fn test_from_env_body_defaults_to_empty() {
        clear_env();
        set_complete_env();
        env::remove_var("PR_BODY");

        let config = Config::from_env().unwrap();
        assert_eq!(config.pr_body, "");
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_pr_number() {
        clear_env();
        set_complete_env();
        env::set_var("PR_NUMBER", "not-a-number");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("PR_NUMBER"));
    }

    #[test]
    #[serial]
    fn test_from_env_api_base_override() {
        clear_env();
        set_complete_env();
        env::set_var("GITHUB_API_URL", "http://127.0.0.1:9999");

        let config = Config::from_env().unwrap();
        assert_eq!(config.api_base, "http://127.0.0.1:9999");
    }

    #[test]
    #[serial]
    fn test_debug_redacts_token() {
        clear_env();
        set_complete_env();

        let config = Config::from_env().unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("test-token"));
        assert!(rendered.contains("<redacted>"));
    }
}
