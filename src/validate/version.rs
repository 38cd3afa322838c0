use semver::Version;

use crate::domain::BumpKind;
use crate::error::{PrPublishError, Result};

/// Outcome of a successful version validation
#[derive(Debug, Clone, PartialEq)]
pub struct VersionReport {
    /// Which bump shape the pull request performs
    pub bump: BumpKind,
    /// Pre-release tag on the PR version, if any (advisory, never fatal)
    pub prerelease: Option<String>,
}

/// Validate semantic-version progression under the sequential-bump policy.
///
/// Both inputs must parse as semantic versions and `pr_version` must compare
/// strictly greater than `main_version` under semver precedence. Exactly one
/// bump shape is then accepted, checked in priority order:
///
/// 1. Major bump (`pr.major > main.major`) requires minor and patch reset to 0
/// 2. Minor bump (`pr.minor > main.minor`) requires patch reset to 0
/// 3. Patch bump otherwise requires `pr.patch == main.patch + 1`
///
/// # Returns
/// * `Ok(VersionReport)` - Accepted bump, with any pre-release tag surfaced
/// * `Err(InvalidVersion)` - Either input fails to parse
/// * `Err(NonIncreasing)` - PR version not strictly greater than main
/// * `Err(BadBump)` - Increment violates the sequential-bump policy
pub fn validate_version(pr_version: &str, main_version: &str) -> Result<VersionReport> {
    let pr = parse(pr_version)?;
    let main = parse(main_version)?;

    if pr <= main {
        return Err(PrPublishError::NonIncreasing {
            pr: pr_version.to_string(),
            main: main_version.to_string(),
        });
    }

    let bump = if pr.major > main.major {
        if pr.minor != 0 || pr.patch != 0 {
            return Err(PrPublishError::bad_bump(
                "major version increment requires MINOR and PATCH to reset to 0",
            ));
        }
        BumpKind::Major
    } else if pr.minor > main.minor {
        if pr.patch != 0 {
            return Err(PrPublishError::bad_bump(
                "minor version increment requires PATCH to reset to 0",
            ));
        }
        BumpKind::Minor
    } else {
        if pr.patch != main.patch + 1 {
            return Err(PrPublishError::bad_bump(format!(
                "patch version increment must be sequential. Current patch: {}, PR patch: {}",
                main.patch, pr.patch
            )));
        }
        BumpKind::Patch
    };

    let prerelease = if pr.pre.is_empty() {
        None
    } else {
        Some(pr.pre.as_str().to_string())
    };

    Ok(VersionReport { bump, prerelease })
}

fn parse(raw: &str) -> Result<Version> {
    Version::parse(raw)
        .map_err(|e| PrPublishError::invalid_version(format!("'{}' - {}", raw, e)))
}
