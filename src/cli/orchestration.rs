//! Main workflow orchestration logic.
//!
//! Runs the six pipeline stages strictly in order and returns on the first
//! failure. Validators and executors are plain result-returning functions or
//! trait objects; only the binary decides to halt the process. The merge and
//! release calls are the only side effects with external consequence, and
//! they run last, after every validation has passed.

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::BumpKind;
use crate::error::Result;
use crate::github::{MergeRequest, ReleaseHost, ReleaseRequest};
use crate::lint::StyleChecker;
use crate::ui;
use crate::validate::{validate_dependencies, validate_metadata, validate_version};

/// Options for the publish workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowOptions {
    /// Path to the library metadata file
    pub metadata_path: PathBuf,

    /// Run the validations but skip the merge and release calls
    pub dry_run: bool,
}

/// Result of a successful publish workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The bump shape the pull request performed
    pub bump: BumpKind,

    /// Dependency names declared in the metadata file
    pub dependencies: Vec<String>,

    /// The merged pull request number (None on dry run)
    pub merged_pr: Option<u64>,

    /// The release tag that was requested (None on dry run)
    pub tag: Option<String>,
}

/// Run the full validate-merge-release pipeline.
///
/// Stages, in order: version progression, metadata completeness, dependency
/// names, code style, pull request merge, release publication. The first
/// failing stage aborts the run; a failed merge halts before any release
/// call is attempted.
pub fn run_publish_workflow(
    config: &Config,
    options: &WorkflowOptions,
    checker: &dyn StyleChecker,
    host: &dyn ReleaseHost,
) -> Result<WorkflowResult> {
    ui::display_status(&format!(
        "Validating version {} against main version {}...",
        config.pr_version, config.main_version
    ));
    let report = validate_version(&config.pr_version, &config.main_version)?;
    if let Some(prerelease) = &report.prerelease {
        ui::display_warning(&format!(
            "PR version ({}) includes a pre-release tag '{}'. This is acceptable if intended.",
            config.pr_version, prerelease
        ));
    }
    ui::display_success(&format!(
        "Version {} is valid ({} bump)",
        config.pr_version, report.bump
    ));

    ui::display_status("Validating library metadata...");
    validate_metadata(&options.metadata_path)?;
    ui::display_success("Library metadata validation passed");

    ui::display_status("Validating dependencies...");
    let dependencies = validate_dependencies(&options.metadata_path)?;
    if dependencies.is_empty() {
        ui::display_success("No dependencies found");
    } else {
        for name in &dependencies {
            ui::display_status(&format!("Checked dependency: {}", name));
        }
        ui::display_success("All dependencies are valid");
    }

    ui::display_status("Validating code style...");
    let lint = checker.check()?;
    ui::display_success("Code style validation passed");
    if !lint.stdout.trim().is_empty() {
        println!("{}", lint.stdout.trim_end());
    }

    if options.dry_run {
        ui::display_status(&format!(
            "Dry run: would merge PR #{} and create release v{}",
            config.pr_number, config.pr_version
        ));
        return Ok(WorkflowResult {
            bump: report.bump,
            dependencies,
            merged_pr: None,
            tag: None,
        });
    }

    ui::display_status("Merging the pull request...");
    let merge = MergeRequest {
        number: config.pr_number,
        title: config.pr_title.clone(),
        body: config.pr_body.clone(),
    };
    host.merge_pull_request(&merge)?;
    ui::display_success(&format!("Successfully merged PR #{}", config.pr_number));

    ui::display_status("Creating GitHub release...");
    let release = ReleaseRequest {
        version: config.pr_version.clone(),
    };
    let tag = release.tag_name();
    let outcome = host.create_release(&release)?;
    match outcome.html_url {
        Some(url) => ui::display_success(&format!("Release {} created: {}", tag, url)),
        None => ui::display_success(&format!("Release {} created", tag)),
    }

    Ok(WorkflowResult {
        bump: report.bump,
        dependencies,
        merged_pr: Some(config.pr_number),
        tag: Some(tag),
    })
}
