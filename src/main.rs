use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use pr_publish::cli::{run_publish_workflow, WorkflowOptions};
use pr_publish::config::Config;
use pr_publish::github::GitHubClient;
use pr_publish::lint::{ArduinoLint, DEFAULT_LINT_BIN};
use pr_publish::ui;

#[derive(clap::Parser)]
#[command(
    name = "pr-publish",
    about = "Validate and merge a version-bump pull request, then publish a GitHub release"
)]
struct Args {
    #[arg(
        short,
        long,
        default_value = "library.properties",
        help = "Path to the library metadata file"
    )]
    metadata: PathBuf,

    #[arg(
        long,
        default_value = DEFAULT_LINT_BIN,
        help = "Lint executable used for code style validation"
    )]
    lint_bin: String,

    #[arg(long, help = "Run the validations without merging or releasing")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("pr-publish {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // All environment access happens here, once; the workflow only sees the
    // explicit configuration.
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let host = match GitHubClient::new(&config.api_base, &config.repository, &config.token) {
        Ok(client) => client,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };
    let checker = ArduinoLint::new(&args.lint_bin);

    let options = WorkflowOptions {
        metadata_path: args.metadata,
        dry_run: args.dry_run,
    };

    if let Err(e) = run_publish_workflow(&config, &options, &checker, &host) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
