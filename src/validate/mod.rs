//! The four sequential validation stages.
//!
//! Each validator is a plain result-returning function: it reports the first
//! failure as a specific error variant and has no process-exit side effects.
//! The orchestration layer decides whether a failure halts the run.

pub mod dependencies;
pub mod metadata;
pub mod version;

pub use dependencies::validate_dependencies;
pub use metadata::validate_metadata;
pub use version::{validate_version, VersionReport};
