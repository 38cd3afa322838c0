//! Code style validation behind a narrow trait.
//!
//! The primary abstraction is [StyleChecker], a single-capability trait
//! ("run a style check") so the workflow can be exercised in tests without
//! spawning real processes. Implementations:
//!
//! - [arduino::ArduinoLint]: invokes the external `arduino-lint` executable
//! - [mock::MockStyleChecker]: programmable implementation for testing

pub mod arduino;
pub mod mock;

pub use arduino::{ArduinoLint, DEFAULT_LINT_BIN};
pub use mock::MockStyleChecker;

use crate::error::Result;

/// Captured output of a successful lint run.
///
/// Standard output is surfaced for diagnostics only; it is never parsed, so
/// warnings inside a zero-exit run are not detected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LintReport {
    pub stdout: String,
}

/// Capability to run a code style check to completion.
pub trait StyleChecker: Send + Sync {
    /// Run the style check.
    ///
    /// # Returns
    /// * `Ok(LintReport)` - Tool exited zero; stdout captured for display
    /// * `Err(LintFailed)` - Tool could not be launched or exited non-zero,
    ///   carrying the captured stderr text
    fn check(&self) -> Result<LintReport>;
}
