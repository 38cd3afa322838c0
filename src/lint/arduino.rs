use std::process::Command;

use super::{LintReport, StyleChecker};
use crate::error::{PrPublishError, Result};

/// Default lint executable name, resolved via PATH
pub const DEFAULT_LINT_BIN: &str = "arduino-lint";

/// Style checker backed by the external `arduino-lint` tool.
///
/// Invoked with fixed arguments requesting a library-manager metadata update
/// pass. Only the exit status and captured stdout/stderr are consumed. The
/// subprocess is awaited to completion with no timeout.
pub struct ArduinoLint {
    program: String,
}

impl ArduinoLint {
    /// Create a checker invoking the given executable
    pub fn new(program: impl Into<String>) -> Self {
        ArduinoLint {
            program: program.into(),
        }
    }
}

impl Default for ArduinoLint {
    fn default() -> Self {
        ArduinoLint::new(DEFAULT_LINT_BIN)
    }
}

impl StyleChecker for ArduinoLint {
    fn check(&self) -> Result<LintReport> {
        let output = Command::new(&self.program)
            .args(["--library-manager", "update"])
            .output()
            .map_err(|e| {
                PrPublishError::lint(format!("failed to execute {}: {}", self.program, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PrPublishError::lint(stderr.trim().to_string()));
        }

        Ok(LintReport {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}
