use std::sync::atomic::{AtomicUsize, Ordering};

use super::{LintReport, StyleChecker};
use crate::error::{PrPublishError, Result};

/// Mock style checker for testing without spawning subprocesses
pub struct MockStyleChecker {
    failure: Option<String>,
    stdout: String,
    calls: AtomicUsize,
}

impl MockStyleChecker {
    /// A checker whose runs succeed with empty output
    pub fn passing() -> Self {
        MockStyleChecker {
            failure: None,
            stdout: String::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// A checker whose runs fail with the given stderr text
    pub fn failing(stderr: impl Into<String>) -> Self {
        MockStyleChecker {
            failure: Some(stderr.into()),
            stdout: String::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Set the stdout a passing run reports
    pub fn with_stdout(mut self, stdout: impl Into<String>) -> Self {
        self.stdout = stdout.into();
        self
    }

    /// Number of times `check` has been invoked
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl StyleChecker for MockStyleChecker {
    fn check(&self) -> Result<LintReport> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.failure {
            Some(stderr) => Err(PrPublishError::lint(stderr.clone())),
            None => Ok(LintReport {
                stdout: self.stdout.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passing_checker() {
        let checker = MockStyleChecker::passing().with_stdout("all good");
        let report = checker.check().unwrap();
        assert_eq!(report.stdout, "all good");
        assert_eq!(checker.call_count(), 1);
    }

    #[test]
    fn test_failing_checker() {
        let checker = MockStyleChecker::failing("bad style");
        let err = checker.check().unwrap_err();
        assert!(err.to_string().contains("bad style"));
        assert_eq!(checker.call_count(), 1);
    }
}
