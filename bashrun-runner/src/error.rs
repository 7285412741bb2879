//! Error types for the runner

use std::fmt;

use thiserror::Error;

/// Errors returned by batch execution
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExecError {
    /// No command request was supplied; nothing was executed
    #[error("invalid input: the command request is absent")]
    InvalidInput,

    /// At least one runner could not execute its command
    ///
    /// Which commands failed is not recorded here; each failure is logged
    /// by its runner.
    #[error("run subprocess error: {failures} runner(s) failed")]
    Subprocess { failures: usize },
}

/// Step of process handling where an infrastructure failure happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    Spawn,
    StdoutPipe,
    StderrPipe,
    StdoutRead,
    StderrRead,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            FailureStage::Spawn => "spawn",
            FailureStage::StdoutPipe => "stdout pipe",
            FailureStage::StderrPipe => "stderr pipe",
            FailureStage::StdoutRead => "stdout read",
            FailureStage::StderrRead => "stderr read",
        };
        f.write_str(stage)
    }
}

/// Infrastructure failure of a single runner
///
/// Distinct from the command itself failing, which is reported as a normal
/// outcome with `is_error` set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{stage} error for '{command}': {reason}")]
pub struct RunnerFailure {
    pub command: String,
    pub stage: FailureStage,
    pub reason: String,
}

impl RunnerFailure {
    pub fn new(command: impl Into<String>, stage: FailureStage, reason: impl ToString) -> Self {
        Self {
            command: command.into(),
            stage,
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runner_failure_display() {
        let failure = RunnerFailure::new("echo hi", FailureStage::StdoutRead, "broken pipe");
        assert_eq!(
            failure.to_string(),
            "stdout read error for 'echo hi': broken pipe"
        );
    }

    #[test]
    fn test_subprocess_error_display() {
        let err = ExecError::Subprocess { failures: 2 };
        assert!(err.to_string().starts_with("run subprocess error"));
    }
}
