//! Task runner
//!
//! Runs one command string and reports exactly one of two things: a
//! [`CommandOutcome`] on the outcome sink, or a [`RunnerFailure`] on the
//! failure sink. The runner finishing is its completion signal.

use bashrun_core::domain::command::CommandOutcome;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::error::RunnerFailure;
use crate::launcher::{CapturedOutput, ProcessLauncher};

/// Executes a single command and reports its outcome
pub struct TaskRunner {
    launcher: Arc<dyn ProcessLauncher>,
    outcomes: mpsc::Sender<CommandOutcome>,
    failures: mpsc::UnboundedSender<RunnerFailure>,
}

impl TaskRunner {
    /// Creates a runner that reports into the given sinks
    pub fn new(
        launcher: Arc<dyn ProcessLauncher>,
        outcomes: mpsc::Sender<CommandOutcome>,
        failures: mpsc::UnboundedSender<RunnerFailure>,
    ) -> Self {
        Self {
            launcher,
            outcomes,
            failures,
        }
    }

    /// Runs `command` and reports the result
    ///
    /// Consumes the runner so its sink handles are released on return.
    pub async fn run(self, command: String) {
        debug!("Running command: {}", command);

        match self.launcher.capture(&command).await {
            Ok(output) => {
                let outcome = classify(command, output);
                if self.outcomes.send(outcome).await.is_err() {
                    warn!("Outcome sink closed before the runner reported");
                }
            }
            Err(failure) => {
                error!("Runner failed: {}", failure);
                if self.failures.send(failure).is_err() {
                    warn!("Failure sink closed before the runner reported");
                }
            }
        }
    }
}

/// Classifies captured output into an outcome
///
/// A command succeeded when it wrote anything to standard output. The exit
/// status plays no part: a command that exits non-zero after printing to
/// stdout is a success, and one that exits zero silently is a failure whose
/// log is its (possibly empty) standard error.
pub fn classify(command: String, output: CapturedOutput) -> CommandOutcome {
    if output.stdout.is_empty() {
        CommandOutcome::failed(command, String::from_utf8_lossy(&output.stderr))
    } else {
        CommandOutcome::succeeded(command, String::from_utf8_lossy(&output.stdout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launcher::ShellLauncher;

    fn captured(stdout: &str, stderr: &str) -> CapturedOutput {
        CapturedOutput {
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_classify_stdout_is_success() {
        let outcome = classify("ls".to_string(), captured("a\nb\n", "warning\n"));
        assert_eq!(outcome, CommandOutcome::succeeded("ls", "a\nb\n"));
    }

    #[test]
    fn test_classify_empty_stdout_is_failure() {
        let outcome = classify("pws".to_string(), captured("", "pws: not found\n"));
        assert_eq!(outcome, CommandOutcome::failed("pws", "pws: not found\n"));
    }

    #[test]
    fn test_classify_silent_command_has_empty_log() {
        let outcome = classify("true".to_string(), captured("", ""));
        assert!(outcome.is_error);
        assert_eq!(outcome.log, "");
    }

    #[tokio::test]
    async fn test_run_reports_one_outcome() {
        let (outcome_tx, mut outcome_rx) = mpsc::channel(1);
        let (failure_tx, mut failure_rx) = mpsc::unbounded_channel();

        let runner = TaskRunner::new(Arc::new(ShellLauncher::default()), outcome_tx, failure_tx);
        runner.run("echo hello world!!!".to_string()).await;

        let outcome = outcome_rx.recv().await.unwrap();
        assert_eq!(
            outcome,
            CommandOutcome::succeeded("echo hello world!!!", "hello world!!!\n")
        );
        assert!(outcome_rx.recv().await.is_none());
        assert!(failure_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_run_unknown_command_is_command_failure() {
        let (outcome_tx, mut outcome_rx) = mpsc::channel(1);
        let (failure_tx, mut failure_rx) = mpsc::unbounded_channel();

        let runner = TaskRunner::new(Arc::new(ShellLauncher::default()), outcome_tx, failure_tx);
        runner.run("pws".to_string()).await;

        let outcome = outcome_rx.recv().await.unwrap();
        assert!(outcome.is_error);
        assert!(outcome.log.contains("not found"));
        assert!(failure_rx.recv().await.is_none());
    }
}
