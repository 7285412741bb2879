//! Execution service
//!
//! Handles batch execution:
//! - Launching one task runner per command string, without a concurrency cap
//! - Waiting for every runner to finish
//! - Draining reported outcomes and failure signals into a [`BatchResult`]

use async_trait::async_trait;
use bashrun_core::dto::command::CreateCommands;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::config::RunnerConfig;
use crate::error::ExecError;
use crate::execution::BatchResult;
use crate::launcher::{ProcessLauncher, ShellLauncher};
use crate::task::TaskRunner;

/// Service trait for executing command batches
#[async_trait]
pub trait ExecutionService: Send + Sync {
    /// Executes every command of a request concurrently
    ///
    /// # Arguments
    /// * `request` - The batch to run; `None` is rejected without spawning anything
    ///
    /// # Returns
    /// The aggregated batch result. Infrastructure failures are reported
    /// through [`BatchResult::error`], next to the outcomes that were produced.
    ///
    /// # Errors
    /// [`ExecError::InvalidInput`] when `request` is `None`.
    async fn exec_commands(
        &self,
        request: Option<&CreateCommands>,
    ) -> Result<BatchResult, ExecError>;
}

/// Standard implementation of ExecutionService
pub struct StandardExecutionService {
    launcher: Arc<dyn ProcessLauncher>,
}

impl StandardExecutionService {
    /// Creates a service that runs commands through the configured shell
    pub fn new(config: &RunnerConfig) -> Self {
        Self::with_launcher(Arc::new(ShellLauncher::new(config)))
    }

    /// Creates a service on top of a custom launcher
    pub fn with_launcher(launcher: Arc<dyn ProcessLauncher>) -> Self {
        Self { launcher }
    }
}

impl Default for StandardExecutionService {
    fn default() -> Self {
        Self::new(&RunnerConfig::default())
    }
}

#[async_trait]
impl ExecutionService for StandardExecutionService {
    async fn exec_commands(
        &self,
        request: Option<&CreateCommands>,
    ) -> Result<BatchResult, ExecError> {
        let request = request.ok_or(ExecError::InvalidInput)?;
        let total = request.len();

        info!("Executing batch of {} command(s)", total);

        // Sized to the batch so no runner waits on send while we wait on them.
        let (outcome_tx, mut outcome_rx) = mpsc::channel(total.max(1));
        let (failure_tx, mut failure_rx) = mpsc::unbounded_channel();

        let mut runners = JoinSet::new();
        for command in &request.bash_strings {
            let runner = TaskRunner::new(
                Arc::clone(&self.launcher),
                outcome_tx.clone(),
                failure_tx.clone(),
            );
            runners.spawn(runner.run(command.clone()));
        }

        let mut failures = 0;
        while let Some(joined) = runners.join_next().await {
            if let Err(e) = joined {
                error!("Runner task did not complete: {}", e);
                failures += 1;
            }
        }

        // Every runner has returned; dropping our handles closes both sinks.
        drop(outcome_tx);
        drop(failure_tx);

        let mut outcomes = Vec::with_capacity(total);
        while let Some(outcome) = outcome_rx.recv().await {
            outcomes.push(outcome);
        }

        while failure_rx.recv().await.is_some() {
            failures += 1;
        }

        let result = BatchResult { outcomes, failures };
        if result.is_failed() {
            error!(
                "Batch finished with {} runner failure(s), {} outcome(s) collected",
                result.failures,
                result.outcomes.len()
            );
        } else {
            info!("Batch finished: {} outcome(s)", result.outcomes.len());
        }

        Ok(result)
    }
}
