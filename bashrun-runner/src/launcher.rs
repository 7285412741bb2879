//! Shell process launching
//!
//! Spawns a command string through the configured shell and captures both
//! output streams in full before waiting on the process.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::config::RunnerConfig;
use crate::error::{FailureStage, RunnerFailure};

/// Everything a finished process wrote to its output streams
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Launches one external process per command string
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    /// Runs `command` to completion and returns its captured output
    ///
    /// # Errors
    /// A [`RunnerFailure`] when the process cannot be spawned or its output
    /// streams cannot be acquired or read.
    async fn capture(&self, command: &str) -> Result<CapturedOutput, RunnerFailure>;
}

/// Launcher that hands command strings verbatim to a shell interpreter
///
/// Shell syntax (pipes, redirection, globbing) is honored; nothing is
/// sanitized.
#[derive(Debug, Clone)]
pub struct ShellLauncher {
    shell: String,
    shell_flag: String,
}

impl ShellLauncher {
    pub fn new(config: &RunnerConfig) -> Self {
        Self {
            shell: config.shell.clone(),
            shell_flag: config.shell_flag.clone(),
        }
    }
}

impl Default for ShellLauncher {
    fn default() -> Self {
        Self::new(&RunnerConfig::default())
    }
}

#[async_trait]
impl ProcessLauncher for ShellLauncher {
    async fn capture(&self, command: &str) -> Result<CapturedOutput, RunnerFailure> {
        let mut child = Command::new(&self.shell)
            .arg(&self.shell_flag)
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| RunnerFailure::new(command, FailureStage::Spawn, e))?;

        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| RunnerFailure::new(command, FailureStage::StdoutPipe, "not captured"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| RunnerFailure::new(command, FailureStage::StderrPipe, "not captured"))?;

        // Drain both pipes concurrently; neither may fill up and stall the child.
        let mut output = CapturedOutput::default();
        let (stdout_read, stderr_read) = tokio::join!(
            stdout.read_to_end(&mut output.stdout),
            stderr.read_to_end(&mut output.stderr)
        );
        stdout_read.map_err(|e| RunnerFailure::new(command, FailureStage::StdoutRead, e))?;
        stderr_read.map_err(|e| RunnerFailure::new(command, FailureStage::StderrRead, e))?;

        match child.wait().await {
            Ok(status) if status.success() => debug!("Command '{}' exited successfully", command),
            Ok(status) => debug!("Command '{}' exited with {}", command, status),
            Err(e) => warn!("Failed to wait for command '{}': {}", command, e),
        }

        Ok(output)
    }
}
