//! Bashrun Runner
//!
//! Concurrent shell command execution engine.
//!
//! Architecture:
//! - Launcher: spawns one shell process and captures its output streams
//! - Task runner: classifies one captured process and reports the outcome
//! - Execution service: fans a batch out to one task runner per command and
//!   aggregates their outcomes into a [`BatchResult`]
//!
//! Outcomes come back in completion order, not input order.

pub mod config;
pub mod error;
pub mod execution;
pub mod launcher;
pub mod service;
pub mod task;

pub use config::RunnerConfig;
pub use error::{ExecError, FailureStage, RunnerFailure};
pub use execution::BatchResult;
pub use launcher::{CapturedOutput, ProcessLauncher, ShellLauncher};
pub use service::{ExecutionService, StandardExecutionService};
pub use task::TaskRunner;
