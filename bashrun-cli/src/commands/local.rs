//! Local execution
//!
//! Runs a batch through the execution engine in this process.

use anyhow::{Context, Result};
use bashrun_core::dto::command::CreateCommands;
use bashrun_runner::{ExecutionService, RunnerConfig, StandardExecutionService};
use colored::*;

use crate::output::print_outcomes;

/// Run commands locally and print their outcomes
pub async fn run_commands(commands: Vec<String>) -> Result<()> {
    let config = RunnerConfig::from_env().context("Invalid runner configuration")?;
    let service = StandardExecutionService::new(&config);

    let request = CreateCommands::new(commands);
    let (outcomes, error) = service.exec_commands(Some(&request)).await?.into_parts();

    print_outcomes(&outcomes);

    if let Some(err) = error {
        println!("{} {}", "✗".red().bold(), err.to_string().red());
        return Err(err.into());
    }

    Ok(())
}
