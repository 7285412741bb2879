//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod local;
mod remote;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run commands concurrently on this machine
    Run {
        /// Shell command strings, one per argument
        commands: Vec<String>,
    },
    /// Run commands on the server and store their outcomes
    Submit {
        /// Shell command strings, one per argument
        commands: Vec<String>,
    },
    /// List stored commands
    List,
    /// Show one stored command
    Get {
        /// Command ID
        id: i64,
    },
}

/// Handle a CLI command
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Run { commands } => local::run_commands(commands).await,
        Commands::Submit { commands } => remote::submit_commands(config, commands).await,
        Commands::List => remote::list_commands(config).await,
        Commands::Get { id } => remote::get_command(config, id).await,
    }
}
