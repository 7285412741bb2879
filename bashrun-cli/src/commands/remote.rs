//! Server command handlers

use anyhow::Result;
use bashrun_client::{BashrunClient, ClientError};
use bashrun_core::domain::command::StoredCommand;
use bashrun_core::dto::command::CreateCommands;
use colored::*;

use crate::config::Config;
use crate::output::{print_outcome, print_outcomes};

/// Submit a batch to the server
pub async fn submit_commands(config: &Config, commands: Vec<String>) -> Result<()> {
    let client = BashrunClient::new(&config.server_url);

    match client.create_commands(CreateCommands::new(commands)).await {
        Ok(outcomes) => {
            print_outcomes(&outcomes);
            Ok(())
        }
        Err(ClientError::PartialBatch { outcomes }) => {
            print_outcomes(&outcomes);
            println!(
                "{}",
                "✗ Some commands could not be executed by the server".red().bold()
            );
            anyhow::bail!("batch finished with runner failures")
        }
        Err(e) => Err(e.into()),
    }
}

/// List stored commands
pub async fn list_commands(config: &Config) -> Result<()> {
    let client = BashrunClient::new(&config.server_url);
    let commands = client.list_commands().await?;

    if commands.is_empty() {
        println!("{}", "No commands found.".yellow());
    } else {
        println!("{}", format!("Found {} command(s):", commands.len()).bold());
        println!();
        for command in &commands {
            print_stored_summary(command);
        }
    }

    Ok(())
}

/// Show one stored command
pub async fn get_command(config: &Config, id: i64) -> Result<()> {
    let client = BashrunClient::new(&config.server_url);

    match client.get_command(id).await {
        Ok(command) => {
            println!("{}", format!("Command {}:", command.id).bold());
            println!(
                "  Created: {}",
                command
                    .created_at
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string()
                    .dimmed()
            );
            print_outcome(&command.into());
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            println!("{}", format!("Command {} not found.", id).yellow());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn print_stored_summary(command: &StoredCommand) {
    let marker = if command.is_error {
        "✗".red()
    } else {
        "✓".green()
    };

    println!(
        "  {} {} {}",
        marker,
        format!("#{}", command.id).dimmed(),
        command.command.cyan()
    );
}
