//! Command Service
//!
//! Business logic for running command batches and reading stored outcomes.

use bashrun_core::domain::command::StoredCommand;
use bashrun_core::dto::command::CreateCommands;
use bashrun_runner::{BatchResult, ExecError, ExecutionService};
use sqlx::PgPool;

use crate::repository::command_repository;

/// Service error type
#[derive(Debug)]
pub enum CommandError {
    NotFound(i64),
    ValidationError(String),
    ExecutionError(ExecError),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for CommandError {
    fn from(err: sqlx::Error) -> Self {
        CommandError::DatabaseError(err)
    }
}

impl From<ExecError> for CommandError {
    fn from(err: ExecError) -> Self {
        CommandError::ExecutionError(err)
    }
}

pub type Result<T> = std::result::Result<T, CommandError>;

/// Run a batch and store every outcome it produced
///
/// A storage failure is logged and does not fail the request: the caller
/// still receives the outcomes that were executed.
pub async fn create_commands(
    pool: &PgPool,
    executor: &dyn ExecutionService,
    req: CreateCommands,
) -> Result<BatchResult> {
    let result = executor.exec_commands(Some(&req)).await?;

    if let Some(err) = result.error() {
        tracing::warn!("{}", err);
    }

    match command_repository::create_batch(pool, &result.outcomes).await {
        Ok(inserted) => tracing::debug!("Stored {} command outcome(s)", inserted),
        Err(err) => tracing::error!("Failed to store command outcomes: {:?}", err),
    }

    Ok(result)
}

/// List every stored command
pub async fn list_commands(pool: &PgPool) -> Result<Vec<StoredCommand>> {
    let commands = command_repository::list_all(pool).await?;
    Ok(commands)
}

/// Get a stored command by its raw path identifier
pub async fn get_command(pool: &PgPool, raw_id: &str) -> Result<StoredCommand> {
    let id = parse_command_id(raw_id)?;

    let command = command_repository::find_by_id(pool, id)
        .await?
        .ok_or(CommandError::NotFound(id))?;

    Ok(command)
}

// =============================================================================
// Validation
// =============================================================================

/// Parse a command identifier; identifiers are positive integers
fn parse_command_id(raw_id: &str) -> Result<i64> {
    let id = raw_id
        .parse::<i64>()
        .map_err(|_| CommandError::ValidationError(format!("'{}' is not a number", raw_id)))?;

    if id <= 0 {
        return Err(CommandError::ValidationError(format!(
            "Command id must be positive, got {}",
            id
        )));
    }

    Ok(id)
}
