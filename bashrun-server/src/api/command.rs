//! Command API Handlers
//!
//! HTTP endpoints for running command batches and reading stored outcomes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bashrun_core::domain::command::StoredCommand;
use bashrun_core::dto::command::CreateCommands;
use bashrun_runner::BatchResult;

use crate::api::AppState;
use crate::api::error::ApiResult;
use crate::service::command_service;

/// POST /bash/create-command
/// Run a batch of shell commands and store their outcomes
///
/// Responds with the outcomes that were produced. When a runner hit an
/// infrastructure failure the status is 500 but the body still carries the
/// partial outcomes.
pub async fn create_command(
    State(state): State<AppState>,
    Json(req): Json<CreateCommands>,
) -> ApiResult<Response> {
    tracing::info!("Running batch of {} command(s)", req.len());

    let result = command_service::create_commands(&state.pool, state.executor.as_ref(), req).await?;

    let status = batch_status(&result);
    Ok((status, Json(result.outcomes)).into_response())
}

/// GET /bash/get-commands
/// List every stored command
pub async fn list_commands(State(state): State<AppState>) -> ApiResult<Json<Vec<StoredCommand>>> {
    tracing::debug!("Listing all commands");

    let commands = command_service::list_commands(&state.pool).await?;

    Ok(Json(commands))
}

/// GET /bash/get-commands/{id}
/// Get a stored command by ID
pub async fn get_command(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<StoredCommand>> {
    tracing::debug!("Getting command: {}", id);

    let command = command_service::get_command(&state.pool, &id).await?;

    Ok(Json(command))
}

fn batch_status(result: &BatchResult) -> StatusCode {
    if result.is_failed() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    }
}
