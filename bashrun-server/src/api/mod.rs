//! API Module
//!
//! HTTP API layer for the server.

pub mod command;
pub mod error;
pub mod health;

use axum::{
    Router,
    routing::{get, post},
};
use bashrun_runner::ExecutionService;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub executor: Arc<dyn ExecutionService>,
}

impl AppState {
    pub fn new(pool: PgPool, executor: Arc<dyn ExecutionService>) -> Self {
        Self { pool, executor }
    }
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Command endpoints
        .route("/bash/create-command", post(command::create_command))
        .route("/bash/get-commands", get(command::list_commands))
        .route("/bash/get-commands/{id}", get(command::get_command))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
