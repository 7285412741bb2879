//! Bashrun Server
//!
//! HTTP front end for the batch execution engine. Runs submitted command
//! batches, stores every outcome in PostgreSQL and serves them back.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bashrun_runner::{ExecutionService, StandardExecutionService};

pub mod api;
pub mod config;
pub mod db;
pub mod repository;
pub mod service;

use crate::api::AppState;
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bashrun_server=debug,bashrun_runner=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Bashrun Server...");

    let config = Config::from_env().context("Failed to load configuration")?;

    tracing::info!("Connecting to database...");

    let pool = db::connect_with_retry(&config).await?;

    tracing::info!("Database connection pool created");

    db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let executor: Arc<dyn ExecutionService> =
        Arc::new(StandardExecutionService::new(&config.runner));

    // Build router with all API endpoints
    let app = api::create_router(AppState::new(pool, executor));

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
