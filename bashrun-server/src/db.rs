use anyhow::Context;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;

use crate::config::Config;

pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Connect to the database, retrying while it is not reachable yet
///
/// Common when the server and the database start together in containers.
pub async fn connect_with_retry(config: &Config) -> anyhow::Result<PgPool> {
    let mut attempt = 0;

    loop {
        attempt += 1;

        match create_pool(&config.database_url).await {
            Ok(pool) => {
                if attempt > 1 {
                    tracing::info!("Connected to database after {} attempt(s)", attempt);
                }
                return Ok(pool);
            }
            Err(e) if attempt < config.connect_attempts => {
                tracing::warn!(
                    "Unable to reach database (attempt {}/{}): {}",
                    attempt,
                    config.connect_attempts,
                    e
                );
                tokio::time::sleep(config.connect_retry_delay).await;
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!(
                        "Unable to create connection pool after {} attempt(s)",
                        attempt
                    )
                });
            }
        }
    }
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS commands (
            id BIGSERIAL PRIMARY KEY,
            command TEXT NOT NULL,
            is_error BOOLEAN NOT NULL,
            log TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_commands_created_at ON commands(created_at DESC)")
        .execute(pool)
        .await?;

    tracing::info!("Database migrations completed successfully");
    Ok(())
}
