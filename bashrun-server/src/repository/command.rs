//! Command Repository
//!
//! Handles all database operations related to command outcomes.

use bashrun_core::domain::command::{CommandOutcome, StoredCommand};
use sqlx::PgPool;

/// Insert a batch of outcomes in a single transaction
///
/// Returns the number of rows written.
pub async fn create_batch(pool: &PgPool, outcomes: &[CommandOutcome]) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for outcome in outcomes {
        let result = sqlx::query(
            r#"
            INSERT INTO commands (command, is_error, log)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&outcome.command)
        .bind(outcome.is_error)
        .bind(&outcome.log)
        .execute(&mut *tx)
        .await?;

        inserted += result.rows_affected();
    }

    tx.commit().await?;

    Ok(inserted)
}

/// List every stored command
pub async fn list_all(pool: &PgPool) -> Result<Vec<StoredCommand>, sqlx::Error> {
    let rows = sqlx::query_as::<_, CommandRow>(
        r#"
        SELECT id, command, is_error, log, created_at
        FROM commands
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

/// Find a stored command by ID
pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<StoredCommand>, sqlx::Error> {
    let row = sqlx::query_as::<_, CommandRow>(
        r#"
        SELECT id, command, is_error, log, created_at
        FROM commands
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct CommandRow {
    id: i64,
    command: String,
    is_error: bool,
    log: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<CommandRow> for StoredCommand {
    fn from(row: CommandRow) -> Self {
        StoredCommand {
            id: row.id,
            command: row.command,
            is_error: row.is_error,
            log: row.log,
            created_at: row.created_at,
        }
    }
}
