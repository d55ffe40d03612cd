// src/tasks/storage/sqlite/migration.rs

//! Schema setup for the embedded task store. Safe to run at every startup.

use sqlx::{Executor, SqlitePool};

use crate::tasks::error::StorageError;

/// Task records, one row per task. Enum fields are stored as their string
/// names so the rows stay readable with plain sqlite tooling.
const CREATE_TASKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id TEXT PRIMARY KEY NOT NULL,
    title TEXT NOT NULL,
    priority TEXT NOT NULL,
    status TEXT NOT NULL
)
"#;

/// Runs all migrations for the embedded store (idempotent).
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    pool.execute(CREATE_TASKS_TABLE).await?;
    Ok(())
}
