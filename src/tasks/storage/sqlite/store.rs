// src/tasks/storage/sqlite/store.rs

//! Task storage on an embedded SQLite database.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::tasks::error::StorageError;
use crate::tasks::storage::sqlite::mapping::{
    priority_from_name, priority_name, status_from_name, status_name,
};
use crate::tasks::traits::TaskStorage;
use crate::tasks::types::{Task, TaskPriority, TaskStatus};

/// Embedded-database task store. Every mutation runs in its own write
/// transaction; updates and deletes address rows by id and match zero or
/// one rows.
pub struct SqliteTaskStore {
    pool: SqlitePool,
}

impl SqliteTaskStore {
    /// Wraps an already migrated pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Runs the schema migration on the pool, then wraps it.
    pub async fn connect(pool: SqlitePool) -> Result<Self, StorageError> {
        super::migration::run_migrations(&pool).await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl TaskStorage for SqliteTaskStore {
    async fn load_tasks(&self) -> Result<Vec<Task>, StorageError> {
        let rows = sqlx::query("SELECT id, title, priority, status FROM tasks")
            .fetch_all(&self.pool)
            .await?;

        let mut tasks = Vec::with_capacity(rows.len());
        for row in rows {
            let id: String = row.get("id");
            let title: String = row.get("title");
            let priority: String = row.get("priority");
            let status: String = row.get("status");

            // Rows written by a newer schema may carry names this build does
            // not know. Skip them instead of failing the whole load.
            match (priority_from_name(&priority), status_from_name(&status)) {
                (Some(priority), Some(status)) => {
                    tasks.push(Task {
                        id,
                        title,
                        priority,
                        status,
                    });
                }
                _ => {
                    warn!(
                        "Skipping task row {} with unknown names (priority: {}, status: {})",
                        id, priority, status
                    );
                }
            }
        }

        Ok(tasks)
    }

    async fn add_task(
        &self,
        title: &str,
        priority: TaskPriority,
        status: TaskStatus,
    ) -> Result<Task, StorageError> {
        let task = Task::new(Uuid::new_v4().to_string(), title, priority, status);

        let mut tx = self.pool.begin().await?;
        sqlx::query("INSERT INTO tasks (id, title, priority, status) VALUES (?, ?, ?, ?)")
            .bind(&task.id)
            .bind(&task.title)
            .bind(priority_name(task.priority))
            .bind(status_name(task.status))
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        debug!("Added task {} to sqlite store", task.id);
        Ok(task)
    }

    async fn update_title(&self, id: &str, title: &str) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("UPDATE tasks SET title = ? WHERE id = ?")
            .bind(title)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }

    async fn update_status(&self, id: &str, status: TaskStatus) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("UPDATE tasks SET status = ? WHERE id = ?")
            .bind(status_name(status))
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }

    async fn update_priority(&self, id: &str, priority: TaskPriority) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("UPDATE tasks SET priority = ? WHERE id = ?")
            .bind(priority_name(priority))
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }

    async fn remove_task(&self, id: &str) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }
}
