// src/tasks/traits.rs

//! Storage contract for task backends. Every read and write of the task set
//! goes through this trait; the manager never touches a medium directly.

use async_trait::async_trait;

use crate::tasks::error::StorageError;
use crate::tasks::types::{Task, TaskPriority, TaskStatus};

/// A persistence backend for tasks: a preferences file, an embedded
/// database or a remote HTTP service. Implementations own their medium
/// handle exclusively for the lifetime of the process.
///
/// Update and remove calls are no-ops when no record matches `id`. The
/// manager checks ids against its own collection before calling, so a miss
/// here means the medium changed underneath us, not a caller bug.
#[async_trait]
pub trait TaskStorage: Send + Sync {
    /// Returns the full current task set, in unspecified order.
    async fn load_tasks(&self) -> Result<Vec<Task>, StorageError>;

    /// Persists a new record and returns the created task, including the id
    /// the backend assigned to it.
    async fn add_task(
        &self,
        title: &str,
        priority: TaskPriority,
        status: TaskStatus,
    ) -> Result<Task, StorageError>;

    /// Persists a new title for the record identified by `id`.
    async fn update_title(&self, id: &str, title: &str) -> Result<(), StorageError>;

    /// Persists a new status for the record identified by `id`.
    async fn update_status(&self, id: &str, status: TaskStatus) -> Result<(), StorageError>;

    /// Persists a new priority for the record identified by `id`.
    async fn update_priority(&self, id: &str, priority: TaskPriority)
    -> Result<(), StorageError>;

    /// Deletes the record identified by `id`.
    async fn remove_task(&self, id: &str) -> Result<(), StorageError>;
}
