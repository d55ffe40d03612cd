// src/tasks/manager.rs

//! The task manager: single source of truth for the current task set,
//! mediating every mutation through exactly one storage backend.

use std::sync::Arc;

use tracing::debug;

use crate::tasks::error::TaskError;
use crate::tasks::traits::TaskStorage;
use crate::tasks::types::{Task, TaskPriority, TaskStatus};

/// In-memory task collection in front of one [`TaskStorage`].
///
/// Every mutation persists first and touches the collection only after the
/// backend confirmed, so a failed call leaves the collection exactly as it
/// was. The collection stays sorted by title after every change. Methods
/// take `&mut self`; overlapping operations on one instance are ruled out
/// at compile time.
pub struct TaskManager {
    storage: Arc<dyn TaskStorage>,
    tasks: Vec<Task>,
}

impl TaskManager {
    /// Creates a manager over the given backend with an empty collection.
    /// Call [`load_tasks`](Self::load_tasks) to populate it.
    pub fn new(storage: Arc<dyn TaskStorage>) -> Self {
        Self {
            storage,
            tasks: Vec::new(),
        }
    }

    /// Read-only snapshot of the current flat collection, title-ascending.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Replaces the whole collection with the backend's current set. When
    /// the read fails the previous collection is kept untouched.
    pub async fn load_tasks(&mut self) -> Result<(), TaskError> {
        let loaded = self.storage.load_tasks().await?;
        self.tasks = loaded;
        self.resort();
        debug!("Loaded {} tasks", self.tasks.len());
        Ok(())
    }

    /// Creates a task through the backend and inserts the confirmed record,
    /// id included, into the collection.
    pub async fn add_task(
        &mut self,
        title: &str,
        priority: TaskPriority,
        status: TaskStatus,
    ) -> Result<(), TaskError> {
        let task = self.storage.add_task(title, priority, status).await?;
        debug!("Added task {}", task.id);
        self.tasks.push(task);
        self.resort();
        Ok(())
    }

    /// Renames the task identified by `id`.
    pub async fn update_title(&mut self, id: &str, title: &str) -> Result<(), TaskError> {
        let index = self.index_of(id)?;
        self.storage.update_title(id, title).await?;
        self.tasks[index].title = title.to_string();
        self.resort();
        Ok(())
    }

    pub async fn update_status(&mut self, id: &str, status: TaskStatus) -> Result<(), TaskError> {
        let index = self.index_of(id)?;
        self.storage.update_status(id, status).await?;
        self.tasks[index].status = status;
        self.resort();
        Ok(())
    }

    pub async fn update_priority(
        &mut self,
        id: &str,
        priority: TaskPriority,
    ) -> Result<(), TaskError> {
        let index = self.index_of(id)?;
        self.storage.update_priority(id, priority).await?;
        self.tasks[index].priority = priority;
        self.resort();
        Ok(())
    }

    /// Deletes the task through the backend and drops it from the collection.
    pub async fn remove_task(&mut self, id: &str) -> Result<(), TaskError> {
        let index = self.index_of(id)?;
        self.storage.remove_task(id).await?;
        let removed = self.tasks.remove(index);
        debug!("Removed task {}", removed.id);
        Ok(())
    }

    /// Precondition for every id-addressed operation: the id must already be
    /// in the collection, otherwise the backend is never contacted.
    fn index_of(&self, id: &str) -> Result<usize, TaskError> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| TaskError::WrongTaskId(id.to_string()))
    }

    /// Restores title-ascending order. The sort is stable, so passes over an
    /// already ordered collection change nothing.
    fn resort(&mut self) {
        self.tasks.sort_by(|a, b| a.title.cmp(&b.title));
    }
}
