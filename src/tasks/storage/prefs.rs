// src/tasks/storage/prefs.rs

//! Task storage on a local preferences file: one JSON document whose named
//! slot holds the task list as an array of independently encoded blobs.
//!
//! Every mutation re-reads the document, applies the change and rewrites the
//! whole slot, so a store constructed over an existing file picks up its
//! contents without an explicit load first. Other slots in the document are
//! carried through untouched.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::tasks::error::StorageError;
use crate::tasks::traits::TaskStorage;
use crate::tasks::types::{Task, TaskPriority, TaskStatus};

/// Preferences-file task store.
pub struct PrefsTaskStore {
    path: PathBuf,
    slot: String,
}

impl PrefsTaskStore {
    pub fn new(path: impl Into<PathBuf>, slot: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            slot: slot.into(),
        }
    }

    /// Reads the whole document. A missing file is an empty document; an
    /// unreadable one is an error.
    async fn read_document(&self) -> Result<BTreeMap<String, Vec<String>>, StorageError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Decodes the task list out of the slot. Blobs that fail to decode are
    /// skipped, not surfaced; a corrupt entry costs one task, not the list.
    async fn read_tasks(&self) -> Result<Vec<Task>, StorageError> {
        let document = self.read_document().await?;
        let blobs = document.get(&self.slot).cloned().unwrap_or_default();
        let tasks: Vec<Task> = blobs
            .iter()
            .filter_map(|blob| serde_json::from_str(blob).ok())
            .collect();
        if tasks.len() < blobs.len() {
            warn!(
                "Skipped {} undecodable task blobs in {}",
                blobs.len() - tasks.len(),
                self.path.display()
            );
        }
        Ok(tasks)
    }

    /// Re-encodes every task into its own blob and rewrites the slot.
    async fn write_tasks(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let mut document = self.read_document().await?;
        let blobs = tasks
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<String>, _>>()?;
        document.insert(self.slot.clone(), blobs);
        tokio::fs::write(&self.path, serde_json::to_vec(&document)?).await?;
        Ok(())
    }
}

#[async_trait]
impl TaskStorage for PrefsTaskStore {
    async fn load_tasks(&self) -> Result<Vec<Task>, StorageError> {
        self.read_tasks().await
    }

    async fn add_task(
        &self,
        title: &str,
        priority: TaskPriority,
        status: TaskStatus,
    ) -> Result<Task, StorageError> {
        let task = Task::new(Uuid::new_v4().to_string(), title, priority, status);

        let mut tasks = self.read_tasks().await?;
        tasks.push(task.clone());
        self.write_tasks(&tasks).await?;

        debug!("Added task {} to {}", task.id, self.path.display());
        Ok(task)
    }

    async fn update_title(&self, id: &str, title: &str) -> Result<(), StorageError> {
        let mut tasks = self.read_tasks().await?;
        match tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.title = title.to_string();
                self.write_tasks(&tasks).await
            }
            None => Ok(()),
        }
    }

    async fn update_status(&self, id: &str, status: TaskStatus) -> Result<(), StorageError> {
        let mut tasks = self.read_tasks().await?;
        match tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.status = status;
                self.write_tasks(&tasks).await
            }
            None => Ok(()),
        }
    }

    async fn update_priority(&self, id: &str, priority: TaskPriority) -> Result<(), StorageError> {
        let mut tasks = self.read_tasks().await?;
        match tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.priority = priority;
                self.write_tasks(&tasks).await
            }
            None => Ok(()),
        }
    }

    async fn remove_task(&self, id: &str) -> Result<(), StorageError> {
        let mut tasks = self.read_tasks().await?;
        match tasks.iter().position(|task| task.id == id) {
            Some(index) => {
                tasks.remove(index);
                self.write_tasks(&tasks).await
            }
            None => Ok(()),
        }
    }
}
