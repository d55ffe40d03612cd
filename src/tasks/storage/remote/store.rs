// src/tasks/storage/remote/store.rs

//! Task storage on the remote todos HTTP service.
//!
//! The service persists titles and completion flags only. Priorities exist
//! purely on our side of the wire: loads default them, updates never send
//! them. Known issue carried from day one: status updates always send
//! `completed: true`, so re-planning a completed task never reaches the
//! service even though the local collection tracks it correctly.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::{debug, warn};

use crate::tasks::error::StorageError;
use crate::tasks::storage::remote::wire::{DeletedTodo, RemoteTodo, TodoPage, UpdatedTodo};
use crate::tasks::traits::TaskStorage;
use crate::tasks::types::{Task, TaskPriority, TaskStatus};

/// Remote task store bound to one user of the todos service.
pub struct RemoteTaskStore {
    client: Client,
    base_url: String,
    user_id: i64,
}

impl RemoteTaskStore {
    /// Builds a store for `{base_url}` scoped to `user_id`. The base url is
    /// the todos collection root, e.g. `https://dummyjson.com/todos`.
    pub fn new(
        base_url: impl Into<String>,
        user_id: i64,
        timeout: Duration,
    ) -> Result<Self, StorageError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            user_id,
        })
    }

    /// Turns a non-success answer into a [`StorageError::RemoteApi`] carrying
    /// whatever body text the service sent along.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StorageError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(StorageError::RemoteApi {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl TaskStorage for RemoteTaskStore {
    async fn load_tasks(&self) -> Result<Vec<Task>, StorageError> {
        let url = format!("{}/user/{}", self.base_url, self.user_id);
        let response = self.client.get(&url).send().await?;
        let page: TodoPage = Self::check_status(response).await?.json().await?;

        debug!("Loaded {} todos from remote service", page.todos.len());
        Ok(page.todos.into_iter().map(RemoteTodo::into_task).collect())
    }

    async fn add_task(
        &self,
        title: &str,
        priority: TaskPriority,
        status: TaskStatus,
    ) -> Result<Task, StorageError> {
        let url = format!("{}/add", self.base_url);
        let body = json!({
            "todo": title,
            "completed": status == TaskStatus::Completed,
            "userId": self.user_id,
        });

        let response = self.client.post(&url).json(&body).send().await?;
        let created: RemoteTodo = Self::check_status(response).await?.json().await?;
        debug!("Remote service created todo {}", created.id);

        // The service cannot store a priority, so reattach the caller's
        // choice to the confirmed record before it reaches the manager.
        let mut task = created.into_task();
        task.priority = priority;
        Ok(task)
    }

    async fn update_title(&self, id: &str, title: &str) -> Result<(), StorageError> {
        let url = format!("{}/{}", self.base_url, id);
        let response = self
            .client
            .put(&url)
            .json(&json!({ "todo": title }))
            .send()
            .await?;
        let _echo: UpdatedTodo = Self::check_status(response).await?.json().await?;
        debug!("Remote service stored new title for todo {}", id);
        Ok(())
    }

    async fn update_status(&self, id: &str, _status: TaskStatus) -> Result<(), StorageError> {
        // Known issue: the flag sent is hardwired to true, so only the
        // planned-to-completed direction ever reaches the service. Kept
        // until the stored clients that rely on it are migrated.
        let url = format!("{}/{}", self.base_url, id);
        let response = self
            .client
            .put(&url)
            .json(&json!({ "completed": true }))
            .send()
            .await?;
        let _echo: UpdatedTodo = Self::check_status(response).await?.json().await?;
        debug!("Remote service stored completion flag for todo {}", id);
        Ok(())
    }

    async fn update_priority(&self, id: &str, priority: TaskPriority) -> Result<(), StorageError> {
        // No remote representation; the collection keeps it client-side.
        debug!(
            "Keeping priority {} for todo {} client-side, remote service has no priority field",
            priority.display_name(),
            id
        );
        Ok(())
    }

    async fn remove_task(&self, id: &str) -> Result<(), StorageError> {
        let url = format!("{}/{}", self.base_url, id);
        let response = self.client.delete(&url).send().await?;
        let deleted: DeletedTodo = Self::check_status(response).await?.json().await?;

        // Success of the transport and status checks is what counts; the
        // flag in the body is informational only.
        if !deleted.is_deleted {
            warn!("Remote service reported isDeleted=false for todo {}", id);
        }
        Ok(())
    }
}
