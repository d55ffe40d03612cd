// src/presenter/mod.rs

//! Presentation layer: translates user intents into manager calls and
//! pushes freshly derived sectioned snapshots (or errors) to the view.

mod sections;

pub use sections::{SortMode, section_title, sectioned};

use tracing::debug;

use crate::tasks::error::TaskError;
use crate::tasks::manager::TaskManager;
use crate::tasks::types::{Task, TaskPriority, TaskStatus};

/// Rendering boundary. The presenter calls these from whatever task it runs
/// on; implementations marshal to their own rendering context if they have
/// one.
pub trait TaskListView: Send + Sync {
    /// Replaces the displayed list with a complete sectioned snapshot.
    fn display(&self, sections: Vec<Vec<Task>>);

    /// Shows a user-visible error. `message` carries detail when there is
    /// any beyond the title.
    fn display_error(&self, title: &str, message: Option<&str>);
}

/// Drives one task list: receives intents, talks to the manager and
/// republishes the whole sectioned snapshot after every mutation. On a
/// failed mutation the view gets an error instead and keeps showing the
/// previous snapshot.
pub struct TaskListPresenter<V: TaskListView> {
    view: V,
    manager: TaskManager,
    sorted_by: SortMode,
}

impl<V: TaskListView> TaskListPresenter<V> {
    /// Presenter with the default grouping (by status).
    pub fn new(view: V, manager: TaskManager) -> Self {
        Self::with_sort_mode(view, manager, SortMode::default())
    }

    /// Presenter with an explicit initial grouping. Nothing is displayed
    /// until the first intent arrives.
    pub fn with_sort_mode(view: V, manager: TaskManager, mode: SortMode) -> Self {
        Self {
            view,
            manager,
            sorted_by: mode,
        }
    }

    /// The active grouping.
    pub fn sort_mode(&self) -> SortMode {
        self.sorted_by
    }

    /// Read-only snapshot of the flat collection, title-ascending.
    pub fn tasks(&self) -> &[Task] {
        self.manager.tasks()
    }

    /// Freshly derived sectioned snapshot of the current collection.
    pub fn sections(&self) -> Vec<Vec<Task>> {
        sectioned(self.manager.tasks(), self.sorted_by)
    }

    /// Title for a section index under the active grouping.
    pub fn section_title(&self, index: usize) -> Option<&'static str> {
        section_title(self.sorted_by, index)
    }

    /// Reloads the collection from the backend and republishes.
    pub async fn load(&mut self) {
        let result = self.manager.load_tasks().await;
        self.publish(result);
    }

    /// Publishes the current snapshot without touching the backend; the
    /// initial paint when the collection is already populated.
    pub fn republish(&self) {
        self.view.display(self.sections());
    }

    /// Creates a task from explicit fields.
    pub async fn add_task(&mut self, title: &str, priority: TaskPriority, status: TaskStatus) {
        let result = self.manager.add_task(title, priority, status).await;
        self.publish(result);
    }

    /// Saves the outcome of an edit screen: updates the existing record
    /// field by field when the id is known, otherwise creates a new task
    /// from the given fields.
    pub async fn save_task(&mut self, task: Task) {
        let exists = self.manager.tasks().iter().any(|t| t.id == task.id);
        let result = if exists {
            self.apply_edit(&task).await
        } else {
            self.manager
                .add_task(&task.title, task.priority, task.status)
                .await
        };
        self.publish(result);
    }

    /// Sets the status of a task directly (the tap-to-complete path).
    pub async fn change_status(&mut self, id: &str, status: TaskStatus) {
        let result = self.manager.update_status(id, status).await;
        self.publish(result);
    }

    /// Moves a task into another section of the active grouping. This is a
    /// field update, never a reorder: the destination section implies the
    /// new status or priority. Out-of-range sections are ignored.
    pub async fn move_task(&mut self, id: &str, section: usize) {
        match self.sorted_by {
            SortMode::ByStatus => {
                if let Some(status) = TaskStatus::ALL.get(section).copied() {
                    self.change_status(id, status).await;
                } else {
                    debug!("Ignoring move of task {} to unknown section {}", id, section);
                }
            }
            SortMode::ByPriority => {
                if let Some(priority) = TaskPriority::ALL.get(section).copied() {
                    let result = self.manager.update_priority(id, priority).await;
                    self.publish(result);
                } else {
                    debug!("Ignoring move of task {} to unknown section {}", id, section);
                }
            }
        }
    }

    /// Deletes a task.
    pub async fn remove_task(&mut self, id: &str) {
        let result = self.manager.remove_task(id).await;
        self.publish(result);
    }

    /// Switches the grouping and republishes immediately; no backend round
    /// trip is involved.
    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.sorted_by = mode;
        self.view.display(self.sections());
    }

    async fn apply_edit(&mut self, task: &Task) -> Result<(), TaskError> {
        self.manager.update_title(&task.id, &task.title).await?;
        self.manager.update_status(&task.id, task.status).await?;
        self.manager.update_priority(&task.id, task.priority).await?;
        Ok(())
    }

    fn publish(&self, result: Result<(), TaskError>) {
        match result {
            Ok(()) => self.view.display(self.sections()),
            Err(e) => self.view.display_error(&e.to_string(), None),
        }
    }
}
