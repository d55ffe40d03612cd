// src/tasks/storage/remote/wire.rs

//! Wire format of the remote todos service. The service models a task as a
//! title plus a completion flag under a numeric id; it has no priority
//! field, so priorities never cross this boundary.

use serde::Deserialize;

use crate::tasks::types::{Task, TaskPriority, TaskStatus};

/// Page envelope returned by `GET {base}/user/{userId}`. Paging fields are
/// present on the wire but the full set fits one page for our user ids.
#[derive(Debug, Deserialize)]
pub(crate) struct TodoPage {
    pub todos: Vec<RemoteTodo>,
}

/// One todo record as the service returns it.
#[derive(Debug, Deserialize)]
pub(crate) struct RemoteTodo {
    pub id: i64,
    pub todo: String,
    pub completed: bool,
}

impl RemoteTodo {
    /// Converts a wire record into a task. The service knows nothing about
    /// priorities, so every converted task starts out `Normal`.
    pub fn into_task(self) -> Task {
        let status = if self.completed {
            TaskStatus::Completed
        } else {
            TaskStatus::Planned
        };
        Task::new(self.id.to_string(), self.todo, TaskPriority::Normal, status)
    }
}

/// Body of a successful `PUT {base}/{id}` answer, echoing the stored record.
#[derive(Debug, Deserialize)]
pub(crate) struct UpdatedTodo {
    #[allow(dead_code)]
    pub todo: String,
    #[allow(dead_code)]
    pub completed: bool,
}

/// Body of a successful `DELETE {base}/{id}` answer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeletedTodo {
    pub is_deleted: bool,
}
