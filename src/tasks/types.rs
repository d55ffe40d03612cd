// src/tasks/types.rs

//! Core task types shared by the manager, the storage backends and the
//! presenter. The serialized enum names double as the persisted vocabulary,
//! so renaming a variant is a storage format change.

use serde::{Deserialize, Serialize};

/// Priority of a task. `Important` carries the lower ordinal and sorts first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Important,
    Normal,
}

impl TaskPriority {
    /// All priorities in declared order. This is the section order of the
    /// by-priority view.
    pub const ALL: [TaskPriority; 2] = [TaskPriority::Important, TaskPriority::Normal];

    /// Human-readable name, also used as a section title.
    pub fn display_name(self) -> &'static str {
        match self {
            TaskPriority::Important => "important",
            TaskPriority::Normal => "normal",
        }
    }
}

/// Completion status of a task. Tasks move between `Planned` and `Completed`
/// explicitly; there are no other states.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Planned,
    Completed,
}

impl TaskStatus {
    /// All statuses in declared order. This is the section order of the
    /// by-status view.
    pub const ALL: [TaskStatus; 2] = [TaskStatus::Planned, TaskStatus::Completed];

    /// Human-readable name, also used as a section title.
    pub fn display_name(self) -> &'static str {
        match self {
            TaskStatus::Planned => "planned",
            TaskStatus::Completed => "completed",
        }
    }
}

/// A single to-do item. The id is assigned by the storage backend when the
/// task is created and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        priority: TaskPriority,
        status: TaskStatus,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            priority,
            status,
        }
    }
}
