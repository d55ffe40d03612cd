// src/tasks/storage/sqlite/mapping.rs

//! Mapping between the task enums and the string names stored in rows. Kept
//! at the persistence boundary so the in-memory types can evolve without
//! silently changing what existing databases mean.

use crate::tasks::types::{TaskPriority, TaskStatus};

pub(crate) fn priority_name(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::Important => "important",
        TaskPriority::Normal => "normal",
    }
}

pub(crate) fn priority_from_name(name: &str) -> Option<TaskPriority> {
    match name {
        "important" => Some(TaskPriority::Important),
        "normal" => Some(TaskPriority::Normal),
        _ => None,
    }
}

pub(crate) fn status_name(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Planned => "planned",
        TaskStatus::Completed => "completed",
    }
}

pub(crate) fn status_from_name(name: &str) -> Option<TaskStatus> {
    match name {
        "planned" => Some(TaskStatus::Planned),
        "completed" => Some(TaskStatus::Completed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_map_back_to_the_same_variant() {
        for priority in TaskPriority::ALL {
            assert_eq!(priority_from_name(priority_name(priority)), Some(priority));
        }
        for status in TaskStatus::ALL {
            assert_eq!(status_from_name(status_name(status)), Some(status));
        }
    }

    #[test]
    fn unknown_names_do_not_map() {
        assert_eq!(priority_from_name("urgent"), None);
        assert_eq!(priority_from_name("Important"), None);
        assert_eq!(status_from_name("archived"), None);
        assert_eq!(status_from_name(""), None);
    }
}
