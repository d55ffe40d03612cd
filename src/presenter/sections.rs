// src/presenter/sections.rs

//! Pure derivation of the sectioned view from the flat task collection.

use crate::tasks::types::{Task, TaskPriority, TaskStatus};

/// How the presented list is grouped. The default matches what a fresh
/// screen shows: sections by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    ByStatus,
    ByPriority,
}

/// Groups the flat collection into display sections for `mode`.
///
/// The section count is fixed by the mode (one per status or one per
/// priority), empty sections included. Within a section tasks are ordered
/// by the other axis; ties keep the input order, so feeding the manager's
/// title-sorted collection yields title order inside equal groups. The
/// result is a fresh copy each call and two calls over the same input
/// produce identical output.
pub fn sectioned(tasks: &[Task], mode: SortMode) -> Vec<Vec<Task>> {
    match mode {
        SortMode::ByStatus => TaskStatus::ALL
            .iter()
            .map(|status| {
                let mut section: Vec<Task> = tasks
                    .iter()
                    .filter(|task| task.status == *status)
                    .cloned()
                    .collect();
                section.sort_by(|a, b| a.priority.cmp(&b.priority));
                section
            })
            .collect(),
        SortMode::ByPriority => TaskPriority::ALL
            .iter()
            .map(|priority| {
                let mut section: Vec<Task> = tasks
                    .iter()
                    .filter(|task| task.priority == *priority)
                    .cloned()
                    .collect();
                section.sort_by(|a, b| a.status.cmp(&b.status));
                section
            })
            .collect(),
    }
}

/// Title of section `index` under `mode`, if the index is in range.
pub fn section_title(mode: SortMode, index: usize) -> Option<&'static str> {
    match mode {
        SortMode::ByStatus => TaskStatus::ALL.get(index).map(|s| s.display_name()),
        SortMode::ByPriority => TaskPriority::ALL.get(index).map(|p| p.display_name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::types::Task;

    fn task(id: &str, title: &str, priority: TaskPriority, status: TaskStatus) -> Task {
        Task::new(id, title, priority, status)
    }

    #[test]
    fn by_status_groups_and_orders_by_priority_within_sections() {
        let tasks = vec![
            task("1", "Buy milk", TaskPriority::Normal, TaskStatus::Planned),
            task("2", "Call mom", TaskPriority::Important, TaskStatus::Planned),
            task("3", "File taxes", TaskPriority::Normal, TaskStatus::Completed),
        ];

        let sections = sectioned(&tasks, SortMode::ByStatus);

        assert_eq!(sections.len(), 2);
        let planned: Vec<&str> = sections[0].iter().map(|t| t.title.as_str()).collect();
        assert_eq!(planned, vec!["Call mom", "Buy milk"]);
        let completed: Vec<&str> = sections[1].iter().map(|t| t.title.as_str()).collect();
        assert_eq!(completed, vec!["File taxes"]);
    }

    #[test]
    fn by_priority_groups_and_orders_by_status_within_sections() {
        let tasks = vec![
            task("1", "Buy milk", TaskPriority::Normal, TaskStatus::Completed),
            task("2", "Call mom", TaskPriority::Normal, TaskStatus::Planned),
            task("3", "Walk dog", TaskPriority::Important, TaskStatus::Planned),
        ];

        let sections = sectioned(&tasks, SortMode::ByPriority);

        assert_eq!(sections.len(), 2);
        let important: Vec<&str> = sections[0].iter().map(|t| t.title.as_str()).collect();
        assert_eq!(important, vec!["Walk dog"]);
        let normal: Vec<&str> = sections[1].iter().map(|t| t.title.as_str()).collect();
        assert_eq!(normal, vec!["Call mom", "Buy milk"]);
    }

    #[test]
    fn empty_sections_are_kept() {
        let tasks = vec![task(
            "1",
            "Buy milk",
            TaskPriority::Normal,
            TaskStatus::Planned,
        )];

        let sections = sectioned(&tasks, SortMode::ByStatus);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].len(), 1);
        assert!(sections[1].is_empty());
    }

    #[test]
    fn ties_keep_input_order() {
        // Equal priority and status throughout: input order must survive.
        let tasks = vec![
            task("1", "Apples", TaskPriority::Normal, TaskStatus::Planned),
            task("2", "Bread", TaskPriority::Normal, TaskStatus::Planned),
            task("3", "Cheese", TaskPriority::Normal, TaskStatus::Planned),
        ];

        let sections = sectioned(&tasks, SortMode::ByStatus);
        let titles: Vec<&str> = sections[0].iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Apples", "Bread", "Cheese"]);
    }

    #[test]
    fn sectioning_is_idempotent() {
        let tasks = vec![
            task("1", "Buy milk", TaskPriority::Normal, TaskStatus::Planned),
            task("2", "Call mom", TaskPriority::Important, TaskStatus::Completed),
        ];

        for mode in [SortMode::ByStatus, SortMode::ByPriority] {
            assert_eq!(sectioned(&tasks, mode), sectioned(&tasks, mode));
        }
    }

    #[test]
    fn section_titles_follow_the_mode() {
        assert_eq!(section_title(SortMode::ByStatus, 0), Some("planned"));
        assert_eq!(section_title(SortMode::ByStatus, 1), Some("completed"));
        assert_eq!(section_title(SortMode::ByPriority, 0), Some("important"));
        assert_eq!(section_title(SortMode::ByPriority, 1), Some("normal"));
        assert_eq!(section_title(SortMode::ByStatus, 2), None);
    }
}
