//! Display filtering and ordering.
//!
//! # Responsibility
//! - Narrow the collection by status, category and free-text search.
//! - Produce the deterministic display order for list views.
//!
//! # Invariants
//! - `filter_tasks` is a pure function of its inputs.
//! - Display order: incomplete before completed, then urgent before
//!   non-urgent, then newest `created_at` first. Tasks with identical
//!   `created_at` are left unordered relative to each other.

use crate::model::task::{Category, Task};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    /// Not yet completed.
    Active,
    Completed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Urgent,
    NonUrgent,
}

/// Combined list-view filter. `search` matches case-insensitively against
/// title and description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: StatusFilter,
    pub category: CategoryFilter,
    pub search: Option<String>,
}

/// Returns the tasks matching `filter`, in display order.
pub fn filter_tasks<'a>(tasks: &'a [Task], filter: &TaskFilter) -> Vec<&'a Task> {
    let mut matched: Vec<&Task> = tasks.iter().filter(|task| matches(task, filter)).collect();
    matched.sort_by(|a, b| display_order(a, b));
    matched
}

/// Comparison implementing the display order chain.
pub fn display_order(a: &Task, b: &Task) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| category_rank(a.category).cmp(&category_rank(b.category)))
        .then_with(|| b.created_at.cmp(&a.created_at))
}

fn category_rank(category: Category) -> u8 {
    match category {
        Category::Urgent => 0,
        Category::NonUrgent => 1,
    }
}

fn matches(task: &Task, filter: &TaskFilter) -> bool {
    match filter.status {
        StatusFilter::Active if task.completed => return false,
        StatusFilter::Completed if !task.completed => return false,
        _ => {}
    }

    match filter.category {
        CategoryFilter::Urgent if task.category != Category::Urgent => return false,
        CategoryFilter::NonUrgent if task.category != Category::NonUrgent => return false,
        _ => {}
    }

    if let Some(search) = &filter.search {
        let needle = search.trim().to_lowercase();
        if !needle.is_empty() {
            let in_title = task.title.to_lowercase().contains(&needle);
            let in_description = task
                .description
                .as_ref()
                .is_some_and(|text| text.to_lowercase().contains(&needle));
            if !in_title && !in_description {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::{display_order, filter_tasks, StatusFilter, TaskFilter};
    use crate::model::task::{Category, Task, TaskDraft};
    use std::cmp::Ordering;

    fn task(title: &str, category: Category, completed: bool) -> Task {
        Task::new(TaskDraft {
            title: title.to_string(),
            description: None,
            due_date: None,
            category,
            completed,
        })
    }

    #[test]
    fn incomplete_sorts_before_completed_regardless_of_category() {
        let done_urgent = task("done", Category::Urgent, true);
        let open_casual = task("open", Category::NonUrgent, false);
        assert_eq!(display_order(&open_casual, &done_urgent), Ordering::Less);
    }

    #[test]
    fn search_matches_description_case_insensitively() {
        let mut groceries = task("shopping", Category::NonUrgent, false);
        groceries.description = Some("Buy MILK and bread".to_string());
        let other = task("laundry", Category::NonUrgent, false);
        let tasks = vec![groceries.clone(), other];

        let filter = TaskFilter {
            search: Some("milk".to_string()),
            ..TaskFilter::default()
        };
        let found = filter_tasks(&tasks, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, groceries.id);
    }

    #[test]
    fn blank_search_matches_everything() {
        let tasks = vec![
            task("one", Category::Urgent, false),
            task("two", Category::NonUrgent, true),
        ];
        let filter = TaskFilter {
            search: Some("   ".to_string()),
            ..TaskFilter::default()
        };
        assert_eq!(filter_tasks(&tasks, &filter).len(), 2);
    }

    #[test]
    fn status_filter_splits_by_completion() {
        let tasks = vec![
            task("open", Category::Urgent, false),
            task("done", Category::Urgent, true),
        ];

        let active = filter_tasks(
            &tasks,
            &TaskFilter {
                status: StatusFilter::Active,
                ..TaskFilter::default()
            },
        );
        assert_eq!(active.len(), 1);
        assert!(!active[0].completed);

        let completed = filter_tasks(
            &tasks,
            &TaskFilter {
                status: StatusFilter::Completed,
                ..TaskFilter::default()
            },
        );
        assert_eq!(completed.len(), 1);
        assert!(completed[0].completed);
    }
}
