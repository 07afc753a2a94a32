//! Calendar grouping and dashboard summary views.
//!
//! # Responsibility
//! - Group tasks by due-date calendar day for date-to-tasks lookup.
//! - Aggregate the counters the dashboard page renders.
//!
//! # Invariants
//! - A task without a due date never appears in the calendar index.
//! - All views here are pure; percentages on an empty denominator are 0.

use crate::model::task::{Category, Task};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Groups tasks by due date at calendar-day granularity.
///
/// Within a day, tasks keep insertion order.
pub fn due_date_index(tasks: &[Task]) -> BTreeMap<NaiveDate, Vec<&Task>> {
    let mut index: BTreeMap<NaiveDate, Vec<&Task>> = BTreeMap::new();
    for task in tasks {
        if let Some(due_date) = task.due_date {
            index.entry(due_date).or_default().push(task);
        }
    }
    index
}

/// Counters backing the dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total: usize,
    pub completed: usize,
    /// Urgent tasks still open.
    pub open_urgent: usize,
    /// Completed share of all tasks, percent, rounded to nearest.
    pub completion_rate_percent: u32,
    /// Tasks carrying a due date.
    pub scheduled: usize,
    pub scheduled_completed: usize,
    /// Completed share of due-dated tasks, percent, rounded to nearest.
    pub scheduled_completion_rate_percent: u32,
}

/// Computes dashboard counters over the full collection.
pub fn summarize(tasks: &[Task]) -> DashboardSummary {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.completed).count();
    let open_urgent = tasks
        .iter()
        .filter(|task| task.category == Category::Urgent && !task.completed)
        .count();
    let scheduled = tasks.iter().filter(|task| task.due_date.is_some()).count();
    let scheduled_completed = tasks
        .iter()
        .filter(|task| task.due_date.is_some() && task.completed)
        .count();

    DashboardSummary {
        total,
        completed,
        open_urgent,
        completion_rate_percent: percentage(completed, total),
        scheduled,
        scheduled_completed,
        scheduled_completion_rate_percent: percentage(scheduled_completed, scheduled),
    }
}

/// First `limit` tasks in insertion order, for the dashboard's recent list.
pub fn recent(tasks: &[Task], limit: usize) -> &[Task] {
    &tasks[..tasks.len().min(limit)]
}

fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}
