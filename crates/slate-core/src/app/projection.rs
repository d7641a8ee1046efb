//! Read-only projection of the collection for display.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{FilterMode, SortMode, Task, ViewSelection};

/// One row of the projected view.
///
/// Plain serializable data so any view layer can render it; field names match
/// the persisted document layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    pub id: String,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub done: bool,
    pub order: u32,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.as_str().to_string(),
            title: task.title.clone(),
            due_date: task.due,
            done: task.done,
            order: task.order,
        }
    }
}

/// Derive the display sequence.
///
/// Applied in fixed order: text query, then status filter, then sort. Always
/// recomputed from scratch; the input collection is never touched.
///
/// The query matches as a case-insensitive substring of the title (Unicode
/// lowercasing, so Cyrillic and friends fold too). Both date modes push
/// undated tasks to the end and fall back to the manual rank on equal dates,
/// so the result depends only on the tasks' fields, not on how the caller's
/// slice happens to be arranged.
pub fn project(tasks: &[Task], selection: &ViewSelection) -> Vec<TaskView> {
    let query = selection.query.trim().to_lowercase();

    let mut rows: Vec<&Task> = tasks
        .iter()
        .filter(|task| query.is_empty() || task.title.to_lowercase().contains(&query))
        .filter(|task| match selection.filter {
            FilterMode::All => true,
            FilterMode::Done => task.done,
            FilterMode::Todo => !task.done,
        })
        .collect();

    match selection.sort {
        SortMode::Manual => rows.sort_by_key(|task| task.order),
        SortMode::DateAscending => rows.sort_by(|a, b| compare_due_asc(a, b)),
        SortMode::DateDescending => rows.sort_by(|a, b| compare_due_desc(a, b)),
    }

    rows.into_iter().map(TaskView::from).collect()
}

fn compare_due_asc(a: &Task, b: &Task) -> Ordering {
    let by_date = match (a.due, b.due) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_date.then_with(|| a.order.cmp(&b.order))
}

fn compare_due_desc(a: &Task, b: &Task) -> Ordering {
    let by_date = match (a.due, b.due) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_date.then_with(|| a.order.cmp(&b.order))
}
