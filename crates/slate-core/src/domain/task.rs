//! Task record.

use chrono::NaiveDate;

use super::TaskId;

/// A single task in the collection.
///
/// Field notes:
/// - `title` is a plain String. The add/edit path runs input through
///   `TaskTitle` first, but rehydration can reintroduce values that check
///   would reject and the record is kept regardless.
/// - `order` is the manual display rank. The store keeps it dense and unique
///   (1..=N over the live collection) after every structural mutation; it is
///   only meaningful under the manual sort mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub due: Option<NaiveDate>,
    pub done: bool,
    pub order: u32,
}

impl Task {
    pub fn new(id: TaskId, title: String, due: Option<NaiveDate>, order: u32) -> Self {
        Self {
            id,
            title,
            due,
            done: false,
            order,
        }
    }

    /// Replace title and due date in place. Rank and done flag are untouched.
    pub fn rename(&mut self, title: String, due: Option<NaiveDate>) {
        self.title = title;
        self.due = due;
    }

    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }
}
