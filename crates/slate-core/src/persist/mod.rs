//! Durable round-trip between the store and a storage slot.
//!
//! Save is best effort: a failing slot is logged and swallowed, and the
//! in-memory collection stays authoritative for the rest of the session.
//! Load never fails either: an unreadable or unrecognizable payload starts
//! the session empty, and individual entries are repaired field by field
//! (see `repair`).

mod repair;

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{self, Task};
use crate::ports::StorageSlot;

/// Persisted record layout. camelCase field names match the document format
/// the slot holds; there is no schema version, absent or malformed fields are
/// repaired on load instead.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PersistedTask<'a> {
    id: &'a str,
    title: &'a str,
    due_date: Option<NaiveDate>,
    done: bool,
    order: u32,
}

impl<'a> From<&'a Task> for PersistedTask<'a> {
    fn from(task: &'a Task) -> Self {
        Self {
            id: task.id.as_str(),
            title: &task.title,
            due_date: task.due,
            done: task.done,
            order: task.order,
        }
    }
}

/// Serializes the collection into a slot and rehydrates it back.
pub struct TaskRepository {
    slot: Arc<dyn StorageSlot>,
}

impl TaskRepository {
    pub fn new(slot: Arc<dyn StorageSlot>) -> Self {
        Self { slot }
    }

    /// Write the full collection into the slot.
    ///
    /// Failures are swallowed: the next load simply misses the latest
    /// mutations.
    pub async fn save(&self, tasks: &[Task]) {
        let records: Vec<PersistedTask<'_>> = tasks.iter().map(PersistedTask::from).collect();
        let payload = match serde_json::to_string(&records) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "collection failed to serialize, skipping save");
                return;
            }
        };
        if let Err(e) = self.slot.write(&payload).await {
            warn!(error = %e, bytes = payload.len(), "slot write failed, keeping in-memory state");
        }
    }

    /// Rehydrate the collection.
    ///
    /// The top level must be a JSON array; anything else starts the session
    /// empty. Surviving entries are sorted by their repaired rank (stable, so
    /// equal ranks keep source order) and then renumbered, so the dense rank
    /// invariant holds no matter what was stored.
    pub async fn load(&self) -> Vec<Task> {
        let raw = match self.slot.read().await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "slot read failed, starting empty");
                return Vec::new();
            }
        };
        let value: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                debug!(error = %e, "slot payload is not valid JSON, starting empty");
                return Vec::new();
            }
        };
        let Some(entries) = value.as_array() else {
            debug!("slot payload is not an array, starting empty");
            return Vec::new();
        };

        let mut repaired: Vec<repair::RepairedEntry> = entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| repair::repair_entry(index, entry))
            .collect();
        repaired.sort_by(|a, b| a.rank.partial_cmp(&b.rank).unwrap_or(Ordering::Equal));

        let mut tasks: Vec<Task> = repaired
            .into_iter()
            .map(repair::RepairedEntry::into_task)
            .collect();
        domain::reconcile(&mut tasks);
        tasks
    }
}
