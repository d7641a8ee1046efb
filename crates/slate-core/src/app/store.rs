//! The task store: sole mutator of the collection.

use std::sync::Arc;

use crate::domain::{
    self, FilterMode, SortMode, Task, TaskId, TaskTitle, ViewSelection, normalize_due,
};
use crate::persist::TaskRepository;
use crate::ports::IdGenerator;

use super::projection::{self, TaskView};

/// Owns the authoritative collection plus the current view selection.
///
/// Contract with the view layer:
/// - every mutation is fire and forget: invalid input and unknown ids are
///   silent no-ops, and nothing here returns an error
/// - every mutation ends in the same commit hook (renumber ranks, then save).
///   The save is awaited, so when a call returns the slot already reflects it
///   or the failure was logged and swallowed
/// - selection setters touch session state only and never reach the slot
pub struct TaskStore {
    tasks: Vec<Task>,
    selection: ViewSelection,
    repository: TaskRepository,
    ids: Arc<dyn IdGenerator>,
}

impl TaskStore {
    /// Seed from the slot: read, repair, renumber. Construction goes through
    /// `StoreBuilder::load`.
    pub(crate) async fn load(repository: TaskRepository, ids: Arc<dyn IdGenerator>) -> Self {
        let mut tasks = repository.load().await;
        domain::reconcile(&mut tasks);
        Self {
            tasks,
            selection: ViewSelection::default(),
            repository,
            ids,
        }
    }

    /// Append a task at the end of the manual order.
    ///
    /// A title that trims to empty or over the length cap drops the whole
    /// call; the collection and the slot stay untouched. A malformed due date
    /// only costs the date, not the task.
    pub async fn add(&mut self, raw_title: &str, raw_due: &str) {
        let Ok(title) = TaskTitle::normalize(raw_title) else {
            return;
        };
        let due = normalize_due(raw_due);
        let order = self.tasks.iter().map(|t| t.order).max().unwrap_or(0) + 1;
        let task = Task::new(self.ids.generate_task_id(), title.into_string(), due, order);
        self.tasks.push(task);
        self.commit().await;
    }

    /// Rewrite title and due date of an existing task. Rank and done flag are
    /// untouched; an unknown id or invalid title is a no-op.
    pub async fn edit(&mut self, id: &TaskId, raw_title: &str, raw_due: &str) {
        let Ok(title) = TaskTitle::normalize(raw_title) else {
            return;
        };
        let due = normalize_due(raw_due);
        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) else {
            return;
        };
        task.rename(title.into_string(), due);
        self.commit().await;
    }

    /// Set the done flag to `checked`. Membership and rank are unaffected.
    pub async fn toggle_done(&mut self, id: &TaskId, checked: bool) {
        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) else {
            return;
        };
        task.set_done(checked);
        self.commit().await;
    }

    /// Remove a task; survivors are renumbered preserving relative order.
    pub async fn remove(&mut self, id: &TaskId) {
        let Some(index) = self.tasks.iter().position(|t| &t.id == id) else {
            return;
        };
        self.tasks.remove(index);
        self.commit().await;
    }

    /// Reinsert `id` immediately before `target` in the manual order.
    pub async fn move_before(&mut self, id: &TaskId, target: &TaskId) {
        domain::move_before(&mut self.tasks, id, target);
        self.commit().await;
    }

    pub fn set_query(&mut self, text: &str) {
        self.selection.query = text.to_string();
    }

    pub fn set_filter(&mut self, mode: FilterMode) {
        self.selection.filter = mode;
    }

    pub fn set_sort(&mut self, mode: SortMode) {
        self.selection.sort = mode;
    }

    /// Current display sequence under the active selection.
    pub fn view(&self) -> Vec<TaskView> {
        projection::project(&self.tasks, &self.selection)
    }

    pub fn selection(&self) -> &ViewSelection {
        &self.selection
    }

    /// Live collection size before any filtering. The view layer uses this
    /// for its empty-state hint.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Uniform post-mutation hook: restore the rank invariant, then save.
    /// Renumbering an already dense collection changes nothing, so
    /// non-structural mutations pass through unaffected.
    async fn commit(&mut self) {
        domain::reconcile(&mut self.tasks);
        self.repository.save(&self.tasks).await;
    }
}
