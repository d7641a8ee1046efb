//! Manual-rank reconciliation.
//!
//! Invariant: sorting the live collection by `order` must yield exactly
//! 1..=N, no gaps, no duplicates. Structural mutations (add, delete, move)
//! restore it through `reconcile`; a toggle or field edit cannot break it.

use super::{Task, TaskId};

/// Renumber the collection to a dense 1-based rank.
///
/// The sort is stable, so ties on `order` (possible after rehydrating a
/// corrupted slot) keep their current array position. Running this twice in a
/// row changes nothing the second time.
///
/// The vec itself ends up sorted by rank, so array position and manual rank
/// agree from here on. `move_before` relies on that.
pub fn reconcile(tasks: &mut [Task]) {
    tasks.sort_by_key(|task| task.order);
    for (index, task) in tasks.iter_mut().enumerate() {
        task.order = index as u32 + 1;
    }
}

/// Reinsert `id` immediately before `target`; `target` and everything after
/// it shift down one rank.
///
/// Unknown ids and `id == target` are no-ops, matching the drag gesture this
/// models: dropping a row onto itself, or onto a row that just disappeared,
/// does nothing.
pub fn move_before(tasks: &mut Vec<Task>, id: &TaskId, target: &TaskId) {
    if id == target {
        return;
    }
    let (Some(from), Some(to)) = (position(tasks, id), position(tasks, target)) else {
        return;
    };

    let task = tasks.remove(from);
    // Removing an earlier row shifts the target left by one.
    let to = if from < to { to - 1 } else { to };
    tasks.insert(to, task);
    reconcile(tasks);
}

fn position(tasks: &[Task], id: &TaskId) -> Option<usize> {
    tasks.iter().position(|task| &task.id == id)
}
