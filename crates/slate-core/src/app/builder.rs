//! Store wiring.

use std::sync::Arc;

use thiserror::Error;

use crate::persist::TaskRepository;
use crate::ports::{IdGenerator, StorageSlot, SystemClock, UlidGenerator};

use super::store::TaskStore;

/// Wires the store's ports and runs the load flow.
///
/// ```ignore
/// let store = StoreBuilder::new()
///     .slot(Arc::new(FileSlot::new("slate.json")))
///     .load()
///     .await?;
/// ```
///
/// The id generator defaults to `UlidGenerator<SystemClock>`. The slot has no
/// default and `load` fails fast without one, before any state exists.
pub struct StoreBuilder {
    slot: Option<Arc<dyn StorageSlot>>,
    ids: Option<Arc<dyn IdGenerator>>,
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("no storage slot was provided")]
    MissingSlot,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self {
            slot: None,
            ids: None,
        }
    }

    pub fn slot(mut self, slot: Arc<dyn StorageSlot>) -> Self {
        self.slot = Some(slot);
        self
    }

    pub fn id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    /// Read + repair + renumber, then hand back a ready store.
    pub async fn load(self) -> Result<TaskStore, BuildError> {
        let slot = self.slot.ok_or(BuildError::MissingSlot)?;
        let ids = self
            .ids
            .unwrap_or_else(|| Arc::new(UlidGenerator::new(SystemClock)));
        Ok(TaskStore::load(TaskRepository::new(slot), ids).await)
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
