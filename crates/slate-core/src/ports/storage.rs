//! Storage slot port.

use async_trait::async_trait;
use thiserror::Error;

/// One named key/value slot holding the serialized collection.
///
/// The payload is an opaque string at this seam; encoding and repair live in
/// the persist layer above. `read`/`write` are async so a slot with real I/O
/// latency fits behind the same trait as the in-memory one.
#[async_trait]
pub trait StorageSlot: Send + Sync {
    /// Current payload, or None when the slot has never been written.
    async fn read(&self) -> Result<Option<String>, SlotError>;

    /// Replace the payload wholesale.
    async fn write(&self, payload: &str) -> Result<(), SlotError>;
}

/// Storage-layer failure. The persist layer swallows these on save and falls
/// back to an empty collection on load; they never cross the store boundary.
#[derive(Debug, Error)]
pub enum SlotError {
    #[error("slot io: {0}")]
    Io(String),

    #[error("slot full: {0}")]
    Full(String),
}
