//! In-memory slot for tests and development.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use crate::ports::{SlotError, StorageSlot};

/// Single-process slot.
///
/// The lock is held only for the copy, never across an await. The
/// `fail_writes` toggle lets tests exercise the swallow-on-save policy.
#[derive(Debug, Default)]
pub struct MemorySlot {
    payload: Mutex<Option<String>>,
    fail_writes: AtomicBool,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload a payload, e.g. a hand-written corrupted document.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Mutex::new(Some(payload.into())),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make every subsequent write fail with `SlotError::Full`. Models the
    /// quota-exceeded case of browser-style key/value storage.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }

    /// Raw payload as last written.
    pub fn snapshot(&self) -> Option<String> {
        self.payload.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorageSlot for MemorySlot {
    async fn read(&self) -> Result<Option<String>, SlotError> {
        Ok(self.payload.lock().unwrap().clone())
    }

    async fn write(&self, payload: &str) -> Result<(), SlotError> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(SlotError::Full("simulated quota".into()));
        }
        *self.payload.lock().unwrap() = Some(payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_back_what_was_written() {
        let slot = MemorySlot::new();
        assert_eq!(slot.read().await.unwrap(), None);

        slot.write("[1,2,3]").await.unwrap();
        assert_eq!(slot.read().await.unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[tokio::test]
    async fn failing_writes_keep_the_previous_payload() {
        let slot = MemorySlot::with_payload("old");
        slot.fail_writes(true);

        let err = slot.write("new").await.unwrap_err();
        assert!(matches!(err, SlotError::Full(_)));
        assert_eq!(slot.snapshot().as_deref(), Some("old"));
    }
}
