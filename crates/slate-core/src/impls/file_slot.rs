//! File-backed slot.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::ports::{SlotError, StorageSlot};

/// One JSON document at a fixed filesystem path.
///
/// Writes go through a sibling temp file and a rename, so an interrupted
/// write leaves the previous payload intact instead of a truncated file.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut raw = self.path.as_os_str().to_owned();
        raw.push(".tmp");
        PathBuf::from(raw)
    }
}

#[async_trait]
impl StorageSlot for FileSlot {
    async fn read(&self) -> Result<Option<String>, SlotError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SlotError::Io(e.to_string())),
        }
    }

    async fn write(&self, payload: &str) -> Result<(), SlotError> {
        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, payload)
            .await
            .map_err(|e| SlotError::Io(e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| SlotError::Io(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_reads_as_empty_slot() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("tasks.json"));
        assert_eq!(slot.read().await.unwrap(), None);
    }

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("tasks.json"));

        slot.write(r#"[{"id":"a"}]"#).await.unwrap();
        assert_eq!(
            slot.read().await.unwrap().as_deref(),
            Some(r#"[{"id":"a"}]"#)
        );
    }

    #[tokio::test]
    async fn rewrite_replaces_the_whole_payload() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("tasks.json"));

        slot.write("first").await.unwrap();
        slot.write("second").await.unwrap();
        assert_eq!(slot.read().await.unwrap().as_deref(), Some("second"));
    }
}
