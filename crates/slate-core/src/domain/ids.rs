//! Task identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque task identifier.
///
/// Freshly created tasks get a ULID string from the IdGenerator port, but a
/// rehydrated collection keeps whatever ids the slot held (including ids that
/// were stored as numbers and coerced to strings), so the inner
/// representation is an arbitrary string rather than a parsed ULID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
