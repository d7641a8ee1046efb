//! Id generation port.

use ulid::Ulid;

use crate::domain::TaskId;

use super::Clock;

/// Produces ids for freshly created tasks.
pub trait IdGenerator: Send + Sync {
    fn generate_task_id(&self) -> TaskId;
}

/// ULID-backed generator.
///
/// The timestamp half of the ULID comes from the injected clock, so
/// lexicographic id order follows creation order and a FixedClock pins the
/// prefix under test; the random half still varies per call.
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_task_id(&self) -> TaskId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        let ulid = Ulid::from_parts(timestamp_ms, rand::random());
        TaskId::new(ulid.to_string())
    }
}
