//! Application layer: the store, its wiring, and the projection.

pub mod builder;
pub mod projection;
pub mod store;

pub use self::builder::{BuildError, StoreBuilder};
pub use self::projection::{TaskView, project};
pub use self::store::TaskStore;
