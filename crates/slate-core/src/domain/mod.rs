//! Domain model (ids, task record, normalization, ordering, selection).

pub mod due;
pub mod ids;
pub mod order;
pub mod selection;
pub mod task;
pub mod title;

pub use self::due::normalize_due;
pub use self::ids::TaskId;
pub use self::order::{move_before, reconcile};
pub use self::selection::{FilterMode, SortMode, ViewSelection};
pub use self::task::Task;
pub use self::title::{TaskTitle, TitleError};
