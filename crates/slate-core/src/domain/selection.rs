//! View selection (query, status filter, sort mode).

/// Which tasks the view keeps, by completion status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Done,
    Todo,
}

/// How the projected sequence is ordered.
///
/// Manual rank matters only in `Manual`; both date modes ignore it and push
/// undated tasks to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Manual,
    DateAscending,
    DateDescending,
}

/// Session-local display state. Lives beside the collection in the store and
/// is never persisted.
#[derive(Debug, Clone, Default)]
pub struct ViewSelection {
    pub query: String,
    pub filter: FilterMode,
    pub sort: SortMode,
}
