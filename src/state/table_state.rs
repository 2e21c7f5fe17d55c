//! Combined table view state and its reducer.
//!
//! Gesture recognition (keyboard, mouse) produces [`Intent`]s; [`reduce`]
//! is the only place the three stores change. Every intent is total: input
//! that cannot apply leaves the state as it was.

use crate::model::ColumnId;
use crate::state::column_order::ColumnOrder;
use crate::state::pagination::{PageAction, Pagination};
use crate::state::sort::SortState;
use tracing::debug;

/// A state transition requested by a gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Move column `from` into the slot of column `to`.
    Reorder {
        /// Dragged column.
        from: ColumnId,
        /// Drop target column.
        to: ColumnId,
    },
    /// Header label clicked: advance that column's sort cycle.
    ToggleSort(ColumnId),
    /// Replace the sort directive outright.
    SetSort(SortState),
    /// Page navigation.
    SetPage(PageAction),
    /// Change rows per page.
    SetPageSize(usize),
}

/// Column order, sort and pagination of one table view.
///
/// Owned by the view; changed only through [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    /// Display order of columns.
    pub column_order: ColumnOrder,
    /// Active sort directive.
    pub sort: SortState,
    /// Current page.
    pub pagination: Pagination,
}

impl TableState {
    /// Initial state at mount: declaration order, unsorted, first page.
    pub fn new(column_ids: Vec<ColumnId>, record_count: usize, page_size: usize) -> Self {
        Self {
            column_order: ColumnOrder::initialize(column_ids),
            sort: SortState::Unsorted,
            pagination: Pagination::new(page_size, record_count),
        }
    }
}

/// Apply one intent.
///
/// # Behavior
/// - `Reorder`: atomic permutation update; no-op for same or unknown ids
/// - `ToggleSort`: three-phase cycle; no-op for unknown columns or an empty table
/// - `SetSort`: replaces the directive; no-op if it names an unknown column
/// - Any sort change returns to the first page
/// - `SetPage` / `SetPageSize`: clamped navigation
pub fn reduce(mut state: TableState, intent: Intent) -> TableState {
    debug!(?intent, "Reducing intent");
    match intent {
        Intent::Reorder { from, to } => {
            state.column_order.reorder(&from, &to);
        }
        Intent::ToggleSort(column) => {
            if state.column_order.contains(&column) && state.pagination.record_count() > 0 {
                let next = state.sort.on_header_click(&column);
                set_sort(&mut state, next);
            }
        }
        Intent::SetSort(next) => {
            let known = match next.directive() {
                Some((column, _)) => state.column_order.contains(column),
                None => true,
            };
            if known {
                set_sort(&mut state, next);
            }
        }
        Intent::SetPage(action) => state.pagination.apply(action),
        Intent::SetPageSize(size) => state.pagination.set_page_size(size),
    }
    state
}

fn set_sort(state: &mut TableState, next: SortState) {
    if state.sort != next {
        state.sort = next;
        state.pagination.go_to_first();
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "table_state_tests.rs"]
mod tests;
