//! Sort store: a single-column, three-phase sort state machine.

use crate::model::ColumnId;
use std::fmt;

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

/// Current sort directive.
///
/// At most one column is sorted at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortState {
    /// Records in load order.
    #[default]
    Unsorted,
    /// Sorted ascending by the column.
    Ascending(ColumnId),
    /// Sorted descending by the column.
    Descending(ColumnId),
}

impl SortState {
    /// Build a state from a column and direction.
    pub fn by(column: ColumnId, direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => SortState::Ascending(column),
            SortDirection::Descending => SortState::Descending(column),
        }
    }

    /// Transition for a click on the header of `column`.
    ///
    /// Same column cycles Ascending → Descending → Unsorted. Any other
    /// column restarts at Ascending with no memory of the previous one.
    pub fn on_header_click(&self, column: &ColumnId) -> SortState {
        match self {
            SortState::Ascending(current) if current == column => {
                SortState::Descending(current.clone())
            }
            SortState::Descending(current) if current == column => SortState::Unsorted,
            _ => SortState::Ascending(column.clone()),
        }
    }

    /// Active column and direction, if sorted.
    pub fn directive(&self) -> Option<(&ColumnId, SortDirection)> {
        match self {
            SortState::Unsorted => None,
            SortState::Ascending(column) => Some((column, SortDirection::Ascending)),
            SortState::Descending(column) => Some((column, SortDirection::Descending)),
        }
    }

    /// Direction applied to `column`, or `None` if it is not the sorted one.
    pub fn direction_for(&self, column: &ColumnId) -> Option<SortDirection> {
        self.directive()
            .filter(|(active, _)| *active == column)
            .map(|(_, direction)| direction)
    }
}
