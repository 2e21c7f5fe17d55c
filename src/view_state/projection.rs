//! View projection engine.
//!
//! Pure recomputation of the visible grid from the table and its state:
//!
//! 1. resolve the column order to descriptors
//! 2. stable-sort record positions by the active directive
//! 3. slice the current page
//! 4. format every visible cell through its column's formatter
//!
//! Cells are always looked up by column id, so reordering columns can never
//! shift data between columns.

use crate::model::{ColumnId, Record, Table};
use crate::state::{ColumnOrder, DragController, PageAction, SortDirection, SortState, TableState};

/// One rendered header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    /// Column id.
    pub id: ColumnId,
    /// Display label.
    pub label: String,
    /// Sort indicator, if this is the sorted column.
    pub sort: Option<SortDirection>,
    /// Whether this header is the one being dragged.
    pub dragging: bool,
    /// Whether the drag pointer is over this header.
    pub drop_target: bool,
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Key of the record shown in this row.
    pub key: u64,
    /// Formatted cells, in column display order.
    pub cells: Vec<String>,
}

/// One pagination button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControl {
    /// Action fired by the button.
    pub action: PageAction,
    /// Whether the button is enabled.
    pub enabled: bool,
}

/// Pagination summary for the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    /// Zero-based current page.
    pub page_index: usize,
    /// Total pages.
    pub page_count: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Total records.
    pub record_count: usize,
    /// First, Previous, Next, Last.
    pub controls: [NavControl; 4],
}

impl PaginationView {
    /// Whether moving back a page is possible.
    pub fn can_previous(&self) -> bool {
        self.controls[1].enabled
    }

    /// Whether moving forward a page is possible.
    pub fn can_next(&self) -> bool {
        self.controls[2].enabled
    }
}

/// The computed visible grid for the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    /// Headers in display order.
    pub headers: Vec<HeaderView>,
    /// Rows of the current page in sorted order.
    pub rows: Vec<RowView>,
    /// Footer state.
    pub pagination: PaginationView,
}

impl Projection {
    /// Column ids in display order.
    pub fn column_ids(&self) -> Vec<&ColumnId> {
        self.headers.iter().map(|h| &h.id).collect()
    }

    /// Record keys in row order.
    pub fn row_keys(&self) -> Vec<u64> {
        self.rows.iter().map(|r| r.key).collect()
    }

    /// Cells of one column for the visible rows, addressed by id.
    pub fn column(&self, id: &ColumnId) -> Option<Vec<&str>> {
        let position = self.headers.iter().position(|h| &h.id == id)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.cells[position].as_str())
                .collect(),
        )
    }
}

/// Record load positions in display order for a sort directive.
///
/// `sort_by` is stable and descending reverses each comparison rather than
/// the sorted list, so equal keys keep load order in both directions.
pub fn sorted_positions<R>(table: &Table<R>, sort: &SortState) -> Vec<usize> {
    let mut positions: Vec<usize> = (0..table.len()).collect();

    let Some((column_id, direction)) = sort.directive() else {
        return positions;
    };
    let (Some(column), Some(values)) = (
        table.schema().get(column_id),
        table.column_values(column_id),
    ) else {
        return positions;
    };

    positions.sort_by(|&a, &b| {
        let ordering = column.compare(&values[a], &values[b]);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    positions
}

/// Project the committed state.
pub fn project<R: Record>(table: &Table<R>, state: &TableState) -> Projection {
    build(table, state, &state.column_order, None)
}

/// Project with a drag preview applied to the column order.
///
/// Only the rendered headers and cell order follow the preview; `state`
/// itself is not touched.
pub fn project_with_preview<R: Record>(
    table: &Table<R>,
    state: &TableState,
    drag: &DragController,
) -> Projection {
    let order = preview_order(&state.column_order, drag);
    build(table, state, &order, Some(drag))
}

/// Column order as it would be if the current drag were dropped now.
pub fn preview_order(order: &ColumnOrder, drag: &DragController) -> ColumnOrder {
    let mut preview = order.clone();
    if let (Some(source), Some(target)) = (drag.source(), drag.hover_target()) {
        preview.reorder(source, target);
    }
    preview
}

fn build<R: Record>(
    table: &Table<R>,
    state: &TableState,
    order: &ColumnOrder,
    drag: Option<&DragController>,
) -> Projection {
    let schema = table.schema();
    let columns: Vec<_> = order
        .ids()
        .iter()
        .filter_map(|id| Some((schema.get(id)?, table.column_values(id)?)))
        .collect();

    let headers = columns
        .iter()
        .map(|(column, _)| HeaderView {
            id: column.id().clone(),
            label: column.header().to_string(),
            sort: state.sort.direction_for(column.id()),
            dragging: drag.and_then(|d| d.source()) == Some(column.id()),
            drop_target: drag.and_then(|d| d.hover_target()) == Some(column.id()),
        })
        .collect();

    let positions = sorted_positions(table, &state.sort);
    let range = state.pagination.visible_range();
    let end = range.end.min(positions.len());
    let start = range.start.min(end);
    let records = table.records();

    let rows = positions[start..end]
        .iter()
        .map(|&position| RowView {
            key: records[position].key(),
            cells: columns
                .iter()
                .map(|(column, values)| column.format(&values[position]))
                .collect(),
        })
        .collect();

    Projection {
        headers,
        rows,
        pagination: pagination_view(state),
    }
}

fn pagination_view(state: &TableState) -> PaginationView {
    let p = &state.pagination;
    PaginationView {
        page_index: p.page_index(),
        page_count: p.page_count(),
        page_size: p.page_size(),
        record_count: p.record_count(),
        controls: [
            NavControl {
                action: PageAction::First,
                enabled: p.can_previous(),
            },
            NavControl {
                action: PageAction::Previous,
                enabled: p.can_previous(),
            },
            NavControl {
                action: PageAction::Next,
                enabled: p.can_next(),
            },
            NavControl {
                action: PageAction::Last,
                enabled: p.can_next(),
            },
        ],
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
