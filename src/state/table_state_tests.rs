//! Tests for the table reducer.
//!
//! Tests verify that each intent reaches the right store and that degenerate
//! input leaves the whole state unchanged.

use super::*;
use crate::state::sort::SortDirection;

// ===== Test Helpers =====

fn col(s: &str) -> ColumnId {
    ColumnId::from(s)
}

fn state(record_count: usize) -> TableState {
    TableState::new(
        vec![col("id"), col("name"), col("email")],
        record_count,
        5,
    )
}

fn order_names(state: &TableState) -> Vec<&str> {
    state
        .column_order
        .ids()
        .iter()
        .map(|c| c.as_str())
        .collect()
}

// ===== Initial state =====

#[test]
fn new_state_is_unsorted_on_first_page_in_declared_order() {
    let s = state(12);
    assert_eq!(s.sort, SortState::Unsorted);
    assert_eq!(s.pagination.page_index(), 0);
    assert_eq!(s.pagination.page_count(), 3);
    assert_eq!(order_names(&s), vec!["id", "name", "email"]);
}

// ===== Reorder =====

#[test]
fn reorder_moves_column() {
    let s = reduce(
        state(12),
        Intent::Reorder {
            from: col("email"),
            to: col("id"),
        },
    );
    assert_eq!(order_names(&s), vec!["email", "id", "name"]);
}

#[test]
fn reorder_does_not_touch_sort_or_page() {
    let mut s = reduce(state(12), Intent::ToggleSort(col("name")));
    s = reduce(s, Intent::SetPage(PageAction::Next));
    let before = s.clone();

    let after = reduce(
        s,
        Intent::Reorder {
            from: col("name"),
            to: col("id"),
        },
    );
    assert_eq!(after.sort, before.sort);
    assert_eq!(after.pagination, before.pagination);
}

#[test]
fn reorder_with_unknown_id_leaves_state_unchanged() {
    let before = state(12);
    let after = reduce(
        before.clone(),
        Intent::Reorder {
            from: col("ghost"),
            to: col("id"),
        },
    );
    assert_eq!(after, before);
}

// ===== Sorting =====

#[test]
fn toggle_sort_cycles_and_resets_page() {
    let mut s = reduce(state(12), Intent::SetPage(PageAction::Last));
    assert_eq!(s.pagination.page_index(), 2);

    s = reduce(s, Intent::ToggleSort(col("name")));
    assert_eq!(s.sort, SortState::Ascending(col("name")));
    assert_eq!(s.pagination.page_index(), 0, "sort change returns to page 0");

    s = reduce(s, Intent::ToggleSort(col("name")));
    assert_eq!(s.sort, SortState::Descending(col("name")));

    s = reduce(s, Intent::ToggleSort(col("name")));
    assert_eq!(s.sort, SortState::Unsorted);
}

#[test]
fn toggle_sort_on_empty_table_is_a_no_op() {
    let before = state(0);
    let after = reduce(before.clone(), Intent::ToggleSort(col("name")));
    assert_eq!(after, before);
}

#[test]
fn toggle_sort_on_unknown_column_is_a_no_op() {
    let before = state(12);
    let after = reduce(before.clone(), Intent::ToggleSort(col("ghost")));
    assert_eq!(after, before);
}

#[test]
fn set_sort_replaces_directive() {
    let s = reduce(
        state(12),
        Intent::SetSort(SortState::by(col("email"), SortDirection::Descending)),
    );
    assert_eq!(s.sort, SortState::Descending(col("email")));

    let s = reduce(s, Intent::SetSort(SortState::Unsorted));
    assert_eq!(s.sort, SortState::Unsorted);
}

#[test]
fn set_sort_for_unknown_column_is_ignored() {
    let before = state(12);
    let after = reduce(
        before.clone(),
        Intent::SetSort(SortState::Ascending(col("ghost"))),
    );
    assert_eq!(after, before);
}

#[test]
fn setting_same_sort_keeps_page() {
    let mut s = reduce(state(12), Intent::ToggleSort(col("id")));
    s = reduce(s, Intent::SetPage(PageAction::Index(2)));
    s = reduce(s, Intent::SetSort(SortState::Ascending(col("id"))));
    assert_eq!(s.pagination.page_index(), 2);
}

// ===== Pagination =====

#[test]
fn set_page_clamps_beyond_bounds() {
    let s = reduce(state(12), Intent::SetPage(PageAction::Index(50)));
    assert_eq!(s.pagination.page_index(), 2);
}

#[test]
fn set_page_size_recomputes_page_count() {
    let s = reduce(state(12), Intent::SetPageSize(4));
    assert_eq!(s.pagination.page_count(), 3);
    let s = reduce(s, Intent::SetPageSize(20));
    assert_eq!(s.pagination.page_count(), 1);
}
