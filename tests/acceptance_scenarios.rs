//! End-to-end scenarios over the public API: load, reduce, project.
//!
//! No terminal is involved; these drive the stores the same way the
//! event loop does and read back the projected grid.

use chrono::{TimeZone, Utc};
use dragtable::model::{user_schema, CellValue, ColumnDescriptor, ColumnId, Record, Schema, Table};
use dragtable::source::{load, GeneratedProvider, LoadState};
use dragtable::state::{reduce, Intent, PageAction, SortState, TableState};
use dragtable::view_state::project;

// ===== Test Helpers =====

#[derive(Debug, Clone)]
struct Person {
    id: u64,
    age: i64,
}

impl Record for Person {
    fn key(&self) -> u64 {
        self.id
    }
}

fn people_table(people: &[(u64, i64)]) -> Table<Person> {
    let schema = Schema::new(vec![
        ColumnDescriptor::field("id", "ID", |p: &Person| CellValue::Int(p.id as i64)),
        ColumnDescriptor::field("age", "Age", |p: &Person| CellValue::Int(p.age)),
    ])
    .unwrap();
    let records = people.iter().map(|&(id, age)| Person { id, age }).collect();
    Table::new(schema, records).unwrap()
}

fn user_table(count: usize) -> Table<dragtable::model::User> {
    let today = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
    let users = GeneratedProvider::with_reference(count, 42, today);
    let LoadState::Ready(users) = load(&users) else {
        panic!("generator should produce users");
    };
    Table::new(user_schema(today).unwrap(), users).unwrap()
}

fn col(s: &str) -> ColumnId {
    ColumnId::from(s)
}

// ===== Scenarios =====

#[test]
fn go_to_last_of_five_hundred() {
    let table = user_table(500);
    let mut state = TableState::new(table.schema().ids(), table.len(), 5);
    assert_eq!(state.pagination.page_count(), 100);

    state = reduce(state, Intent::SetPage(PageAction::Last));

    assert_eq!(state.pagination.page_index(), 99);
    assert_eq!(state.pagination.visible_range(), 495..500);
    assert_eq!(project(&table, &state).row_keys(), vec![496, 497, 498, 499, 500]);
}

#[test]
fn go_to_last_follows_current_sort() {
    let table = user_table(500);
    let mut state = TableState::new(table.schema().ids(), table.len(), 5);
    state = reduce(state, Intent::SetSort(SortState::Descending(col("id"))));
    state = reduce(state, Intent::SetPage(PageAction::Last));

    assert_eq!(project(&table, &state).row_keys(), vec![5, 4, 3, 2, 1]);
}

#[test]
fn equal_ages_keep_load_order() {
    let table = people_table(&[(1, 30), (2, 20), (3, 20)]);
    let state = TableState::new(table.schema().ids(), table.len(), 10);

    let state = reduce(state, Intent::ToggleSort(col("age")));

    assert_eq!(project(&table, &state).row_keys(), vec![2, 3, 1]);
}

#[test]
fn reorder_email_before_id() {
    let table = user_table(10);
    let state = TableState::new(table.schema().ids(), table.len(), 5);

    let state = reduce(
        state,
        Intent::Reorder {
            from: col("email"),
            to: col("id"),
        },
    );

    let projection = project(&table, &state);
    let headers: Vec<&str> = projection.headers.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(&headers[..3], ["email", "id", "firstName"]);
    for (row, user) in projection.rows.iter().zip(table.records()) {
        assert_eq!(row.key, user.id);
        assert_eq!(row.cells[0], user.email);
        assert_eq!(row.cells[1], user.id.to_string());
    }
}

#[test]
fn sort_change_resets_page() {
    let table = user_table(50);
    let mut state = TableState::new(table.schema().ids(), table.len(), 5);
    state = reduce(state, Intent::SetPage(PageAction::Index(4)));
    assert_eq!(state.pagination.page_index(), 4);

    state = reduce(state, Intent::ToggleSort(col("city")));

    assert_eq!(state.pagination.page_index(), 0);
}

#[test]
fn derived_columns_format_through_the_schema() {
    let table = user_table(3);
    let state = TableState::new(table.schema().ids(), table.len(), 5);
    let projection = project(&table, &state);

    let full_names = projection.column(&col("fullName")).unwrap();
    for (name, user) in full_names.iter().zip(table.records()) {
        assert_eq!(*name, format!("{} {}", user.first_name, user.last_name));
    }
    for dsr in projection.column(&col("dsr")).unwrap() {
        assert!(dsr.ends_with(" days"), "{dsr}");
    }
}

#[test]
fn sorting_by_registration_date_is_chronological() {
    let table = user_table(40);
    let state = TableState::new(table.schema().ids(), table.len(), 40);
    let state = reduce(state, Intent::ToggleSort(col("registeredDate")));

    let projection = project(&table, &state);
    let dates: Vec<_> = projection
        .row_keys()
        .iter()
        .map(|key| {
            table
                .records()
                .iter()
                .find(|u| u.id == *key)
                .unwrap()
                .registered_date
        })
        .collect();
    assert!(dates.windows(2).all(|w| w[0] <= w[1]));
}
