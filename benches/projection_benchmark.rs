//! Projection performance benchmarks.
//!
//! Every input event recomputes the visible page, so projection over a
//! large table must stay well under a frame.
//!
//! Run with: cargo bench --bench projection_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dragtable::model::{user_schema, ColumnId, Table, User};
use dragtable::source::GeneratedProvider;
use dragtable::state::{reduce, HeaderLayout, Intent, SortState, TableState};
use dragtable::view_state::project;

const SIZES: [usize; 3] = [500, 10_000, 100_000];

fn table(count: usize) -> Table<User> {
    let today = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
    let users = GeneratedProvider::with_reference(count, 42, today).generate();
    Table::new(user_schema(today).unwrap(), users).unwrap()
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("project");

    for count in SIZES {
        let table = table(count);
        let unsorted = TableState::new(table.schema().ids(), table.len(), 20);
        let mut by_email = unsorted.clone();
        by_email.sort = SortState::Ascending(ColumnId::from("email"));
        let mut by_date = unsorted.clone();
        by_date.sort = SortState::Descending(ColumnId::from("registeredDate"));

        group.bench_with_input(BenchmarkId::new("unsorted", count), &count, |b, _| {
            b.iter(|| project(black_box(&table), black_box(&unsorted)))
        });
        group.bench_with_input(BenchmarkId::new("email_asc", count), &count, |b, _| {
            b.iter(|| project(black_box(&table), black_box(&by_email)))
        });
        group.bench_with_input(BenchmarkId::new("date_desc", count), &count, |b, _| {
            b.iter(|| project(black_box(&table), black_box(&by_date)))
        });
    }

    group.finish();
}

fn bench_reduce(c: &mut Criterion) {
    let table = table(10_000);
    let state = TableState::new(table.schema().ids(), table.len(), 20);

    c.bench_function("reduce_toggle_sort_then_project", |b| {
        b.iter_batched(
            || state.clone(),
            |state| {
                let state = reduce(state, Intent::ToggleSort(ColumnId::from("city")));
                project(&table, &state)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_hit_test(c: &mut Criterion) {
    let columns: Vec<(ColumnId, u16)> = table(1)
        .schema()
        .ids()
        .into_iter()
        .map(|id| (id, 16))
        .collect();
    let layout = HeaderLayout::from_widths(1, 1, &columns, 1);

    c.bench_function("header_hit_test_sweep", |b| {
        b.iter(|| {
            for x in 0..160u16 {
                black_box(layout.hit_test(black_box(x), 1));
            }
        })
    });
}

criterion_group!(benches, bench_project, bench_reduce, bench_hit_test);
criterion_main!(benches);
