//! Table interaction state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal.

pub mod column_order;
pub mod drag;
pub mod header;
pub mod pagination;
pub mod sort;
pub mod table_state;

// Re-export for convenience
pub use column_order::ColumnOrder;
pub use drag::{DragController, DragState};
pub use header::{
    HeaderCell, HeaderController, HeaderLayout, HeaderRegion, PointerEvent, HANDLE_WIDTH,
};
pub use pagination::{PageAction, Pagination};
pub use sort::{SortDirection, SortState};
pub use table_state::{reduce, Intent, TableState};
