//! View-state layer: pure derivation of what the renderer shows.

pub mod projection;

pub use projection::{
    preview_order, project, project_with_preview, sorted_positions, HeaderView, NavControl,
    PaginationView, Projection, RowView,
};
