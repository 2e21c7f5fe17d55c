//! Drag Table (dragtable)
//!
//! Interactive terminal table of user records with drag-to-reorder
//! columns, three-phase click sorting and pagination.
//!
//! Follows a Pure Core / Impure Shell architecture: `model`, `state` and
//! `view_state` are pure and testable without a terminal; `source`,
//! `config`, `logging` and `view` deal with the outside world.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
