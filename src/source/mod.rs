//! User record sources.
//!
//! This module provides the data providers the table is loaded from:
//! - JSON file for an explicit data file
//! - Seeded generator for sample data
//! - Cache-or-generate provider that persists generated users to disk
//!
//! The load runs once at startup; its outcome is a [`LoadState`].

use crate::model::error::LoadError;
use crate::model::User;
use std::path::PathBuf;

pub mod cached;
pub mod file;
pub mod generated;

pub use cached::CachedProvider;
pub use file::JsonFileProvider;
pub use generated::GeneratedProvider;

/// Supplies the full record set.
pub trait DataProvider {
    /// Load every record.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the records cannot be produced. An empty
    /// record set is not an error.
    fn get_records(&self) -> Result<Vec<User>, LoadError>;
}

/// Outcome of loading the table's data.
#[derive(Debug)]
pub enum LoadState<T> {
    /// The provider has not answered yet.
    ///
    /// [`load`] blocks, so this is only the state of a view built before its
    /// data is in hand.
    Loading,
    /// Records are available.
    Ready(T),
    /// The provider answered with no records.
    Empty,
    /// The provider failed.
    Failed(LoadError),
}

impl<T> LoadState<T> {
    /// Whether data is available.
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }
}

impl<R> From<Result<Vec<R>, LoadError>> for LoadState<Vec<R>> {
    fn from(result: Result<Vec<R>, LoadError>) -> Self {
        match result {
            Ok(records) if records.is_empty() => LoadState::Empty,
            Ok(records) => LoadState::Ready(records),
            Err(e) => LoadState::Failed(e),
        }
    }
}

/// Choose the provider for this run.
///
/// # Logic:
/// 1. If an explicit data file is given: read it as-is
/// 2. Else: use the cache at `cache_path`, generating `count` users from
///    `seed` when the cache is missing or too small
pub fn select_provider(
    data_file: Option<PathBuf>,
    cache_path: PathBuf,
    count: usize,
    seed: u64,
) -> Box<dyn DataProvider> {
    match data_file {
        Some(path) => Box::new(JsonFileProvider::new(path)),
        None => Box::new(CachedProvider::new(
            cache_path,
            GeneratedProvider::new(count, seed),
        )),
    }
}

/// Run a provider and classify its outcome.
pub fn load(provider: &dyn DataProvider) -> LoadState<Vec<User>> {
    provider.get_records().into()
}
