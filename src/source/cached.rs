//! Cache-or-generate provider.
//!
//! Uses the cache file when it holds enough users with distinct ids;
//! otherwise generates a fresh set and writes it back for next time.

use crate::model::error::LoadError;
use crate::model::User;
use crate::source::file::{read_users, write_users};
use crate::source::generated::GeneratedProvider;
use crate::source::DataProvider;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{info, warn};

/// Provider that prefers a cached user file over generation.
#[derive(Debug, Clone)]
pub struct CachedProvider {
    cache_path: PathBuf,
    generator: GeneratedProvider,
    min_records: usize,
}

impl CachedProvider {
    /// Cache at `cache_path`, falling back to `generator`.
    ///
    /// The cache is accepted only if it holds at least as many users as the
    /// generator would produce.
    pub fn new(cache_path: impl Into<PathBuf>, generator: GeneratedProvider) -> Self {
        let min_records = generator.count();
        Self {
            cache_path: cache_path.into(),
            generator,
            min_records,
        }
    }

    fn read_cache(&self) -> Option<Vec<User>> {
        match read_users(&self.cache_path) {
            Ok(users) if !has_unique_ids(&users) => {
                warn!(
                    path = %self.cache_path.display(),
                    "Cache has duplicate user ids, regenerating"
                );
                None
            }
            Ok(users) if users.len() >= self.min_records => Some(users),
            Ok(users) => {
                info!(
                    path = %self.cache_path.display(),
                    cached = users.len(),
                    required = self.min_records,
                    "Cache too small, regenerating"
                );
                None
            }
            Err(LoadError::FileNotFound { .. }) => None,
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable cache");
                None
            }
        }
    }
}

impl DataProvider for CachedProvider {
    fn get_records(&self) -> Result<Vec<User>, LoadError> {
        if let Some(users) = self.read_cache() {
            info!(path = %self.cache_path.display(), count = users.len(), "Using cached users");
            return Ok(users);
        }

        let users = self.generator.get_records()?;
        if let Err(e) = write_users(&self.cache_path, &users) {
            warn!(error = %e, "Failed to write user cache");
        }
        Ok(users)
    }
}

fn has_unique_ids(users: &[User]) -> bool {
    let mut seen = HashSet::with_capacity(users.len());
    users.iter().all(|u| seen.insert(u.id))
}
