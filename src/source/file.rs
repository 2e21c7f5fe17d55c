//! JSON file record source.
//!
//! Reads and writes a JSON array of users. The same format backs the
//! generated-records cache.

use crate::model::error::LoadError;
use crate::model::User;
use crate::source::DataProvider;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Provider backed by a JSON array of users on disk.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    /// Create a provider for the given path. Nothing is read until
    /// [`DataProvider::get_records`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this provider reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataProvider for JsonFileProvider {
    fn get_records(&self) -> Result<Vec<User>, LoadError> {
        let users = read_users(&self.path)?;
        info!(path = %self.path.display(), count = users.len(), "Loaded users from file");
        Ok(users)
    }
}

/// Read a JSON array of users.
///
/// # Errors
///
/// Returns `LoadError::FileNotFound` if the file does not exist,
/// `LoadError::Malformed` if it is not a valid user array, and
/// `LoadError::Io` for other read failures.
pub fn read_users(path: &Path) -> Result<Vec<User>, LoadError> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    serde_json::from_str(&contents).map_err(|e| LoadError::Malformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Write users as a JSON array, creating parent directories as needed.
///
/// # Errors
///
/// Returns `LoadError::Io` if the directory or file cannot be written.
pub fn write_users(path: &Path, users: &[User]) -> Result<(), LoadError> {
    let io_error = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
    }

    let json = serde_json::to_string(users).map_err(|e| LoadError::Malformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    fs::write(path, json).map_err(io_error)?;

    debug!(path = %path.display(), count = users.len(), "Wrote users");
    Ok(())
}
