//! Error types for the dragtable application.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain failures
//!   - [`SchemaError`] - Table construction failures (duplicate ids, accessor failures)
//!   - [`LoadError`] - Data provider failures (missing file, bad JSON, IO)
//!   - `std::io::Error` - Terminal failures
//!
//! # Recovery Strategy
//!
//! Errors in the column declaration itself (no columns, duplicate or empty
//! ids) are fatal: the schema is declared once in code, so they mean a
//! programming error. Errors caused by the loaded records (duplicate keys,
//! accessor failures, unstable value kinds) become
//! [`LoadError::InvalidRecords`]. Load errors are not fatal to the view: the
//! shell shows them as an error panel instead of a table. Reducer operations
//! never fail; degenerate input is a no-op.

use crate::model::value::ValueKind;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Table could not be built from the schema and records.
    #[error("Invalid table schema: {0}")]
    Schema(#[from] SchemaError),

    /// Records could not be loaded.
    #[error("Failed to load records: {0}")]
    Load(#[from] LoadError),

    /// Terminal or rendering failure.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// An accessor could not produce a value for a record.
///
/// Accessors are fallible so that derived columns (parsing, date arithmetic)
/// can report bad input. Any such failure during table construction is
/// turned into [`SchemaError::Accessor`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct AccessorError(pub String);

impl AccessorError {
    /// Build an accessor error from any message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Construction-time failures of a table schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The descriptor set is empty.
    #[error("Schema must declare at least one column")]
    NoColumns,

    /// Two descriptors share the same id.
    #[error("Duplicate column id '{0}'")]
    DuplicateColumn(String),

    /// A column id is empty.
    #[error("Column id cannot be empty")]
    EmptyColumnId,

    /// An accessor failed on a record.
    #[error("Accessor for column '{column}' failed on record {record_key}: {source}")]
    Accessor {
        /// Column whose accessor failed.
        column: String,
        /// Key of the record that was being read.
        record_key: u64,
        /// The accessor's own error.
        #[source]
        source: AccessorError,
    },

    /// An accessor returned different value kinds for different records.
    #[error(
        "Column '{column}' returned {found} for record {record_key}, expected {expected}"
    )]
    UnstableValueKind {
        /// Column whose values are not uniform.
        column: String,
        /// Key of the first record with a deviating kind.
        record_key: u64,
        /// Kind established by the first record.
        expected: ValueKind,
        /// Kind found on `record_key`.
        found: ValueKind,
    },

    /// Two records share the same key.
    #[error("Duplicate record key {0}")]
    DuplicateRecordKey(u64),
}

impl SchemaError {
    /// Whether the failure comes from the records rather than the column
    /// declaration.
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            SchemaError::Accessor { .. }
                | SchemaError::UnstableValueKind { .. }
                | SchemaError::DuplicateRecordKey(_)
        )
    }
}

/// Failures reported by a data provider.
///
/// These map to the "load error" state of the view; an empty but valid
/// record set is not an error.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data file does not exist.
    #[error("Data file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// The data file exists but is not a valid record list.
    #[error("Malformed data in {path}: {reason}")]
    Malformed {
        /// Path of the malformed file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// The records were read but cannot form a table.
    #[error("Invalid records: {0}")]
    InvalidRecords(#[source] SchemaError),

    /// Any other IO failure while reading or writing records.
    #[error("IO error on {path}: {source}")]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}
