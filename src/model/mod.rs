//! Domain model types (pure).
//!
//! Records, column descriptors, the evaluated table and the error taxonomy.

pub mod error;
pub mod key_action;
pub mod schema;
pub mod table;
pub mod user;
pub mod value;

// Re-export for convenience
pub use error::{AccessorError, AppError, LoadError, SchemaError};
pub use key_action::KeyAction;
pub use schema::{ColumnDescriptor, ColumnId, Schema};
pub use table::{Record, Table};
pub use user::{user_schema, User};
pub use value::{CellValue, ValueKind};
