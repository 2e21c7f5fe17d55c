//! Immutable record set bound to a schema.
//!
//! Every accessor is evaluated exactly once per record when the table is
//! built. The results are kept column-major, one `Vec<CellValue>` per
//! declared column, so projection never calls user code and accessor
//! failures can only happen here.

use crate::model::error::SchemaError;
use crate::model::schema::{ColumnDescriptor, ColumnId, Schema};
use crate::model::value::CellValue;
use std::collections::HashSet;
use tracing::debug;

/// A record with a stable unique key.
pub trait Record {
    /// Unique key of this record within its set.
    fn key(&self) -> u64;
}

/// Records plus their evaluated cells.
#[derive(Debug)]
pub struct Table<R> {
    schema: Schema<R>,
    records: Vec<R>,
    /// `cells[column][row]`, columns in schema declaration order.
    cells: Vec<Vec<CellValue>>,
}

impl<R: Record> Table<R> {
    /// Evaluate the schema over all records.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::DuplicateRecordKey`] if two records share a key
    /// - [`SchemaError::Accessor`] if any accessor fails on any record
    /// - [`SchemaError::UnstableValueKind`] if a column yields mixed kinds
    pub fn new(schema: Schema<R>, records: Vec<R>) -> Result<Self, SchemaError> {
        let mut keys = HashSet::with_capacity(records.len());
        for record in &records {
            if !keys.insert(record.key()) {
                return Err(SchemaError::DuplicateRecordKey(record.key()));
            }
        }

        let cells = schema
            .columns()
            .iter()
            .map(|column| evaluate_column(column, &records))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            columns = schema.len(),
            records = records.len(),
            "Evaluated table cells"
        );

        Ok(Self {
            schema,
            records,
            cells,
        })
    }
}

impl<R> Table<R> {
    /// The schema this table was built from.
    pub fn schema(&self) -> &Schema<R> {
        &self.schema
    }

    /// Records in load order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All values of a column, in record load order.
    pub fn column_values(&self, id: &ColumnId) -> Option<&[CellValue]> {
        self.schema
            .index_of(id)
            .map(|index| self.cells[index].as_slice())
    }

    /// Value of one cell, addressed by column id and record load index.
    pub fn cell(&self, id: &ColumnId, row: usize) -> Option<&CellValue> {
        self.column_values(id).and_then(|values| values.get(row))
    }
}

fn evaluate_column<R: Record>(
    column: &ColumnDescriptor<R>,
    records: &[R],
) -> Result<Vec<CellValue>, SchemaError> {
    let mut values = Vec::with_capacity(records.len());
    let mut expected = None;

    for record in records {
        let value = column
            .access(record)
            .map_err(|source| SchemaError::Accessor {
                column: column.id().to_string(),
                record_key: record.key(),
                source,
            })?;

        match expected {
            None => expected = Some(value.kind()),
            Some(kind) if kind != value.kind() => {
                return Err(SchemaError::UnstableValueKind {
                    column: column.id().to_string(),
                    record_key: record.key(),
                    expected: kind,
                    found: value.kind(),
                });
            }
            Some(_) => {}
        }

        values.push(value);
    }

    Ok(values)
}
