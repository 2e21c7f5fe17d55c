//! Column descriptors and the schema they form.
//!
//! A descriptor binds a column id to an accessor function resolved when the
//! schema is declared. Derived columns (full name, days since registration)
//! are plain accessors over the record; nothing is looked up by field name
//! at render time.

use crate::model::error::{AccessorError, SchemaError};
use crate::model::value::CellValue;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// Reads one value out of a record.
pub type Accessor<R> = Box<dyn Fn(&R) -> Result<CellValue, AccessorError> + Send + Sync>;

/// Turns an accessed value into its display string.
pub type Formatter = Box<dyn Fn(&CellValue) -> String + Send + Sync>;

/// Orders two accessed values of the same column.
pub type Comparator = Box<dyn Fn(&CellValue, &CellValue) -> Ordering + Send + Sync>;

/// Stable identifier of a column.
///
/// Cells, sort directives and the column order all refer to columns by id,
/// never by position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnId(String);

impl ColumnId {
    /// Create a column id. Emptiness is checked by [`Schema::new`].
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ColumnId {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl PartialEq<str> for ColumnId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ColumnId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Static metadata describing how to read, display and order one column.
pub struct ColumnDescriptor<R> {
    id: ColumnId,
    header: String,
    accessor: Accessor<R>,
    formatter: Option<Formatter>,
    comparator: Option<Comparator>,
}

impl<R> ColumnDescriptor<R> {
    /// Declare a column with a fallible accessor.
    pub fn new<F>(id: impl Into<ColumnId>, header: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&R) -> Result<CellValue, AccessorError> + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            header: header.into(),
            accessor: Box::new(accessor),
            formatter: None,
            comparator: None,
        }
    }

    /// Declare a column whose accessor cannot fail.
    pub fn field<F>(id: impl Into<ColumnId>, header: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&R) -> CellValue + Send + Sync + 'static,
    {
        Self::new(id, header, move |record: &R| Ok(accessor(record)))
    }

    /// Attach a display formatter.
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&CellValue) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Box::new(formatter));
        self
    }

    /// Attach a custom comparator, replacing native ordering.
    pub fn with_comparator<F>(mut self, comparator: F) -> Self
    where
        F: Fn(&CellValue, &CellValue) -> Ordering + Send + Sync + 'static,
    {
        self.comparator = Some(Box::new(comparator));
        self
    }

    /// Column id.
    pub fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Human-readable header label.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Run the accessor on a record.
    pub fn access(&self, record: &R) -> Result<CellValue, AccessorError> {
        (self.accessor)(record)
    }

    /// Render a value with the formatter, or its natural form if none is set.
    pub fn format(&self, value: &CellValue) -> String {
        match &self.formatter {
            Some(formatter) => formatter(value),
            None => value.to_string(),
        }
    }

    /// Compare two values with the comparator, or native ordering if none is set.
    pub fn compare(&self, a: &CellValue, b: &CellValue) -> Ordering {
        match &self.comparator {
            Some(comparator) => comparator(a, b),
            None => a.native_cmp(b),
        }
    }

    /// Whether a custom comparator is attached.
    pub fn has_comparator(&self) -> bool {
        self.comparator.is_some()
    }
}

impl<R> fmt::Debug for ColumnDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("formatter", &self.formatter.is_some())
            .field("comparator", &self.comparator.is_some())
            .finish()
    }
}

/// Validated, ordered set of column descriptors.
///
/// Declaration order is the initial column order of a table.
pub struct Schema<R> {
    columns: Vec<ColumnDescriptor<R>>,
}

impl<R> fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("columns", &self.columns)
            .finish()
    }
}

impl<R> Schema<R> {
    /// Validate and build a schema.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::NoColumns`] if `columns` is empty
    /// - [`SchemaError::EmptyColumnId`] if any id is empty
    /// - [`SchemaError::DuplicateColumn`] if two descriptors share an id
    pub fn new(columns: Vec<ColumnDescriptor<R>>) -> Result<Self, SchemaError> {
        if columns.is_empty() {
            return Err(SchemaError::NoColumns);
        }

        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if column.id.as_str().is_empty() {
                return Err(SchemaError::EmptyColumnId);
            }
            if !seen.insert(column.id.as_str()) {
                return Err(SchemaError::DuplicateColumn(column.id.to_string()));
            }
        }

        Ok(Self { columns })
    }

    /// Column ids in declaration order.
    pub fn ids(&self) -> Vec<ColumnId> {
        self.columns.iter().map(|c| c.id.clone()).collect()
    }

    /// All descriptors in declaration order.
    pub fn columns(&self) -> &[ColumnDescriptor<R>] {
        &self.columns
    }

    /// Declaration index of a column.
    pub fn index_of(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == id)
    }

    /// Descriptor for a column id.
    pub fn get(&self, id: &ColumnId) -> Option<&ColumnDescriptor<R>> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false for a validated schema; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
