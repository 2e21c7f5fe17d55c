//! Cell values produced by column accessors.

use chrono::{DateTime, SecondsFormat, Utc};
use std::cmp::Ordering;
use std::fmt;

/// A single accessed value.
///
/// Accessors return one of three kinds. A column must produce the same kind
/// for every record; `Table::new` enforces this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    /// Integral numeric value (ids, day counts).
    Int(i64),
    /// Free text.
    Text(String),
    /// Point in time, displayed as RFC 3339 when no formatter is set.
    Date(DateTime<Utc>),
}

/// The kind of a [`CellValue`], used to check schema stability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`CellValue::Int`]
    Int,
    /// [`CellValue::Text`]
    Text,
    /// [`CellValue::Date`]
    Date,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Int => "int",
            ValueKind::Text => "text",
            ValueKind::Date => "date",
        };
        f.write_str(name)
    }
}

impl CellValue {
    /// Kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            CellValue::Int(_) => ValueKind::Int,
            CellValue::Text(_) => ValueKind::Text,
            CellValue::Date(_) => ValueKind::Date,
        }
    }

    /// Integer payload, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Text payload, if this is a `Text`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Timestamp payload, if this is a `Date`.
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            CellValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Native ordering used when a column declares no comparator.
    ///
    /// Numeric for ints, lexicographic for text, chronological for dates.
    /// Mixed kinds cannot occur in a validated table; they order by kind
    /// so the function stays total.
    pub fn native_cmp(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Int(a), CellValue::Int(b)) => a.cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            (a, b) => kind_rank(a.kind()).cmp(&kind_rank(b.kind())),
        }
    }
}

fn kind_rank(kind: ValueKind) -> u8 {
    match kind {
        ValueKind::Int => 0,
        ValueKind::Text => 1,
        ValueKind::Date => 2,
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Date(d) => f.write_str(&d.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Int(n)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(d: DateTime<Utc>) -> Self {
        CellValue::Date(d)
    }
}
