//! Dynamic SQL value types.
//!
//! The pipeline executes SQL it did not write, so column types are only
//! known at runtime. Values are modeled as a sum type over the database's
//! native kinds rather than an opaque dynamic type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single column value returned by the database.
///
/// # Examples
///
/// ```
/// use sibyl_database::SqlValue;
///
/// assert_eq!(SqlValue::Integer(42).to_string(), "42");
/// assert_eq!(SqlValue::Text("Alice".into()).to_string(), "'Alice'");
/// assert_eq!(SqlValue::Null.to_string(), "NULL");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SqlValue {
    /// Integer column value.
    Integer(i64),
    /// Floating-point column value.
    Float(f64),
    /// Text column value.
    Text(String),
    /// Date column value.
    Date(NaiveDate),
    /// SQL NULL.
    Null,
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Integer(v) => write!(f, "{v}"),
            SqlValue::Float(v) => write!(f, "{v}"),
            SqlValue::Text(v) => write!(f, "'{v}'"),
            SqlValue::Date(v) => write!(f, "'{v}'"),
            SqlValue::Null => write!(f, "NULL"),
        }
    }
}

/// One row: an ordered sequence of column values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row(pub Vec<SqlValue>);

impl Row {
    /// Column values in result order.
    pub fn values(&self) -> &[SqlValue] {
        &self.0
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (idx, value) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")")
    }
}

/// The ordered collection of rows returned by one SQL statement.
///
/// Renders as a list of tuples, which is the form the summarization
/// prompt embeds.
///
/// # Examples
///
/// ```
/// use sibyl_database::{Row, RowSet, SqlValue};
///
/// let rows = RowSet::from(vec![Row(vec![
///     SqlValue::Integer(1),
///     SqlValue::Text("Alice".into()),
/// ])]);
/// assert_eq!(rows.to_string(), "[(1, 'Alice')]");
/// assert_eq!(RowSet::default().to_string(), "[]");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RowSet(pub Vec<Row>);

impl RowSet {
    /// Rows in result order.
    pub fn rows(&self) -> &[Row] {
        &self.0
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the result set holds no rows.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Row>> for RowSet {
    fn from(rows: Vec<Row>) -> Self {
        Self(rows)
    }
}

impl fmt::Display for RowSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, row) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{row}")?;
        }
        write!(f, "]")
    }
}
