//! Tabular data abstraction consumed by all chart processors.
//!
//! A [`DataTable`] is a columnar table: ordered column definitions plus
//! ordered rows of [`CellValue`] cells. Processors never read it directly;
//! they go through [`TableView`], which presents each row as a by-name
//! lookup, mirroring how chart data mappings reference columns.

mod coerce;
mod validate;
mod view;

pub use coerce::{clean_string, parse_date_str, process_x_value, to_date, to_number};
pub use validate::{validate_data_table_columns, ColumnCheck};
pub use view::{parse_data_table, RowView, TableView};

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Inferred type of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Numeric column.
    Number,
    /// Calendar date column.
    Date,
    /// Free-text column.
    #[default]
    Text,
}

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// A finite or non-finite numeric value.
    Number(f64),
    /// A text value.
    Text(String),
    /// A calendar date.
    Date(NaiveDate),
    /// A missing value.
    Null,
}

impl CellValue {
    /// Get as f64, or None if not a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string slice, or None if not text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get as date, or None if not a date.
    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Whether this cell is the missing value.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::Null => Ok(()),
        }
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Number(v)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

/// A column definition: name plus inferred type.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DataColumn {
    /// Column name, unique within a table.
    pub name: String,
    /// Inferred cell type.
    pub column_type: ColumnType,
}

impl DataColumn {
    /// Create a new column definition.
    #[must_use]
    pub fn new(name: &str, column_type: ColumnType) -> Self {
        Self {
            name: name.to_string(),
            column_type,
        }
    }
}

/// The generic tabular input consumed by all processors.
///
/// Invariants: every row has exactly one cell per column, and column names
/// are unique. Both are enforced at construction time so downstream code
/// can index freely.
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    columns: Vec<DataColumn>,
    rows: Vec<Vec<CellValue>>,
}

impl DataTable {
    /// Create a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from column definitions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateColumn`] if two columns share a name.
    pub fn with_columns(columns: Vec<DataColumn>) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for col in &columns {
            if !seen.insert(col.name.as_str()) {
                return Err(Error::DuplicateColumn(col.name.clone()));
            }
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    /// Append a row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowWidthMismatch`] if the cell count does not match
    /// the column count.
    pub fn push_row(&mut self, cells: Vec<CellValue>) -> Result<()> {
        if cells.len() != self.columns.len() {
            return Err(Error::RowWidthMismatch {
                expected: self.columns.len(),
                actual: cells.len(),
            });
        }
        self.rows.push(cells);
        Ok(())
    }

    /// Column definitions in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[DataColumn] {
        &self.columns
    }

    /// Column names in declaration order.
    #[must_use]
    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Raw rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn nrow(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn ncol(&self) -> usize {
        self.columns.len()
    }

    /// Check if a column exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Build the row-object view used by processors.
    #[must_use]
    pub fn view(&self) -> TableView {
        parse_data_table(self)
    }
}
