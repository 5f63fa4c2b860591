//! Row-object view over a [`DataTable`].
//!
//! Chart processors address cells by column name, never by index. The view
//! materializes each row as a name-to-cell map so a processor reads exactly
//! like its data mapping: `row.get("value")`.

use std::collections::HashMap;

use super::{CellValue, DataTable};

/// One row keyed by column name.
#[derive(Debug, Clone, Default)]
pub struct RowView {
    cells: HashMap<String, CellValue>,
}

impl RowView {
    /// Build a row view from parallel name/cell slices.
    #[must_use]
    pub fn from_cells(headers: &[String], cells: &[CellValue]) -> Self {
        let cells = headers
            .iter()
            .cloned()
            .zip(cells.iter().cloned())
            .collect();
        Self { cells }
    }

    /// Look up a cell by column name.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }
}

/// Headers plus row objects, the shape every processor consumes.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    /// Column names in declaration order.
    pub headers: Vec<String>,
    /// One [`RowView`] per table row.
    pub rows: Vec<RowView>,
}

/// Extract headers and row objects from a table.
///
/// An empty table yields empty headers and rows.
#[must_use]
pub fn parse_data_table(table: &DataTable) -> TableView {
    let headers = table.headers();
    let rows = table
        .rows()
        .iter()
        .map(|cells| RowView::from_cells(&headers, cells))
        .collect();
    TableView { headers, rows }
}
