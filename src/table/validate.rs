//! Column presence checks surfaced to configuration UIs.

use super::DataTable;

/// Outcome of a column presence check.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ColumnCheck {
    /// True iff every required column is present.
    pub valid: bool,
    /// Required columns absent from the table, in required order.
    pub missing_columns: Vec<String>,
    /// All table headers, in declaration order.
    pub available_columns: Vec<String>,
}

/// Check that every required column name exists in the table headers.
///
/// Pure set-difference: no type checking, no data inspection.
#[must_use]
pub fn validate_data_table_columns(table: &DataTable, required: &[String]) -> ColumnCheck {
    let available_columns = table.headers();
    let missing_columns: Vec<String> = required
        .iter()
        .filter(|name| !available_columns.iter().any(|h| h == *name))
        .cloned()
        .collect();
    ColumnCheck {
        valid: missing_columns.is_empty(),
        missing_columns,
        available_columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{ColumnType, DataColumn};

    fn table_ab() -> DataTable {
        DataTable::with_columns(vec![
            DataColumn::new("a", ColumnType::Text),
            DataColumn::new("b", ColumnType::Number),
        ])
        .unwrap()
    }

    #[test]
    fn test_missing_column_reported() {
        let check =
            validate_data_table_columns(&table_ab(), &["a".to_string(), "c".to_string()]);
        assert!(!check.valid);
        assert_eq!(check.missing_columns, vec!["c"]);
        assert_eq!(check.available_columns, vec!["a", "b"]);
    }

    #[test]
    fn test_all_present() {
        let check =
            validate_data_table_columns(&table_ab(), &["b".to_string(), "a".to_string()]);
        assert!(check.valid);
        assert!(check.missing_columns.is_empty());
    }

    #[test]
    fn test_no_requirements_is_valid() {
        let check = validate_data_table_columns(&table_ab(), &[]);
        assert!(check.valid);
    }

    #[test]
    fn test_empty_table_fails_requirements() {
        let check = validate_data_table_columns(&DataTable::new(), &["a".to_string()]);
        assert!(!check.valid);
        assert_eq!(check.missing_columns, vec!["a"]);
        assert!(check.available_columns.is_empty());
    }
}
