//! Waffle chart processor.

use crate::config::{filter_unset, WaffleConfig};
use crate::shape::CategoryDatum;
use crate::table::{clean_string, to_number, validate_data_table_columns, DataTable};

/// Reshape rows into waffle cells; non-positive values are dropped.
#[must_use]
pub fn process(table: &DataTable, config: &WaffleConfig) -> Vec<CategoryDatum> {
    let mapping = &config.data_mapping;
    if mapping.id_column.is_empty() || mapping.value_column.is_empty() {
        return Vec::new();
    }
    if !validate_data_table_columns(table, &required_columns(config)).valid {
        return Vec::new();
    }

    table
        .view()
        .rows
        .iter()
        .filter_map(|row| {
            let value = to_number(row.get(&mapping.value_column));
            (value > 0.0).then(|| CategoryDatum {
                id: clean_string(row.get(&mapping.id_column)),
                value,
            })
        })
        .collect()
}

/// Column dependency list for the waffle mapping.
#[must_use]
pub fn required_columns(config: &WaffleConfig) -> Vec<String> {
    filter_unset(vec![
        config.data_mapping.id_column.clone(),
        config.data_mapping.value_column.clone(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CategoryMapping;
    use crate::table::{CellValue, ColumnType, DataColumn};

    #[test]
    fn test_positive_rows_kept() {
        let mut table = DataTable::with_columns(vec![
            DataColumn::new("k", ColumnType::Text),
            DataColumn::new("v", ColumnType::Number),
        ])
        .unwrap();
        table
            .push_row(vec!["a".into(), CellValue::Number(60.0)])
            .unwrap();
        table
            .push_row(vec!["b".into(), CellValue::Number(0.0)])
            .unwrap();

        let config = WaffleConfig {
            data_mapping: CategoryMapping {
                id_column: "k".to_string(),
                value_column: "v".to_string(),
            },
        };
        let cells = process(&table, &config);
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].id, "a");
    }

    #[test]
    fn test_unset_mapping_yields_empty() {
        assert!(process(&DataTable::new(), &WaffleConfig::default()).is_empty());
    }
}
