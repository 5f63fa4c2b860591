//! Radar chart processor: one keyed record per axis row.

use crate::config::{filter_unset, RadarConfig};
use crate::shape::KeyedDatum;
use crate::table::{clean_string, to_number, validate_data_table_columns, DataTable};

/// Reshape rows into keyed records, one spoke per row.
#[must_use]
pub fn process(table: &DataTable, config: &RadarConfig) -> Vec<KeyedDatum> {
    let mapping = &config.data_mapping;
    if mapping.index_column.is_empty() || mapping.value_columns.is_empty() {
        return Vec::new();
    }
    if !validate_data_table_columns(table, &required_columns(config)).valid {
        return Vec::new();
    }

    table
        .view()
        .rows
        .iter()
        .map(|row| KeyedDatum {
            index: clean_string(row.get(&mapping.index_column)),
            values: mapping
                .value_columns
                .iter()
                .map(|col| (col.clone(), to_number(row.get(col))))
                .collect(),
        })
        .collect()
}

/// Column dependency list for the radar mapping.
#[must_use]
pub fn required_columns(config: &RadarConfig) -> Vec<String> {
    let mut columns = vec![config.data_mapping.index_column.clone()];
    columns.extend(config.data_mapping.value_columns.iter().cloned());
    filter_unset(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndexedMapping;
    use crate::table::{CellValue, ColumnType, DataColumn};

    fn config() -> RadarConfig {
        RadarConfig {
            data_mapping: IndexedMapping {
                index_column: "skill".to_string(),
                value_columns: vec!["alice".to_string(), "bob".to_string()],
            },
        }
    }

    #[test]
    fn test_one_spoke_per_row() {
        let mut table = DataTable::with_columns(vec![
            DataColumn::new("skill", ColumnType::Text),
            DataColumn::new("alice", ColumnType::Number),
            DataColumn::new("bob", ColumnType::Number),
        ])
        .unwrap();
        table
            .push_row(vec![
                "speed".into(),
                CellValue::Number(8.0),
                CellValue::Number(6.0),
            ])
            .unwrap();

        let data = process(&table, &config());
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].index, "speed");
        assert_eq!(data[0].values["alice"], 8.0);
        assert_eq!(data[0].values["bob"], 6.0);
    }

    #[test]
    fn test_missing_column_yields_empty() {
        let table = DataTable::new();
        assert!(process(&table, &config()).is_empty());
    }
}
