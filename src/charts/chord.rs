//! Chord diagram processor: edge list to square matrix.

use std::collections::HashMap;

use crate::config::{filter_unset, ChordConfig};
use crate::shape::ChordMatrix;
use crate::table::{clean_string, to_number, validate_data_table_columns, DataTable};

/// Build an `n×n` matrix from from/to rows.
///
/// Keys are the deduplicated, alphabetically sorted union of source and
/// target labels. Each row assigns `matrix[from][to] = value`; a repeated
/// edge overwrites the earlier cell, it does not accumulate.
#[must_use]
pub fn process(table: &DataTable, config: &ChordConfig) -> ChordMatrix {
    let mapping = &config.data_mapping;
    if mapping.source_column.is_empty() || mapping.target_column.is_empty() {
        return ChordMatrix::default();
    }
    if !validate_data_table_columns(table, &required_columns(config)).valid {
        return ChordMatrix::default();
    }

    let value_column = mapping.value_column.as_ref().filter(|c| !c.is_empty());
    let rows = table.view().rows;

    let mut keys: Vec<String> = rows
        .iter()
        .flat_map(|row| {
            [
                clean_string(row.get(&mapping.source_column)),
                clean_string(row.get(&mapping.target_column)),
            ]
        })
        .collect();
    keys.sort();
    keys.dedup();

    let index: HashMap<&str, usize> = keys
        .iter()
        .enumerate()
        .map(|(i, key)| (key.as_str(), i))
        .collect();

    let mut matrix = vec![vec![0.0; keys.len()]; keys.len()];
    for row in &rows {
        let from = clean_string(row.get(&mapping.source_column));
        let to = clean_string(row.get(&mapping.target_column));
        let value = match value_column {
            Some(col) => to_number(row.get(col)),
            None => 1.0,
        };
        if let (Some(&i), Some(&j)) = (index.get(from.as_str()), index.get(to.as_str())) {
            matrix[i][j] = value;
        }
    }

    ChordMatrix { keys, matrix }
}

/// Column dependency list for the chord mapping.
#[must_use]
pub fn required_columns(config: &ChordConfig) -> Vec<String> {
    let mapping = &config.data_mapping;
    let mut columns = vec![mapping.source_column.clone(), mapping.target_column.clone()];
    if let Some(value) = &mapping.value_column {
        columns.push(value.clone());
    }
    filter_unset(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EdgeListMapping;
    use crate::table::{CellValue, ColumnType, DataColumn};

    fn table(edges: &[(&str, &str, f64)]) -> DataTable {
        let mut table = DataTable::with_columns(vec![
            DataColumn::new("from", ColumnType::Text),
            DataColumn::new("to", ColumnType::Text),
            DataColumn::new("weight", ColumnType::Number),
        ])
        .unwrap();
        for (from, to, weight) in edges {
            table
                .push_row(vec![(*from).into(), (*to).into(), CellValue::Number(*weight)])
                .unwrap();
        }
        table
    }

    fn config() -> ChordConfig {
        ChordConfig {
            data_mapping: EdgeListMapping {
                source_column: "from".to_string(),
                target_column: "to".to_string(),
                value_column: Some("weight".to_string()),
            },
        }
    }

    #[test]
    fn test_duplicate_edge_last_write_wins() {
        let table = table(&[("X", "Y", 3.0), ("X", "Y", 7.0)]);
        let chord = process(&table, &config());
        assert_eq!(chord.keys, vec!["X", "Y"]);
        assert_eq!(chord.matrix[0][1], 7.0);
        assert_eq!(chord.matrix[1][0], 0.0);
    }

    #[test]
    fn test_keys_alphabetically_sorted() {
        let table = table(&[("zeta", "alpha", 1.0), ("mid", "zeta", 2.0)]);
        let chord = process(&table, &config());
        assert_eq!(chord.keys, vec!["alpha", "mid", "zeta"]);
        assert_eq!(chord.matrix.len(), 3);
        assert_eq!(chord.matrix[2][0], 1.0);
        assert_eq!(chord.matrix[1][2], 2.0);
    }

    #[test]
    fn test_unit_weight_without_value_column() {
        let mut config = config();
        config.data_mapping.value_column = None;
        let table = table(&[("a", "b", 99.0)]);
        let chord = process(&table, &config);
        assert_eq!(chord.matrix[0][1], 1.0);
    }

    #[test]
    fn test_missing_column_yields_empty() {
        let mut config = config();
        config.data_mapping.target_column = "absent".to_string();
        let chord = process(&table(&[("a", "b", 1.0)]), &config);
        assert!(chord.keys.is_empty());
        assert!(chord.matrix.is_empty());
    }
}
