//! Streamgraph processor: one keyed record per x position.

use crate::config::{filter_unset, StreamConfig};
use crate::shape::KeyedDatum;
use crate::sort::{sort_rows, SortOptions};
use crate::table::{clean_string, to_number, validate_data_table_columns, DataTable};

/// Reshape rows into keyed layer records. The index column is optional:
/// without one, records are labeled by row position.
#[must_use]
pub fn process(table: &DataTable, config: &StreamConfig) -> Vec<KeyedDatum> {
    let mapping = &config.data_mapping;
    if mapping.value_columns.is_empty() {
        return Vec::new();
    }
    if !validate_data_table_columns(table, &required_columns(config)).valid {
        return Vec::new();
    }

    let options = SortOptions::new(&mapping.index_column).value_columns(&mapping.value_columns);
    let rows = sort_rows(table.view().rows, &config.sort, &options);

    rows.iter()
        .enumerate()
        .map(|(position, row)| {
            let index = if mapping.index_column.is_empty() {
                position.to_string()
            } else {
                clean_string(row.get(&mapping.index_column))
            };
            KeyedDatum {
                index,
                values: mapping
                    .value_columns
                    .iter()
                    .map(|col| (col.clone(), to_number(row.get(col))))
                    .collect(),
            }
        })
        .collect()
}

/// Column dependency list for the stream mapping.
#[must_use]
pub fn required_columns(config: &StreamConfig) -> Vec<String> {
    let mut columns = vec![config.data_mapping.index_column.clone()];
    columns.extend(config.data_mapping.value_columns.iter().cloned());
    filter_unset(columns)
}
