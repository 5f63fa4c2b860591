//! Bar chart processor: one keyed record per row.

use crate::config::{filter_unset, BarConfig};
use crate::shape::KeyedDatum;
use crate::sort::{sort_rows, SortOptions};
use crate::table::{clean_string, to_number, validate_data_table_columns, DataTable};

/// Reshape rows into keyed records, one value per mapped column.
#[must_use]
pub fn process(table: &DataTable, config: &BarConfig) -> Vec<KeyedDatum> {
    let mapping = &config.data_mapping;
    if mapping.index_column.is_empty() || mapping.value_columns.is_empty() {
        return Vec::new();
    }
    if !validate_data_table_columns(table, &required_columns(config)).valid {
        return Vec::new();
    }

    let options = SortOptions::new(&mapping.index_column).value_columns(&mapping.value_columns);
    let rows = sort_rows(table.view().rows, &config.sort, &options);

    rows.iter()
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

/// Column dependency list for the bar mapping.
#[must_use]
pub fn required_columns(config: &BarConfig) -> Vec<String> {
    let mut columns = vec![config.data_mapping.index_column.clone()];
    columns.extend(config.data_mapping.value_columns.iter().cloned());
    filter_unset(columns)
}
