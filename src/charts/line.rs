//! Line chart processor: one series per mapped y column.

use crate::config::{filter_unset, LineConfig};
use crate::shape::{XyPoint, XySeries};
use crate::sort::{sort_rows, SortOptions};
use crate::table::{process_x_value, to_number, validate_data_table_columns, DataTable};

/// Reshape rows into one x/y series per y column. All coerced rows are
/// kept; a junk cell becomes `0`, not a gap.
#[must_use]
pub fn process(table: &DataTable, config: &LineConfig) -> Vec<XySeries> {
    let mapping = &config.data_mapping;
    if mapping.x_column.is_empty() || mapping.y_columns.is_empty() {
        return Vec::new();
    }
    if !validate_data_table_columns(table, &required_columns(config)).valid {
        return Vec::new();
    }

    let options = SortOptions::new(&mapping.x_column)
        .x_scale(config.x_scale)
        .value_columns(&mapping.y_columns);
    let rows = sort_rows(table.view().rows, &config.sort, &options);

    mapping
        .y_columns
        .iter()
        .map(|col| XySeries {
            id: col.clone(),
            data: rows
                .iter()
                .map(|row| XyPoint {
                    x: process_x_value(row.get(&mapping.x_column), config.x_scale),
                    y: to_number(row.get(col)),
                })
                .collect(),
        })
        .collect()
}

/// Column dependency list for the line mapping.
#[must_use]
pub fn required_columns(config: &LineConfig) -> Vec<String> {
    let mut columns = vec![config.data_mapping.x_column.clone()];
    columns.extend(config.data_mapping.y_columns.iter().cloned());
    filter_unset(columns)
}
