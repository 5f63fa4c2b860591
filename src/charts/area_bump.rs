//! Area bump chart processor.
//!
//! Same shape as bump, but y values are magnitudes rather than ranks, so
//! zero is a legal point and only negative values are dropped.

use crate::config::{filter_unset, AreaBumpConfig};
use crate::shape::{AxisValue, XyPoint, XySeries};
use crate::table::{clean_string, to_number, validate_data_table_columns, DataTable};

/// Reshape rows into one magnitude series per y column; negative values
/// are dropped.
#[must_use]
pub fn process(table: &DataTable, config: &AreaBumpConfig) -> Vec<XySeries> {
    let mapping = &config.data_mapping;
    if mapping.x_column.is_empty() || mapping.y_columns.is_empty() {
        return Vec::new();
    }
    if !validate_data_table_columns(table, &required_columns(config)).valid {
        return Vec::new();
    }

    let rows = table.view().rows;
    mapping
        .y_columns
        .iter()
        .map(|col| XySeries {
            id: col.clone(),
            data: rows
                .iter()
                .filter_map(|row| {
                    let y = to_number(row.get(col));
                    (y >= 0.0).then(|| XyPoint {
                        x: AxisValue::Text(clean_string(row.get(&mapping.x_column))),
                        y,
                    })
                })
                .collect(),
        })
        .collect()
}

/// Column dependency list for the area bump mapping.
#[must_use]
pub fn required_columns(config: &AreaBumpConfig) -> Vec<String> {
    let mut columns = vec![config.data_mapping.x_column.clone()];
    columns.extend(config.data_mapping.y_columns.iter().cloned());
    filter_unset(columns)
}
