//! Matrix heatmap processor: one row series per table row.

use crate::config::{filter_unset, HeatmapConfig};
use crate::shape::{HeatmapCell, HeatmapSeries};
use crate::table::{clean_string, to_number, validate_data_table_columns, DataTable};

/// Reshape rows into heatmap series, one cell per mapped value column.
#[must_use]
pub fn process(table: &DataTable, config: &HeatmapConfig) -> Vec<HeatmapSeries> {
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
        .map(|row| HeatmapSeries {
            id: clean_string(row.get(&mapping.index_column)),
            data: mapping
                .value_columns
                .iter()
                .map(|col| HeatmapCell {
                    x: col.clone(),
                    y: to_number(row.get(col)),
                })
                .collect(),
        })
        .collect()
}

/// Column dependency list for the heatmap mapping.
#[must_use]
pub fn required_columns(config: &HeatmapConfig) -> Vec<String> {
    let mut columns = vec![config.data_mapping.index_column.clone()];
    columns.extend(config.data_mapping.value_columns.iter().cloned());
    filter_unset(columns)
}
