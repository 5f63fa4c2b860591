//! Bullet chart processor: one row per bullet.

use crate::config::{filter_unset, BulletConfig};
use crate::shape::BulletDatum;
use crate::table::{clean_string, to_number, validate_data_table_columns, DataTable};

/// Reshape rows into bullet rows with ranges, measures, and markers.
#[must_use]
pub fn process(table: &DataTable, config: &BulletConfig) -> Vec<BulletDatum> {
    let mapping = &config.data_mapping;
    if mapping.id_column.is_empty() || mapping.measure_columns.is_empty() {
        return Vec::new();
    }
    if !validate_data_table_columns(table, &required_columns(config)).valid {
        return Vec::new();
    }

    let collect = |row: &crate::table::RowView, columns: &[String]| -> Vec<f64> {
        columns.iter().map(|col| to_number(row.get(col))).collect()
    };

    table
        .view()
        .rows
        .iter()
        .map(|row| BulletDatum {
            id: clean_string(row.get(&mapping.id_column)),
            ranges: collect(row, &mapping.range_columns),
            measures: collect(row, &mapping.measure_columns),
            markers: collect(row, &mapping.marker_columns),
        })
        .collect()
}

/// Column dependency list for the bullet mapping.
#[must_use]
pub fn required_columns(config: &BulletConfig) -> Vec<String> {
    let mapping = &config.data_mapping;
    let mut columns = vec![mapping.id_column.clone()];
    columns.extend(mapping.range_columns.iter().cloned());
    columns.extend(mapping.measure_columns.iter().cloned());
    columns.extend(mapping.marker_columns.iter().cloned());
    filter_unset(columns)
}
