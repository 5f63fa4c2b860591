//! Pie chart processor.

use crate::config::{filter_unset, PieConfig};
use crate::shape::CategoryDatum;
use crate::table::{clean_string, to_number, validate_data_table_columns, DataTable};

/// Reshape rows into pie slices. Rows whose value does not coerce to a
/// strictly positive number are dropped.
#[must_use]
pub fn process(table: &DataTable, config: &PieConfig) -> Vec<CategoryDatum> {
    let mapping = &config.data_mapping;
    if mapping.id_column.is_empty() || mapping.value_column.is_empty() {
        return Vec::new();
    }
    if !validate_data_table_columns(table, &required_columns(config)).valid {
        return Vec::new();
    }

    let mut slices: Vec<CategoryDatum> = table
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
        .collect();

    if config.sort_by_value {
        slices.sort_by(|a, b| {
            b.value
                .partial_cmp(&a.value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }
    slices
}

/// Column dependency list for the pie mapping.
#[must_use]
pub fn required_columns(config: &PieConfig) -> Vec<String> {
    filter_unset(vec![
        config.data_mapping.id_column.clone(),
        config.data_mapping.value_column.clone(),
    ])
}
