//! Funnel chart processor.

use crate::config::{filter_unset, FunnelConfig};
use crate::shape::FunnelStep;
use crate::table::{clean_string, to_number, validate_data_table_columns, DataTable};

/// Reshape rows into funnel steps. Non-positive values are dropped; the
/// label falls back to the id when no label column is mapped.
#[must_use]
pub fn process(table: &DataTable, config: &FunnelConfig) -> Vec<FunnelStep> {
    let mapping = &config.data_mapping;
    if mapping.id_column.is_empty() || mapping.value_column.is_empty() {
        return Vec::new();
    }
    if !validate_data_table_columns(table, &required_columns(config)).valid {
        return Vec::new();
    }

    let label_column = mapping.label_column.as_ref().filter(|c| !c.is_empty());

    table
        .view()
        .rows
        .iter()
        .filter_map(|row| {
            let value = to_number(row.get(&mapping.value_column));
            if value <= 0.0 {
                return None;
            }
            let id = clean_string(row.get(&mapping.id_column));
            let label = match label_column {
                Some(col) => clean_string(row.get(col)),
                None => id.clone(),
            };
            Some(FunnelStep { id, value, label })
        })
        .collect()
}

/// Column dependency list for the funnel mapping.
#[must_use]
pub fn required_columns(config: &FunnelConfig) -> Vec<String> {
    let mapping = &config.data_mapping;
    let mut columns = vec![mapping.id_column.clone(), mapping.value_column.clone()];
    if let Some(label) = &mapping.label_column {
        columns.push(label.clone());
    }
    filter_unset(columns)
}
