//! Swarm plot processor: one point per row.

use crate::config::{filter_unset, SwarmPlotConfig};
use crate::shape::SwarmPoint;
use crate::table::{clean_string, to_number, validate_data_table_columns, DataTable};

/// Reshape rows into swarm points.
#[must_use]
pub fn process(table: &DataTable, config: &SwarmPlotConfig) -> Vec<SwarmPoint> {
    let mapping = &config.data_mapping;
    if mapping.id_column.is_empty()
        || mapping.group_column.is_empty()
        || mapping.value_column.is_empty()
    {
        return Vec::new();
    }
    if !validate_data_table_columns(table, &required_columns(config)).valid {
        return Vec::new();
    }

    let size_column = mapping.size_column.as_ref().filter(|c| !c.is_empty());

    table
        .view()
        .rows
        .iter()
        .map(|row| SwarmPoint {
            id: clean_string(row.get(&mapping.id_column)),
            group: clean_string(row.get(&mapping.group_column)),
            value: to_number(row.get(&mapping.value_column)),
            size: size_column.map(|col| to_number(row.get(col))),
        })
        .collect()
}

/// Column dependency list for the swarm plot mapping.
#[must_use]
pub fn required_columns(config: &SwarmPlotConfig) -> Vec<String> {
    let mapping = &config.data_mapping;
    let mut columns = vec![
        mapping.id_column.clone(),
        mapping.group_column.clone(),
        mapping.value_column.clone(),
    ];
    if let Some(size) = &mapping.size_column {
        columns.push(size.clone());
    }
    filter_unset(columns)
}
