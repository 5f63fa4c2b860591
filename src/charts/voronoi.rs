//! Voronoi tessellation processor: one site per row.

use crate::config::{filter_unset, VoronoiConfig};
use crate::shape::VoronoiSite;
use crate::table::{clean_string, validate_data_table_columns, CellValue, DataTable};

/// Reshape rows into voronoi sites; rows without finite coordinates are
/// dropped.
#[must_use]
pub fn process(table: &DataTable, config: &VoronoiConfig) -> Vec<VoronoiSite> {
    let mapping = &config.data_mapping;
    if mapping.id_column.is_empty() || mapping.x_column.is_empty() || mapping.y_column.is_empty()
    {
        return Vec::new();
    }
    if !validate_data_table_columns(table, &required_columns(config)).valid {
        return Vec::new();
    }

    table
        .view()
        .rows
        .iter()
        .filter_map(|row| {
            let x = finite(row.get(&mapping.x_column))?;
            let y = finite(row.get(&mapping.y_column))?;
            Some(VoronoiSite {
                id: clean_string(row.get(&mapping.id_column)),
                x,
                y,
            })
        })
        .collect()
}

/// Column dependency list for the voronoi mapping.
#[must_use]
pub fn required_columns(config: &VoronoiConfig) -> Vec<String> {
    filter_unset(vec![
        config.data_mapping.id_column.clone(),
        config.data_mapping.x_column.clone(),
        config.data_mapping.y_column.clone(),
    ])
}

fn finite(cell: Option<&CellValue>) -> Option<f64> {
    match cell {
        Some(CellValue::Number(n)) if n.is_finite() => Some(*n),
        Some(CellValue::Text(s)) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}
