//! Radial bar chart processor: rows grouped into rings by id.

use std::collections::HashMap;

use crate::config::{filter_unset, RadialBarConfig};
use crate::shape::{AxisValue, XyPoint, XySeries};
use crate::table::{clean_string, to_number, validate_data_table_columns, DataTable};

/// Group rows into one series per ring id; spokes keep row order within a
/// ring. Non-positive values are dropped.
#[must_use]
pub fn process(table: &DataTable, config: &RadialBarConfig) -> Vec<XySeries> {
    let mapping = &config.data_mapping;
    if mapping.id_column.is_empty()
        || mapping.category_column.is_empty()
        || mapping.value_column.is_empty()
    {
        return Vec::new();
    }
    if !validate_data_table_columns(table, &required_columns(config)).valid {
        return Vec::new();
    }

    let mut order: Vec<String> = Vec::new();
    let mut rings: HashMap<String, Vec<XyPoint>> = HashMap::new();

    for row in &table.view().rows {
        let value = to_number(row.get(&mapping.value_column));
        if value <= 0.0 {
            continue;
        }
        let id = clean_string(row.get(&mapping.id_column));
        let category = clean_string(row.get(&mapping.category_column));
        if !rings.contains_key(&id) {
            order.push(id.clone());
        }
        rings.entry(id).or_default().push(XyPoint {
            x: AxisValue::Text(category),
            y: value,
        });
    }

    order
        .into_iter()
        .map(|id| {
            let data = rings.remove(&id).unwrap_or_default();
            XySeries { id, data }
        })
        .collect()
}

/// Column dependency list for the radial bar mapping.
#[must_use]
pub fn required_columns(config: &RadialBarConfig) -> Vec<String> {
    filter_unset(vec![
        config.data_mapping.id_column.clone(),
        config.data_mapping.category_column.clone(),
        config.data_mapping.value_column.clone(),
    ])
}
