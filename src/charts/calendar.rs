//! Calendar heatmap processor: one day value per row.

use crate::config::{filter_unset, CalendarConfig};
use crate::shape::CalendarDatum;
use crate::table::{to_date, to_number, validate_data_table_columns, DataTable};

/// Reshape rows into day values. Rows whose date cell does not parse are
/// dropped.
#[must_use]
pub fn process(table: &DataTable, config: &CalendarConfig) -> Vec<CalendarDatum> {
    let mapping = &config.data_mapping;
    if mapping.date_column.is_empty() || mapping.value_column.is_empty() {
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
            let day = to_date(row.get(&mapping.date_column))?;
            Some(CalendarDatum {
                day: day.format("%Y-%m-%d").to_string(),
                value: to_number(row.get(&mapping.value_column)),
            })
        })
        .collect()
}

/// Column dependency list for the calendar mapping.
#[must_use]
pub fn required_columns(config: &CalendarConfig) -> Vec<String> {
    filter_unset(vec![
        config.data_mapping.date_column.clone(),
        config.data_mapping.value_column.clone(),
    ])
}
