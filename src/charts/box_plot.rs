//! Box plot processor: grouped quartile summaries.

use std::collections::HashMap;

use crate::config::{filter_unset, BoxPlotConfig};
use crate::shape::BoxPlotSummary;
use crate::table::{clean_string, validate_data_table_columns, CellValue, DataTable};

/// Aggregate rows into one quartile summary per group (or group/subgroup
/// pair). Cells that do not parse as finite numbers are dropped before
/// aggregation.
#[must_use]
pub fn process(table: &DataTable, config: &BoxPlotConfig) -> Vec<BoxPlotSummary> {
    let mapping = &config.data_mapping;
    if mapping.group_column.is_empty() || mapping.value_column.is_empty() {
        return Vec::new();
    }
    if !validate_data_table_columns(table, &required_columns(config)).valid {
        return Vec::new();
    }

    let subgroup_column = mapping.subgroup_column.as_ref().filter(|c| !c.is_empty());

    let mut order: Vec<(String, Option<String>)> = Vec::new();
    let mut groups: HashMap<(String, Option<String>), Vec<f64>> = HashMap::new();

    for row in &table.view().rows {
        let Some(value) = finite(row.get(&mapping.value_column)) else {
            continue;
        };
        let group = clean_string(row.get(&mapping.group_column));
        let subgroup = subgroup_column.map(|col| clean_string(row.get(col)));
        let key = (group, subgroup);
        if !groups.contains_key(&key) {
            order.push(key.clone());
        }
        groups.entry(key).or_default().push(value);
    }

    order
        .into_iter()
        .filter_map(|key| {
            let values = groups.remove(&key)?;
            let (group, subgroup) = key;
            summarize(&group, subgroup, values)
        })
        .collect()
}

/// Column dependency list for the box plot mapping.
#[must_use]
pub fn required_columns(config: &BoxPlotConfig) -> Vec<String> {
    let mapping = &config.data_mapping;
    let mut columns = vec![mapping.group_column.clone(), mapping.value_column.clone()];
    if let Some(subgroup) = &mapping.subgroup_column {
        columns.push(subgroup.clone());
    }
    filter_unset(columns)
}

fn finite(cell: Option<&CellValue>) -> Option<f64> {
    match cell {
        Some(CellValue::Number(n)) if n.is_finite() => Some(*n),
        Some(CellValue::Text(s)) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

fn summarize(group: &str, subgroup: Option<String>, mut values: Vec<f64>) -> Option<BoxPlotSummary> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = values.len();

    let median = if n % 2 == 0 {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    } else {
        values[n / 2]
    };

    // Index-based quartiles, not a standard percentile estimator. Callers
    // depend on these exact values.
    let q1 = values[(n as f64 * 0.25).floor() as usize];
    let q3 = values[(n as f64 * 0.75).floor() as usize];
    let iqr = q3 - q1;

    let lower_fence = q1 - 1.5 * iqr;
    let upper_fence = q3 + 1.5 * iqr;

    let outliers: Vec<f64> = values
        .iter()
        .copied()
        .filter(|&v| v < lower_fence || v > upper_fence)
        .collect();

    // Whiskers clamp to the most extreme non-outlier values.
    let min = values
        .iter()
        .copied()
        .find(|&v| v >= lower_fence)
        .unwrap_or(values[0]);
    let max = values
        .iter()
        .rev()
        .copied()
        .find(|&v| v <= upper_fence)
        .unwrap_or(values[n - 1]);

    Some(BoxPlotSummary {
        group: group.to_string(),
        subgroup,
        n,
        min,
        q1,
        median,
        q3,
        max,
        outliers,
    })
}
