//! Scatter plot processor.

use std::collections::HashMap;

use crate::config::{filter_unset, ScaleType, ScatterConfig};
use crate::shape::{XyPoint, XySeries};
use crate::table::{clean_string, process_x_value, validate_data_table_columns, CellValue, DataTable};

/// Reshape rows into scatter series, optionally split by a series column.
/// Rows without a finite y (or, on a linear axis, a finite x) are dropped
/// rather than coerced to zero.
#[must_use]
pub fn process(table: &DataTable, config: &ScatterConfig) -> Vec<XySeries> {
    let mapping = &config.data_mapping;
    if mapping.x_column.is_empty() || mapping.y_column.is_empty() {
        return Vec::new();
    }
    if !validate_data_table_columns(table, &required_columns(config)).valid {
        return Vec::new();
    }

    let series_column = mapping
        .series_column
        .as_ref()
        .filter(|c| !c.is_empty());

    let mut order: Vec<String> = Vec::new();
    let mut series: HashMap<String, Vec<XyPoint>> = HashMap::new();

    for row in &table.view().rows {
        let Some(y) = finite(row.get(&mapping.y_column)) else {
            continue;
        };
        if config.x_scale == ScaleType::Linear && finite(row.get(&mapping.x_column)).is_none() {
            continue;
        }
        let x = process_x_value(row.get(&mapping.x_column), config.x_scale);
        let id = match series_column {
            Some(col) => clean_string(row.get(col)),
            None => mapping.y_column.clone(),
        };
        if !series.contains_key(&id) {
            order.push(id.clone());
        }
        series.entry(id).or_default().push(XyPoint { x, y });
    }

    order
        .into_iter()
        .map(|id| {
            let data = series.remove(&id).unwrap_or_default();
            XySeries { id, data }
        })
        .collect()
}

/// Column dependency list for the scatter mapping.
#[must_use]
pub fn required_columns(config: &ScatterConfig) -> Vec<String> {
    let mapping = &config.data_mapping;
    let mut columns = vec![mapping.x_column.clone(), mapping.y_column.clone()];
    if let Some(series) = &mapping.series_column {
        columns.push(series.clone());
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScatterMapping;
    use crate::shape::AxisValue;
    use crate::table::{ColumnType, DataColumn};

    fn table() -> DataTable {
        let mut table = DataTable::with_columns(vec![
            DataColumn::new("x", ColumnType::Number),
            DataColumn::new("y", ColumnType::Number),
            DataColumn::new("grp", ColumnType::Text),
        ])
        .unwrap();
        let rows = [
            (CellValue::Number(1.0), CellValue::Number(2.0), "a"),
            (CellValue::Number(2.0), CellValue::Text("junk".into()), "a"),
            (CellValue::Number(3.0), CellValue::Number(6.0), "b"),
        ];
        for (x, y, grp) in rows {
            table.push_row(vec![x, y, grp.into()]).unwrap();
        }
        table
    }

    fn config() -> ScatterConfig {
        ScatterConfig {
            data_mapping: ScatterMapping {
                x_column: "x".to_string(),
                y_column: "y".to_string(),
                series_column: None,
            },
            x_scale: ScaleType::Linear,
        }
    }

    #[test]
    fn test_single_series_drops_bad_rows() {
        let series = process(&table(), &config());
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].id, "y");
        // The "junk" y row is dropped, not coerced to 0.
        assert_eq!(series[0].data.len(), 2);
        assert_eq!(series[0].data[0].x, AxisValue::Number(1.0));
    }

    #[test]
    fn test_split_by_series_column() {
        let mut config = config();
        config.data_mapping.series_column = Some("grp".to_string());
        let series = process(&table(), &config);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].id, "a");
        assert_eq!(series[1].id, "b");
        assert_eq!(series[0].data.len(), 1);
    }

    #[test]
    fn test_non_finite_x_dropped_on_linear() {
        let mut table = table();
        table
            .push_row(vec![
                CellValue::Text("nope".into()),
                CellValue::Number(5.0),
                "a".into(),
            ])
            .unwrap();
        let series = process(&table, &config());
        assert_eq!(series[0].data.len(), 2);
    }

    #[test]
    fn test_point_scale_keeps_text_x() {
        let mut config = config();
        config.x_scale = ScaleType::Point;
        let mut table = table();
        table
            .push_row(vec![
                CellValue::Text("label".into()),
                CellValue::Number(5.0),
                "a".into(),
            ])
            .unwrap();
        let series = process(&table, &config);
        assert_eq!(series[0].data.len(), 3);
    }

    #[test]
    fn test_missing_column_yields_empty() {
        let mut config = config();
        config.data_mapping.y_column = "absent".to_string();
        assert!(process(&table(), &config).is_empty());
    }

    #[test]
    fn test_required_columns_include_series() {
        let mut config = config();
        config.data_mapping.series_column = Some("grp".to_string());
        assert_eq!(required_columns(&config), vec!["x", "y", "grp"]);
    }
}
