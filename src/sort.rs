//! Comparator-based reordering of table rows before shaping.
//!
//! Sorting happens on the row view, ahead of the per-chart reshaping, so
//! every chart family shares one engine. Rows compare either by their index
//! column (interpreted per the declared x scale) or by value: a named
//! column, or the sum across the mapped value columns.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::config::ScaleType;
use crate::table::{clean_string, to_date, to_number, RowView};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

/// What rows are compared by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Compare by the index (x) column, per the declared scale.
    #[default]
    Index,
    /// Compare by a value column, or the sum of the mapped value columns.
    Value,
}

/// Sort configuration carried inside chart configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SortConfig {
    /// Whether sorting is applied at all.
    pub enabled: bool,
    /// Ascending or descending.
    pub direction: SortDirection,
    /// Index or value comparison.
    pub sort_by: SortBy,
    /// Named value column; when unset, value sorts use the sum across the
    /// chart's mapped value columns.
    pub value_column: Option<String>,
}

/// Chart-derived context the sort engine needs: which column is the index,
/// how its cells are scaled, and which columns carry values.
#[derive(Debug, Clone, Default)]
pub struct SortOptions {
    /// Index (x) column name.
    pub x_column: String,
    /// Declared x-axis scale.
    pub x_scale: ScaleType,
    /// Mapped value columns, summed for unnamed value sorts.
    pub value_columns: Vec<String>,
}

impl SortOptions {
    /// Create options for an index column.
    #[must_use]
    pub fn new(x_column: &str) -> Self {
        Self {
            x_column: x_column.to_string(),
            x_scale: ScaleType::default(),
            value_columns: Vec::new(),
        }
    }

    /// Set the x-axis scale.
    #[must_use]
    pub fn x_scale(mut self, scale: ScaleType) -> Self {
        self.x_scale = scale;
        self
    }

    /// Set the mapped value columns.
    #[must_use]
    pub fn value_columns(mut self, columns: &[String]) -> Self {
        self.value_columns = columns.to_vec();
        self
    }
}

/// Reorder rows per the config; returns the input unchanged when disabled
/// or empty.
///
/// Uses `slice::sort_by` (stable), but tie order is an implementation
/// detail callers must not rely on.
#[must_use]
pub fn sort_rows(mut rows: Vec<RowView>, config: &SortConfig, options: &SortOptions) -> Vec<RowView> {
    if !config.enabled || rows.is_empty() {
        return rows;
    }

    rows.sort_by(|a, b| {
        let ordering = match config.sort_by {
            SortBy::Value => {
                let (va, vb) = match &config.value_column {
                    Some(col) => (to_number(a.get(col)), to_number(b.get(col))),
                    None => (
                        sum_columns(a, &options.value_columns),
                        sum_columns(b, &options.value_columns),
                    ),
                };
                va.partial_cmp(&vb).unwrap_or(Ordering::Equal)
            }
            SortBy::Index => compare_index(a, b, options),
        };
        match config.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    rows
}

fn sum_columns(row: &RowView, columns: &[String]) -> f64 {
    columns.iter().map(|col| to_number(row.get(col))).sum()
}

fn compare_index(a: &RowView, b: &RowView, options: &SortOptions) -> Ordering {
    let col = options.x_column.as_str();
    match options.x_scale {
        ScaleType::Linear => to_number(a.get(col))
            .partial_cmp(&to_number(b.get(col)))
            .unwrap_or(Ordering::Equal),
        ScaleType::Time => {
            let da = to_date(a.get(col)).unwrap_or_default();
            let db = to_date(b.get(col)).unwrap_or_default();
            da.cmp(&db)
        }
        ScaleType::Point => clean_string(a.get(col))
            .to_lowercase()
            .cmp(&clean_string(b.get(col)).to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::CellValue;
    use proptest::prelude::*;

    fn row(x: &str, v: f64) -> RowView {
        RowView::from_cells(
            &["x".to_string(), "v".to_string()],
            &[CellValue::Text(x.to_string()), CellValue::Number(v)],
        )
    }

    fn xs(rows: &[RowView]) -> Vec<String> {
        rows.iter().map(|r| clean_string(r.get("x"))).collect()
    }

    fn enabled(sort_by: SortBy, direction: SortDirection) -> SortConfig {
        SortConfig {
            enabled: true,
            direction,
            sort_by,
            value_column: None,
        }
    }

    #[test]
    fn test_disabled_is_noop() {
        let rows = vec![row("b", 2.0), row("a", 1.0)];
        let config = SortConfig::default();
        let sorted = sort_rows(rows, &config, &SortOptions::new("x"));
        assert_eq!(xs(&sorted), vec!["b", "a"]);
    }

    #[test]
    fn test_index_sort_lexical_case_insensitive() {
        let rows = vec![row("Banana", 1.0), row("apple", 2.0), row("Cherry", 3.0)];
        let config = enabled(SortBy::Index, SortDirection::Asc);
        let sorted = sort_rows(rows, &config, &SortOptions::new("x"));
        assert_eq!(xs(&sorted), vec!["apple", "Banana", "Cherry"]);
    }

    #[test]
    fn test_index_sort_linear() {
        let rows = vec![row("10", 1.0), row("2", 2.0), row("1", 3.0)];
        let config = enabled(SortBy::Index, SortDirection::Asc);
        let options = SortOptions::new("x").x_scale(ScaleType::Linear);
        let sorted = sort_rows(rows, &config, &options);
        assert_eq!(xs(&sorted), vec!["1", "2", "10"]);
    }

    #[test]
    fn test_index_sort_time() {
        let rows = vec![
            row("2024-03-01", 1.0),
            row("2023-12-31", 2.0),
            row("2024-01-15", 3.0),
        ];
        let config = enabled(SortBy::Index, SortDirection::Asc);
        let options = SortOptions::new("x").x_scale(ScaleType::Time);
        let sorted = sort_rows(rows, &config, &options);
        assert_eq!(xs(&sorted), vec!["2023-12-31", "2024-01-15", "2024-03-01"]);
    }

    #[test]
    fn test_value_sort_desc() {
        let rows = vec![row("a", 1.0), row("b", 3.0), row("c", 2.0)];
        let mut config = enabled(SortBy::Value, SortDirection::Desc);
        config.value_column = Some("v".to_string());
        let sorted = sort_rows(rows, &config, &SortOptions::new("x"));
        assert_eq!(xs(&sorted), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_value_sort_sums_mapped_columns() {
        let headers = vec!["x".to_string(), "v1".to_string(), "v2".to_string()];
        let rows = vec![
            RowView::from_cells(
                &headers,
                &["a".into(), CellValue::Number(1.0), CellValue::Number(5.0)],
            ),
            RowView::from_cells(
                &headers,
                &["b".into(), CellValue::Number(2.0), CellValue::Number(1.0)],
            ),
        ];
        let config = enabled(SortBy::Value, SortDirection::Asc);
        let options =
            SortOptions::new("x").value_columns(&["v1".to_string(), "v2".to_string()]);
        let sorted = sort_rows(rows, &config, &options);
        // a sums to 6, b sums to 3.
        assert_eq!(xs(&sorted), vec!["b", "a"]);
    }

    #[test]
    fn test_sort_idempotent() {
        let rows = vec![row("c", 3.0), row("a", 1.0), row("b", 2.0)];
        let config = enabled(SortBy::Index, SortDirection::Asc);
        let options = SortOptions::new("x");
        let once = sort_rows(rows, &config, &options);
        let twice = sort_rows(once.clone(), &config, &options);
        assert_eq!(xs(&once), xs(&twice));
    }

    proptest! {
        #[test]
        fn prop_sort_idempotent_linear(values in proptest::collection::vec(-1000.0f64..1000.0, 0..32)) {
            let rows: Vec<RowView> = values
                .iter()
                .map(|v| row(&v.to_string(), *v))
                .collect();
            let config = enabled(SortBy::Value, SortDirection::Asc);
            let mut config = config;
            config.value_column = Some("v".to_string());
            let options = SortOptions::new("x");
            let once = sort_rows(rows, &config, &options);
            let twice = sort_rows(once.clone(), &config, &options);
            prop_assert_eq!(xs(&once), xs(&twice));
        }
    }
}
