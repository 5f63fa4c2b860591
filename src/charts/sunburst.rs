//! Sunburst processor.

use super::hierarchy;
use crate::config::SunburstConfig;
use crate::shape::HierarchyNode;
use crate::table::DataTable;

/// Build the sunburst hierarchy from id/parent rows.
#[must_use]
pub fn process(table: &DataTable, config: &SunburstConfig) -> HierarchyNode {
    hierarchy::build(table, &config.data_mapping)
}

/// Column dependency list for the sunburst mapping.
#[must_use]
pub fn required_columns(config: &SunburstConfig) -> Vec<String> {
    hierarchy::required(&config.data_mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HierarchyMapping;
    use crate::table::{ColumnType, DataColumn};

    #[test]
    fn test_sunburst_wraps_multiple_roots() {
        let mut table = DataTable::with_columns(vec![
            DataColumn::new("id", ColumnType::Text),
            DataColumn::new("parent", ColumnType::Text),
        ])
        .unwrap();
        table.push_row(vec!["a".into(), "".into()]).unwrap();
        table.push_row(vec!["b".into(), "".into()]).unwrap();

        let config = SunburstConfig {
            data_mapping: HierarchyMapping {
                id_column: "id".to_string(),
                parent_column: "parent".to_string(),
                value_column: None,
            },
        };
        let tree = process(&table, &config);
        assert_eq!(tree.id, "root");
        assert_eq!(tree.children.len(), 2);
    }
}
