//! Treemap processor.

use super::hierarchy;
use crate::config::TreemapConfig;
use crate::shape::HierarchyNode;
use crate::table::DataTable;

/// Build the treemap hierarchy from id/parent rows.
#[must_use]
pub fn process(table: &DataTable, config: &TreemapConfig) -> HierarchyNode {
    hierarchy::build(table, &config.data_mapping)
}

/// Column dependency list for the treemap mapping.
#[must_use]
pub fn required_columns(config: &TreemapConfig) -> Vec<String> {
    hierarchy::required(&config.data_mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HierarchyMapping;
    use crate::table::{CellValue, ColumnType, DataColumn};

    #[test]
    fn test_treemap_builds_tree() {
        let mut table = DataTable::with_columns(vec![
            DataColumn::new("name", ColumnType::Text),
            DataColumn::new("in", ColumnType::Text),
            DataColumn::new("bytes", ColumnType::Number),
        ])
        .unwrap();
        for (name, parent, bytes) in [("src", "", 0.0), ("main.rs", "src", 120.0)] {
            table
                .push_row(vec![name.into(), parent.into(), CellValue::Number(bytes)])
                .unwrap();
        }

        let config = TreemapConfig {
            data_mapping: HierarchyMapping {
                id_column: "name".to_string(),
                parent_column: "in".to_string(),
                value_column: Some("bytes".to_string()),
            },
        };
        let tree = process(&table, &config);
        assert_eq!(tree.id, "src");
        assert_eq!(tree.children[0].id, "main.rs");
        assert_eq!(tree.children[0].value, Some(120.0));
        assert_eq!(required_columns(&config), vec!["name", "in", "bytes"]);
    }
}
