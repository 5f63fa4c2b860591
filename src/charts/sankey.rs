//! Sankey flow processor.
//!
//! Same edge-list shape as the network processor. Self-loops are dropped
//! here too; the flow layout cannot place a circular link.

use std::collections::HashSet;

use crate::config::{filter_unset, SankeyConfig};
use crate::shape::{GraphData, GraphLink, GraphNode};
use crate::table::{clean_string, to_number, validate_data_table_columns, DataTable};

/// Build a flow graph from edge rows.
#[must_use]
pub fn process(table: &DataTable, config: &SankeyConfig) -> GraphData {
    let mapping = &config.data_mapping;
    if mapping.source_column.is_empty() || mapping.target_column.is_empty() {
        return GraphData::default();
    }
    if !validate_data_table_columns(table, &required_columns(config)).valid {
        return GraphData::default();
    }

    let value_column = mapping.value_column.as_ref().filter(|c| !c.is_empty());

    let mut nodes: Vec<GraphNode> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut links: Vec<GraphLink> = Vec::new();

    for row in &table.view().rows {
        let source = clean_string(row.get(&mapping.source_column));
        let target = clean_string(row.get(&mapping.target_column));
        if source == target {
            continue;
        }
        for id in [&source, &target] {
            if seen.insert(id.clone()) {
                nodes.push(GraphNode::new(id));
            }
        }
        let value = match value_column {
            Some(col) => to_number(row.get(col)),
            None => 1.0,
        };
        links.push(GraphLink {
            source,
            target,
            value,
        });
    }

    GraphData { nodes, links }
}

/// Column dependency list for the sankey mapping.
#[must_use]
pub fn required_columns(config: &SankeyConfig) -> Vec<String> {
    let mapping = &config.data_mapping;
    let mut columns = vec![mapping.source_column.clone(), mapping.target_column.clone()];
    if let Some(value) = &mapping.value_column {
        columns.push(value.clone());
    }
    filter_unset(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EdgeListMapping;
    use crate::table::{CellValue, ColumnType, DataColumn};

    #[test]
    fn test_flow_graph() {
        let mut table = DataTable::with_columns(vec![
            DataColumn::new("stage_from", ColumnType::Text),
            DataColumn::new("stage_to", ColumnType::Text),
            DataColumn::new("flow", ColumnType::Number),
        ])
        .unwrap();
        for (from, to, flow) in [("visit", "signup", 200.0), ("signup", "signup", 1.0)] {
            table
                .push_row(vec![from.into(), to.into(), CellValue::Number(flow)])
                .unwrap();
        }

        let config = SankeyConfig {
            data_mapping: EdgeListMapping {
                source_column: "stage_from".to_string(),
                target_column: "stage_to".to_string(),
                value_column: Some("flow".to_string()),
            },
        };
        let graph = process(&table, &config);
        assert_eq!(graph.nodes.len(), 2);
        // The circular signup -> signup link is dropped.
        assert_eq!(graph.links.len(), 1);
        assert_eq!(graph.links[0].value, 200.0);
    }

    #[test]
    fn test_unset_mapping_yields_empty() {
        let graph = process(&DataTable::new(), &SankeyConfig::default());
        assert!(graph.nodes.is_empty());
    }
}
