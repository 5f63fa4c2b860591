//! Network graph processor: edge list to node/link graph.

use std::collections::HashSet;

use crate::config::{filter_unset, NetworkConfig};
use crate::shape::{GraphData, GraphLink, GraphNode};
use crate::table::{clean_string, to_number, validate_data_table_columns, DataTable};

/// Build a node/link graph from edge rows.
///
/// Nodes are created on first reference with default radius and color, in
/// reference order. Self-loops are dropped.
#[must_use]
pub fn process(table: &DataTable, config: &NetworkConfig) -> GraphData {
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

/// Column dependency list for the network mapping.
#[must_use]
pub fn required_columns(config: &NetworkConfig) -> Vec<String> {
    let mapping = &config.data_mapping;
    let mut columns = vec![mapping.source_column.clone(), mapping.target_column.clone()];
    if let Some(value) = &mapping.value_column {
        columns.push(value.clone());
    }
    filter_unset(columns)
}
