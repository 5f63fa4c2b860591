//! Shared two-pass hierarchy builder for treemap, sunburst, and circle
//! packing.
//!
//! Pass 1 indexes one node per row into an arena keyed by the id column.
//! Pass 2 attaches each node to its parent, falling back to root placement
//! when the parent is absent, unresolvable, or the node itself. Multiple
//! roots are wrapped in a synthetic `root` container; a single root is
//! returned unwrapped.
//!
//! Cycles longer than one node are never reachable from a root: every
//! member has a resolvable parent, so none lands in the root list and the
//! whole cycle is dropped at materialization.

use std::collections::HashMap;

use crate::config::{filter_unset, HierarchyMapping};
use crate::shape::HierarchyNode;
use crate::table::{clean_string, to_number, validate_data_table_columns, DataTable};

struct ArenaNode {
    id: String,
    value: Option<f64>,
    parent: String,
    children: Vec<usize>,
}

/// Build a hierarchy from id/parent rows.
pub(crate) fn build(table: &DataTable, mapping: &HierarchyMapping) -> HierarchyNode {
    if mapping.id_column.is_empty() || mapping.parent_column.is_empty() {
        return HierarchyNode::empty();
    }
    if !validate_data_table_columns(table, &required(mapping)).valid {
        return HierarchyNode::empty();
    }

    let view = table.view();

    // Pass 1: one arena node per row, keyed by id. A repeated id overwrites
    // the earlier row's value and parent but keeps its arena slot.
    let mut arena: Vec<ArenaNode> = Vec::with_capacity(view.rows.len());
    let mut index: HashMap<String, usize> = HashMap::new();
    for row in &view.rows {
        let id = clean_string(row.get(&mapping.id_column));
        let value = mapping
            .value_column
            .as_ref()
            .filter(|c| !c.is_empty())
            .map(|c| to_number(row.get(c)));
        let parent = clean_string(row.get(&mapping.parent_column));
        match index.get(&id).copied() {
            Some(slot) => {
                arena[slot].value = value;
                arena[slot].parent = parent;
            }
            None => {
                index.insert(id.clone(), arena.len());
                arena.push(ArenaNode {
                    id,
                    value,
                    parent,
                    children: Vec::new(),
                });
            }
        }
    }

    // Pass 2: attach to parents; unresolvable or self parents go to the
    // root list.
    let mut roots: Vec<usize> = Vec::new();
    for slot in 0..arena.len() {
        let parent_slot = index.get(&arena[slot].parent).copied();
        match parent_slot {
            Some(p) if p != slot => arena[p].children.push(slot),
            _ => roots.push(slot),
        }
    }

    match roots.len() {
        0 => HierarchyNode::empty(),
        1 => materialize(&arena, roots[0]),
        _ => {
            let mut root = HierarchyNode::empty();
            root.children = roots.iter().map(|&r| materialize(&arena, r)).collect();
            root
        }
    }
}

fn materialize(arena: &[ArenaNode], slot: usize) -> HierarchyNode {
    let node = &arena[slot];
    HierarchyNode {
        id: node.id.clone(),
        value: node.value,
        children: node
            .children
            .iter()
            .map(|&child| materialize(arena, child))
            .collect(),
    }
}

/// Column dependency list for a hierarchy mapping.
pub(crate) fn required(mapping: &HierarchyMapping) -> Vec<String> {
    let mut columns = vec![mapping.id_column.clone(), mapping.parent_column.clone()];
    if let Some(value) = &mapping.value_column {
        columns.push(value.clone());
    }
    filter_unset(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{CellValue, ColumnType, DataColumn};

    fn table(rows: &[(&str, &str, f64)]) -> DataTable {
        let mut table = DataTable::with_columns(vec![
            DataColumn::new("id", ColumnType::Text),
            DataColumn::new("parent", ColumnType::Text),
            DataColumn::new("size", ColumnType::Number),
        ])
        .unwrap();
        for (id, parent, size) in rows {
            table
                .push_row(vec![
                    (*id).into(),
                    (*parent).into(),
                    CellValue::Number(*size),
                ])
                .unwrap();
        }
        table
    }

    fn mapping() -> HierarchyMapping {
        HierarchyMapping {
            id_column: "id".to_string(),
            parent_column: "parent".to_string(),
            value_column: Some("size".to_string()),
        }
    }

    #[test]
    fn test_single_root_unwrapped() {
        let table = table(&[("top", "", 0.0), ("a", "top", 5.0), ("b", "top", 3.0)]);
        let tree = build(&table, &mapping());
        assert_eq!(tree.id, "top");
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[0].id, "a");
        assert_eq!(tree.children[0].value, Some(5.0));
    }

    #[test]
    fn test_multiple_roots_wrapped() {
        let table = table(&[("a", "", 1.0), ("b", "", 2.0)]);
        let tree = build(&table, &mapping());
        assert_eq!(tree.id, "root");
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[0].id, "a");
        assert_eq!(tree.children[1].id, "b");
    }

    #[test]
    fn test_unresolvable_parent_goes_to_root() {
        let table = table(&[("a", "ghost", 1.0), ("b", "a", 2.0)]);
        let tree = build(&table, &mapping());
        // "ghost" never appears as an id, so "a" becomes the single root.
        assert_eq!(tree.id, "a");
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].id, "b");
    }

    #[test]
    fn test_self_parent_goes_to_root() {
        let table = table(&[("a", "a", 1.0), ("b", "a", 2.0)]);
        let tree = build(&table, &mapping());
        assert_eq!(tree.id, "a");
        assert_eq!(tree.children.len(), 1);
    }

    #[test]
    fn test_nested_depth() {
        let table = table(&[("r", "", 0.0), ("m", "r", 0.0), ("leaf", "m", 7.0)]);
        let tree = build(&table, &mapping());
        assert_eq!(tree.id, "r");
        assert_eq!(tree.children[0].id, "m");
        assert_eq!(tree.children[0].children[0].id, "leaf");
        assert_eq!(tree.children[0].children[0].value, Some(7.0));
    }

    #[test]
    fn test_two_cycle_dropped() {
        let table = table(&[("a", "b", 1.0), ("b", "a", 2.0), ("solo", "", 3.0)]);
        let tree = build(&table, &mapping());
        assert_eq!(tree.id, "solo");
        assert!(tree.children.is_empty());
    }

    #[test]
    fn test_missing_columns_yield_empty() {
        let table = DataTable::new();
        assert!(build(&table, &mapping()).is_empty());
    }

    #[test]
    fn test_unset_mapping_yields_empty() {
        let table = table(&[("a", "", 1.0)]);
        assert!(build(&table, &HierarchyMapping::default()).is_empty());
    }

    #[test]
    fn test_no_value_column() {
        let table = table(&[("a", "", 1.0)]);
        let mapping = HierarchyMapping {
            id_column: "id".to_string(),
            parent_column: "parent".to_string(),
            value_column: None,
        };
        let tree = build(&table, &mapping);
        assert_eq!(tree.id, "a");
        assert_eq!(tree.value, None);
    }
}
