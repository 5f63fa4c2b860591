//! Circle-packing processor.

use super::hierarchy;
use crate::config::CirclePackingConfig;
use crate::shape::HierarchyNode;
use crate::table::DataTable;

/// Build the circle-packing hierarchy from id/parent rows.
#[must_use]
pub fn process(table: &DataTable, config: &CirclePackingConfig) -> HierarchyNode {
    hierarchy::build(table, &config.data_mapping)
}

/// Column dependency list for the circle-packing mapping.
#[must_use]
pub fn required_columns(config: &CirclePackingConfig) -> Vec<String> {
    hierarchy::required(&config.data_mapping)
}
