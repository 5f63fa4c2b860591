//! # Chartflow
//!
//! Tabular-data-to-chart-shape transformation library for dashboard
//! applications.
//!
//! Chartflow turns a generic columnar [`DataTable`](table::DataTable) into
//! the nested/array shapes chart renderers consume: flat x/y series,
//! category records, hierarchies, adjacency matrices, node/link graphs,
//! and quartile summaries. 23 chart types share one dispatch surface and
//! one failure philosophy: a processor never errors, it degrades to an
//! empty shape.
//!
//! ## Quick Start
//!
//! ```rust
//! use chartflow::prelude::*;
//!
//! let mut table = DataTable::with_columns(vec![
//!     DataColumn::new("category", ColumnType::Text),
//!     DataColumn::new("amount", ColumnType::Number),
//! ])
//! .unwrap();
//! table
//!     .push_row(vec!["ads".into(), CellValue::Number(120.0)])
//!     .unwrap();
//!
//! let config: ChartConfig = serde_json::from_str(
//!     r#"{ "type": "pie",
//!          "dataMapping": { "idColumn": "category", "valueColumn": "amount" } }"#,
//! )
//! .unwrap();
//!
//! assert!(validate_data_table_for_chart(&table, &config).valid);
//! let data = process_chart_data(&table, &config);
//! assert!(!data.is_empty());
//! ```
//!
//! ## Design
//!
//! - **Pure processors**: every `process` call is synchronous,
//!   side-effect-free, and recomputes from scratch; no caching, no input
//!   mutation.
//! - **Empty over errors**: missing columns and malformed rows produce
//!   empty output, not errors; validity is a separate question answered by
//!   [`validate_data_table_for_chart`](registry::validate_data_table_for_chart).
//! - **Strict configs**: chart configurations are a serde-tagged union
//!   with one strict record per chart type, not loose property bags.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code.
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Tabular data abstraction, scalar coercion, and column validation.
pub mod table;

/// Comparator-based row reordering.
pub mod sort;

/// Chart configurations and data mappings.
pub mod config;

/// Processed chart data shapes.
pub mod shape;

// ============================================================================
// Processing Modules
// ============================================================================

/// Per-chart data processors.
pub mod charts;

/// Chart-type-keyed dispatch.
pub mod registry;

// ============================================================================
// Pipeline Modules
// ============================================================================

/// Pipeline node surface (data-input, postgres-input).
pub mod nodes;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for chartflow operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use chartflow::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{ChartConfig, ChartType, ScaleType};
    pub use crate::error::{Error, Result};
    pub use crate::registry::{
        process_chart_data, required_columns_for_chart, validate_data_table_for_chart,
    };
    pub use crate::shape::ChartData;
    pub use crate::sort::{sort_rows, SortConfig, SortOptions};
    pub use crate::table::{
        clean_string, parse_data_table, process_x_value, to_date, to_number,
        validate_data_table_columns, CellValue, ColumnCheck, ColumnType, DataColumn, DataTable,
    };
}
