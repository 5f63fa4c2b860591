//! Per-chart data processors.
//!
//! One module per chart type. Each exposes two functions with the same
//! contract:
//!
//! - `process(&DataTable, &Config) -> <shape>`: pure transform; degrades
//!   to the empty shape when required columns are missing or no row
//!   survives coercion. Never errors, never panics on malformed data.
//! - `required_columns(&Config) -> Vec<String>`: the column dependency
//!   list derived from the config's data mapping.
//!
//! Validation is uniform (`required_columns` + the column validator) and
//! lives in the registry.

pub mod area_bump;
pub mod bar;
pub mod box_plot;
pub mod bullet;
pub mod bump;
pub mod calendar;
pub mod chord;
pub mod circle_packing;
pub mod funnel;
pub mod heatmap;
mod hierarchy;
pub mod line;
pub mod network;
pub mod pie;
pub mod radar;
pub mod radial_bar;
pub mod sankey;
pub mod scatter;
pub mod stream;
pub mod sunburst;
pub mod swarm_plot;
pub mod treemap;
pub mod voronoi;
pub mod waffle;
