//! Pipeline node surface.
//!
//! Input nodes sit upstream of the chart processors in a dashboard's node
//! pipeline and produce [`DataTable`]s. The pipeline engine itself
//! (scheduling, wiring, persistence) lives in the host application; this
//! module only defines the contract a node fulfills and the two input
//! nodes the chart core ships with.
//!
//! I/O is injected through [`NodeContext`]: fetching a URL or running a
//! query is the host's problem, and nodes stay synchronous and testable.

mod data_input;
mod postgres_input;

pub use data_input::{DataInputNode, DataInputSettings};
pub use postgres_input::{PostgresInputNode, PostgresInputSettings};

use serde_json::Value;

use crate::error::Result;
use crate::table::DataTable;

/// Kind of payload flowing through a node port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortKind {
    /// A tabular payload.
    Table,
}

/// Description of one input or output port.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PortSpec {
    /// Port name, unique per node side.
    pub name: String,
    /// Payload kind.
    pub kind: PortKind,
}

impl PortSpec {
    /// Create a table port.
    #[must_use]
    pub fn table(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: PortKind::Table,
        }
    }
}

/// Host-provided I/O hooks.
///
/// Fetch and query mechanics are deliberately outside the crate; nodes
/// only describe *what* they need.
pub trait NodeContext {
    /// Fetch the text body behind a URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the resource cannot be fetched.
    fn fetch_text(&self, url: &str) -> Result<String>;

    /// Run a read-only query and return its result set as a table.
    ///
    /// # Errors
    ///
    /// Returns an error when the query cannot be executed.
    fn run_query(&self, query: &str) -> Result<DataTable>;
}

/// The contract every pipeline node fulfills.
pub trait PipelineNode {
    /// Derive output port specs from the connected input specs.
    fn configure(&self, in_specs: &[PortSpec]) -> Vec<PortSpec>;

    /// Check the current settings without executing.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting.
    fn validate_settings(&self) -> Result<()>;

    /// Replace the node settings from a JSON blob.
    ///
    /// # Errors
    ///
    /// Returns an error when the blob does not decode.
    fn load_settings(&mut self, settings: &Value) -> Result<()>;

    /// Serialize the node settings to a JSON blob.
    fn save_settings(&self) -> Value;

    /// Execute the node, producing one table per output port.
    ///
    /// # Errors
    ///
    /// Returns an error when settings are invalid or the host context
    /// fails.
    fn execute(&self, ctx: &dyn NodeContext) -> Result<Vec<DataTable>>;
}
