//! Postgres data-input node.
//!
//! Holds connection settings and a read-only query; execution goes through
//! the host context, which owns the actual connection. The node checks the
//! settings and passes the result table through untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{NodeContext, PipelineNode, PortSpec};
use crate::error::{Error, Result};
use crate::table::DataTable;

fn default_port() -> u16 {
    5432
}

/// Settings for [`PostgresInputNode`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostgresInputSettings {
    /// Server host name.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Database name.
    pub database: String,
    /// User name.
    pub user: String,
    /// Password.
    pub password: String,
    /// The query to run; must be a SELECT.
    pub query: String,
}

impl Default for PostgresInputSettings {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: default_port(),
            database: String::new(),
            user: String::new(),
            password: String::new(),
            query: String::new(),
        }
    }
}

/// Node that sources a table from a Postgres query.
#[derive(Debug, Clone, Default)]
pub struct PostgresInputNode {
    settings: PostgresInputSettings,
}

impl PostgresInputNode {
    /// Create a node with the given settings.
    #[must_use]
    pub fn new(settings: PostgresInputSettings) -> Self {
        Self { settings }
    }

    /// The current settings.
    #[must_use]
    pub fn settings(&self) -> &PostgresInputSettings {
        &self.settings
    }
}

impl PipelineNode for PostgresInputNode {
    fn configure(&self, _in_specs: &[PortSpec]) -> Vec<PortSpec> {
        vec![PortSpec::table("table")]
    }

    fn validate_settings(&self) -> Result<()> {
        if self.settings.host.trim().is_empty() {
            return Err(Error::MissingSetting("host"));
        }
        if self.settings.database.trim().is_empty() {
            return Err(Error::MissingSetting("database"));
        }
        let query = self.settings.query.trim();
        if query.is_empty() {
            return Err(Error::MissingSetting("query"));
        }
        if !query.to_lowercase().starts_with("select") {
            return Err(Error::InvalidSetting {
                name: "query",
                reason: "only SELECT queries are allowed".to_string(),
            });
        }
        Ok(())
    }

    fn load_settings(&mut self, settings: &Value) -> Result<()> {
        self.settings = serde_json::from_value(settings.clone())?;
        Ok(())
    }

    fn save_settings(&self) -> Value {
        serde_json::to_value(&self.settings).unwrap_or(Value::Null)
    }

    fn execute(&self, ctx: &dyn NodeContext) -> Result<Vec<DataTable>> {
        self.validate_settings()?;
        let table = ctx.run_query(self.settings.query.trim())?;
        tracing::debug!(
            rows = table.nrow(),
            columns = table.ncol(),
            "postgres-input node produced table"
        );
        Ok(vec![table])
    }
}
