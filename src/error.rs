//! Error types for chartflow operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur on the fallible surfaces of chartflow.
///
/// Chart processors never return errors; they degrade to empty shapes.
/// Errors are reserved for table construction and the node surface
/// (settings, fetch, query).
#[derive(Error, Debug)]
pub enum Error {
    /// Row pushed into a table with the wrong number of cells.
    #[error("Row width mismatch: table has {expected} columns, row has {actual} cells")]
    RowWidthMismatch {
        /// Number of columns in the table.
        expected: usize,
        /// Number of cells in the rejected row.
        actual: usize,
    },

    /// Column added with a name that already exists in the table.
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// A required node setting is missing.
    #[error("Missing setting: {0}")]
    MissingSetting(&'static str),

    /// Node setting present but rejected by validation.
    #[error("Invalid setting {name}: {reason}")]
    InvalidSetting {
        /// Name of the rejected setting.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Settings blob could not be decoded.
    #[error("Settings decode error: {0}")]
    SettingsDecode(#[from] serde_json::Error),

    /// CSV content could not be parsed.
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// The host context failed to fetch a resource.
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// The host context failed to run a query.
    #[error("Query failed: {0}")]
    Query(String),
}
