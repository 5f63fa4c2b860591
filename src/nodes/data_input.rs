//! CSV data-input node.
//!
//! Fetches CSV text through the host context, infers per-column types from
//! a sample of the first rows, and emits one typed [`DataTable`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{NodeContext, PipelineNode, PortSpec};
use crate::error::{Error, Result};
use crate::table::{parse_date_str, CellValue, ColumnType, DataColumn, DataTable};

/// Rows sampled for type inference.
const TYPE_SAMPLE_ROWS: usize = 10;
/// Share of sampled cells that must parse numeric for a Number column.
const NUMBER_THRESHOLD: f64 = 0.8;
/// Share of sampled cells that must parse as dates for a Date column.
const DATE_THRESHOLD: f64 = 0.7;

fn default_true() -> bool {
    true
}

fn default_delimiter() -> char {
    ','
}

/// Settings for [`DataInputNode`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataInputSettings {
    /// URL of the CSV resource.
    pub url: String,
    /// Whether the first row carries column names.
    pub has_header: bool,
    /// Field delimiter.
    pub delimiter: char,
}

impl Default for DataInputSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            has_header: default_true(),
            delimiter: default_delimiter(),
        }
    }
}

/// Node that turns a remote CSV resource into a typed table.
#[derive(Debug, Clone, Default)]
pub struct DataInputNode {
    settings: DataInputSettings,
}

impl DataInputNode {
    /// Create a node with the given settings.
    #[must_use]
    pub fn new(settings: DataInputSettings) -> Self {
        Self { settings }
    }

    /// The current settings.
    #[must_use]
    pub fn settings(&self) -> &DataInputSettings {
        &self.settings
    }
}

impl PipelineNode for DataInputNode {
    fn configure(&self, _in_specs: &[PortSpec]) -> Vec<PortSpec> {
        vec![PortSpec::table("table")]
    }

    fn validate_settings(&self) -> Result<()> {
        let url = self.settings.url.trim();
        if url.is_empty() {
            return Err(Error::MissingSetting("url"));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(Error::InvalidSetting {
                name: "url",
                reason: "must start with http:// or https://".to_string(),
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
        let text = ctx.fetch_text(self.settings.url.trim())?;
        let table = parse_csv(&text, self.settings.delimiter, self.settings.has_header)?;
        tracing::debug!(
            rows = table.nrow(),
            columns = table.ncol(),
            "data-input node produced table"
        );
        Ok(vec![table])
    }
}

/// Parse CSV text into a typed table.
fn parse_csv(text: &str, delimiter: char, has_header: bool) -> Result<DataTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(has_header)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        records.push(record.iter().map(|cell| cell.trim().to_string()).collect());
    }

    let headers: Vec<String> = if has_header {
        reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect()
    } else {
        let width = records.first().map_or(0, Vec::len);
        (1..=width).map(|i| format!("column_{i}")).collect()
    };

    if headers.is_empty() {
        return Ok(DataTable::new());
    }

    let types: Vec<ColumnType> = (0..headers.len())
        .map(|col| infer_column_type(&records, col))
        .collect();

    let columns: Vec<DataColumn> = headers
        .iter()
        .zip(&types)
        .map(|(name, column_type)| DataColumn::new(name, *column_type))
        .collect();

    let mut table = DataTable::with_columns(columns)?;
    for record in &records {
        let cells: Vec<CellValue> = (0..headers.len())
            .map(|col| {
                let raw = record.get(col).map_or("", String::as_str);
                typed_cell(raw, types[col])
            })
            .collect();
        table.push_row(cells)?;
    }
    Ok(table)
}

/// Infer a column type by sampling the first rows.
///
/// Over the non-empty cells of the sample: ≥ 80% numeric parses make a
/// Number column, else ≥ 70% date parses make a Date column, else Text.
fn infer_column_type(records: &[Vec<String>], col: usize) -> ColumnType {
    let sample: Vec<&str> = records
        .iter()
        .take(TYPE_SAMPLE_ROWS)
        .filter_map(|record| record.get(col).map(String::as_str))
        .filter(|cell| !cell.is_empty())
        .collect();

    if sample.is_empty() {
        return ColumnType::Text;
    }

    let total = sample.len() as f64;
    let numeric = sample
        .iter()
        .filter(|cell| cell.parse::<f64>().is_ok())
        .count() as f64;
    if numeric / total >= NUMBER_THRESHOLD {
        return ColumnType::Number;
    }

    let dates = sample
        .iter()
        .filter(|cell| parse_date_str(cell).is_some())
        .count() as f64;
    if dates / total >= DATE_THRESHOLD {
        return ColumnType::Date;
    }

    ColumnType::Text
}

fn typed_cell(raw: &str, column_type: ColumnType) -> CellValue {
    if raw.is_empty() {
        return CellValue::Null;
    }
    match column_type {
        ColumnType::Number => raw
            .parse::<f64>()
            .map_or_else(|_| CellValue::Text(raw.to_string()), CellValue::Number),
        ColumnType::Date => parse_date_str(raw)
            .map_or_else(|| CellValue::Text(raw.to_string()), CellValue::Date),
        ColumnType::Text => CellValue::Text(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct StaticContext {
        body: String,
    }

    impl NodeContext for StaticContext {
        fn fetch_text(&self, _url: &str) -> Result<String> {
            Ok(self.body.clone())
        }

        fn run_query(&self, _query: &str) -> Result<DataTable> {
            Err(Error::Query("not supported".to_string()))
        }
    }

    fn node(url: &str) -> DataInputNode {
        DataInputNode::new(DataInputSettings {
            url: url.to_string(),
            ..DataInputSettings::default()
        })
    }

    #[test]
    fn test_validate_missing_url() {
        let node = DataInputNode::default();
        assert!(matches!(
            node.validate_settings(),
            Err(Error::MissingSetting("url"))
        ));
    }

    #[test]
    fn test_validate_malformed_url() {
        let node = node("ftp://example.com/data.csv");
        assert!(matches!(
            node.validate_settings(),
            Err(Error::InvalidSetting { name: "url", .. })
        ));
    }

    #[test]
    fn test_execute_infers_types() {
        let ctx = StaticContext {
            body: "name,score,joined\nAlice,95.5,2024-01-02\nBob,87,2024-02-03\n".to_string(),
        };
        let tables = node("https://example.com/data.csv").execute(&ctx).unwrap();
        assert_eq!(tables.len(), 1);
        let table = &tables[0];
        assert_eq!(table.nrow(), 2);
        let types: Vec<ColumnType> = table.columns().iter().map(|c| c.column_type).collect();
        assert_eq!(
            types,
            vec![ColumnType::Text, ColumnType::Number, ColumnType::Date]
        );
        assert_eq!(
            table.rows()[0][2],
            CellValue::Date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
        );
    }

    #[test]
    fn test_number_threshold() {
        // 7 of 10 numeric is below the 80% bar -> Text.
        let records: Vec<Vec<String>> = (0..10)
            .map(|i| {
                let cell = if i < 7 { i.to_string() } else { format!("x{i}") };
                vec![cell]
            })
            .collect();
        assert_eq!(infer_column_type(&records, 0), ColumnType::Text);

        // 8 of 10 numeric clears it.
        let records: Vec<Vec<String>> = (0..10)
            .map(|i| {
                let cell = if i < 8 { i.to_string() } else { format!("x{i}") };
                vec![cell]
            })
            .collect();
        assert_eq!(infer_column_type(&records, 0), ColumnType::Number);
    }

    #[test]
    fn test_date_threshold() {
        // 7 of 10 date-parseable clears the 70% bar.
        let records: Vec<Vec<String>> = (0..10)
            .map(|i| {
                let cell = if i < 7 {
                    format!("2024-01-{:02}", i + 1)
                } else {
                    format!("note {i}")
                };
                vec![cell]
            })
            .collect();
        assert_eq!(infer_column_type(&records, 0), ColumnType::Date);
    }

    #[test]
    fn test_inference_ignores_rows_beyond_sample() {
        // Junk after the first 10 rows does not flip a numeric column.
        let mut records: Vec<Vec<String>> = (0..10).map(|i| vec![i.to_string()]).collect();
        records.push(vec!["garbage".to_string()]);
        assert_eq!(infer_column_type(&records, 0), ColumnType::Number);
    }

    #[test]
    fn test_headerless_csv_gets_positional_names() {
        let table = parse_csv("1,2\n3,4\n", ',', false).unwrap();
        assert_eq!(table.headers(), vec!["column_1", "column_2"]);
        assert_eq!(table.nrow(), 2);
    }

    #[test]
    fn test_settings_roundtrip() {
        let mut node = DataInputNode::default();
        let blob = serde_json::json!({
            "url": "https://example.com/x.csv",
            "hasHeader": false,
            "delimiter": ";"
        });
        node.load_settings(&blob).unwrap();
        assert_eq!(node.settings().url, "https://example.com/x.csv");
        assert!(!node.settings().has_header);
        assert_eq!(node.settings().delimiter, ';');
        assert_eq!(node.save_settings(), blob);
    }

    #[test]
    fn test_configure_emits_one_table_port() {
        let ports = DataInputNode::default().configure(&[]);
        assert_eq!(ports, vec![PortSpec::table("table")]);
    }

    #[test]
    fn test_execute_rejects_invalid_settings() {
        let ctx = StaticContext {
            body: String::new(),
        };
        assert!(DataInputNode::default().execute(&ctx).is_err());
    }
}
