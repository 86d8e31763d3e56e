//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use zapi::error::Result;

pub mod json;
pub mod table;

/// Types that can be rendered in every supported output format
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        let output = self.format(format)?;
        println!("{}", output);
        Ok(())
    }
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled, Serialize)]
    struct Row {
        #[tabled(rename = "ID")]
        id: i64,
    }

    #[test]
    fn test_vec_formats_as_table() {
        let rows = vec![Row { id: 54 }];
        let out = rows.format(OutputFormat::Table).unwrap();
        assert!(out.contains("ID"));
        assert!(out.contains("54"));
    }

    #[test]
    fn test_vec_formats_as_json_envelope() {
        let rows = vec![Row { id: 54 }];
        let out = rows.format(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["data"][0]["id"], 54);
        assert!(value["meta"]["version"].is_string());
    }

    #[test]
    fn test_empty_vec_json_is_empty_array() {
        let rows: Vec<Row> = vec![];
        let out = rows.format(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["data"], serde_json::json!([]));
    }
}
