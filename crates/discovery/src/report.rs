//! Rendering of discovery results for operators.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::{ClusterDescriptor, Result};

const HEADERS: [&str; 4] = ["NAME", "STATUS", "ORIGIN", "STACK"];

/// Output format of a discovery report.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    /// Aligned columns.
    #[default]
    Table,

    /// Pretty-printed JSON array.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => f.write_str("table"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Renders descriptors in the requested format.
///
/// # Errors
///
/// Returns [`crate::Error::Report`] if JSON serialization fails.
pub fn render(descriptors: &[ClusterDescriptor], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(descriptors)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(descriptors)?),
    }
}

fn render_table(descriptors: &[ClusterDescriptor]) -> String {
    let rows: Vec<[String; 4]> = descriptors
        .iter()
        .map(|d| {
            [
                d.name.clone(),
                d.status.to_string(),
                d.origin.to_string(),
                d.stack_id().unwrap_or("-").to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let format_row = |cells: [&str; 4]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_row(HEADERS)];
    lines.extend(
        rows.iter()
            .map(|row| format_row(row.each_ref().map(String::as_str))),
    );

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use kubescout_cloud::{ClusterRecord, StackSummary};
    use pretty_assertions::assert_eq;

    use super::*;

    fn descriptors() -> Vec<ClusterDescriptor> {
        vec![
            ClusterDescriptor::native(&ClusterRecord::new("test-cluster", "ACTIVE")),
            ClusterDescriptor::from_stack(
                "legacy-cluster",
                &StackSummary::new("legacy-cluster", "CREATE_COMPLETE").with_stack_id("stack-1"),
            ),
        ]
    }

    #[test]
    fn test_table_is_aligned() {
        let table = render(&descriptors(), OutputFormat::Table).unwrap();

        assert_eq!(
            table,
            [
                "NAME            STATUS           ORIGIN                STACK",
                "test-cluster    ACTIVE           native                -",
                "legacy-cluster  CREATE_COMPLETE  infrastructure-stack  stack-1",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_empty_table_has_headers_only() {
        assert_eq!(
            render(&[], OutputFormat::Table).unwrap(),
            "NAME  STATUS  ORIGIN  STACK"
        );
    }

    #[test]
    fn test_json_lists_every_descriptor() {
        let json = render(&descriptors(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["name"], "test-cluster");
        assert_eq!(value[0]["origin"], "native");
        assert_eq!(value[1]["status"], "CREATE_COMPLETE");
        assert_eq!(value[1]["stack_id"], "stack-1");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("table".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
