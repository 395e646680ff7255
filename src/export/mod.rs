//! Export module for fintrack
//!
//! Writes the full set of derived insights in machine-readable form:
//! - JSON: for scripts and dashboards
//! - YAML: for human reading

pub mod json;
pub mod yaml;

pub use json::{export_json, ExportMetadata, InsightsExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;

use std::fmt;
use std::str::FromStr;

use crate::error::FintrackError;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = FintrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(FintrackError::Validation(format!(
                "Unknown export format '{}'. Use json or yaml.",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("YML".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert!("csv".parse::<ExportFormat>().unwrap_err().is_validation());
        assert_eq!(ExportFormat::Yaml.extension(), "yaml");
    }
}
