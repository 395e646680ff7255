//! YAML Export functionality

use std::io::Write;
use tracing::info;

use crate::error::{FintrackError, FintrackResult};
use crate::export::json::InsightsExport;

/// Write an export as YAML, preceded by a comment header
pub fn export_yaml<W: Write>(export: &InsightsExport, writer: &mut W) -> FintrackResult<()> {
    let header = format!(
        "# fintrack insights export\n# Generated: {}\n# App Version: {}\n# Range: {}\n\n",
        export.exported_at, export.app_version, export.range
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export)?;
    info!(format = "yaml", "Exported insights");
    Ok(())
}
