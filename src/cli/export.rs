//! CLI command for exporting insights

use clap::Args;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use super::context::{CliContext, RangeArgs};
use crate::error::{FintrackError, FintrackResult};
use crate::export::{export_json, export_yaml, ExportFormat, InsightsExport};

/// Options for the export command
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output format (json or yaml)
    pub format: ExportFormat,

    #[command(flatten)]
    pub range: RangeArgs,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Compact JSON without indentation
    #[arg(long)]
    pub compact: bool,
}

/// Handle the export command
pub fn handle_export_command(ctx: &CliContext, args: ExportArgs) -> FintrackResult<()> {
    let range = args.range.to_range()?;
    let export = InsightsExport::generate(
        &ctx.snapshot,
        &range,
        ctx.today,
        &ctx.settings.notification_thresholds,
    );

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                FintrackError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(&export, args.format, !args.compact, &mut writer)?;
            writer
                .flush()
                .map_err(|e| FintrackError::Export(e.to_string()))?;
            eprintln!("Exported {} to: {}", args.format, path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_export(&export, args.format, !args.compact, &mut writer)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    export: &InsightsExport,
    format: ExportFormat,
    pretty: bool,
    writer: &mut W,
) -> FintrackResult<()> {
    match format {
        ExportFormat::Json => export_json(export, writer, pretty),
        ExportFormat::Yaml => export_yaml(export, writer),
    }
}
