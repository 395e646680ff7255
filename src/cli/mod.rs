//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the report and service layers.

pub mod context;
pub mod export;
pub mod notifications;
pub mod report;

pub use context::{CliContext, RangeArgs};
pub use export::{handle_export_command, ExportArgs};
pub use notifications::{handle_notifications_command, NotificationArgs};
pub use report::{handle_report_command, ReportCommands};
