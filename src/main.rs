use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use fintrack::cli::{
    handle_export_command, handle_notifications_command, handle_report_command, CliContext,
    ExportArgs, NotificationArgs, ReportCommands,
};
use fintrack::config::{paths::FintrackPaths, settings::Settings};
use fintrack::storage::Snapshot;

/// Environment variable holding an EnvFilter directive for logging
const LOG_ENV: &str = "FINTRACK_LOG";

#[derive(Parser)]
#[command(
    name = "fintrack",
    author = "Kaylee Beyene",
    version,
    about = "Budget, savings goal and spending insights",
    long_about = "fintrack reads a snapshot of your personal finance tracker \
                  (transactions, budgets and savings goals) and reports on \
                  spending, budget progress and goal milestones."
)]
struct Cli {
    /// Snapshot file to read (defaults to <data dir>/snapshot.json)
    #[arg(long, global = true, env = "FINTRACK_SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// Currency symbol for amounts (overrides settings)
    #[arg(long, global = true)]
    currency: Option<String>,

    /// Reference date for status checks (YYYY-MM-DD, defaults to today)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show budget and goal notifications
    #[command(alias = "alerts")]
    Notifications(NotificationArgs),

    /// Export all insights as JSON or YAML
    Export(ExportArgs),

    /// Show current configuration and paths
    Config {
        /// Write the settings, including any --currency override, to the config file
        #[arg(long)]
        save: bool,
    },
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Global options that shape how a snapshot is loaded and shown
struct GlobalOptions {
    snapshot: Option<PathBuf>,
    currency: Option<String>,
    today: Option<NaiveDate>,
}

impl GlobalOptions {
    fn snapshot_path(&self, paths: &FintrackPaths) -> PathBuf {
        self.snapshot
            .clone()
            .unwrap_or_else(|| paths.snapshot_file())
    }

    /// Load the snapshot and build the handler context
    fn load_context(self, paths: &FintrackPaths, settings: Settings) -> Result<CliContext> {
        let path = self.snapshot_path(paths);
        let snapshot = Snapshot::load(&path)
            .with_context(|| format!("Could not load snapshot from {}", path.display()))?;
        if snapshot.is_empty() {
            warn!(path = %path.display(), "Snapshot contains no records");
        }

        let today = self
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        Ok(CliContext::new(snapshot, settings, today).with_currency(self.currency))
    }
}

fn main() -> Result<()> {
    let Cli {
        snapshot,
        currency,
        today,
        verbose,
        command,
    } = Cli::parse();
    init_logging(verbose);

    let options = GlobalOptions {
        snapshot,
        currency,
        today,
    };

    // Initialize paths and settings
    let paths = FintrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match command {
        Some(Commands::Report(cmd)) => {
            handle_report_command(&options.load_context(&paths, settings)?, cmd)?;
        }
        Some(Commands::Notifications(args)) => {
            handle_notifications_command(&options.load_context(&paths, settings)?, args)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&options.load_context(&paths, settings)?, args)?;
        }
        Some(Commands::Config { save }) => show_config(&options, &paths, &settings, save)?,
        None => {
            println!("fintrack - budget and savings goal insights");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack report summary' for a dashboard overview.");
        }
    }

    Ok(())
}

fn show_config(
    options: &GlobalOptions,
    paths: &FintrackPaths,
    settings: &Settings,
    save: bool,
) -> Result<()> {
    let currency = options
        .currency
        .as_deref()
        .unwrap_or(&settings.currency_symbol);
    let thresholds = &settings.notification_thresholds;

    println!("fintrack Configuration");
    println!("======================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Export directory: {}", paths.export_dir().display());
    println!("Snapshot file:    {}", options.snapshot_path(paths).display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", currency);
    println!(
        "  Date format:     {} (today: {})",
        settings.date_format,
        settings.format_date(options.today.unwrap_or_else(|| chrono::Local::now().date_naive()))
    );
    println!(
        "  Budget alerts:   warning at {}%, exceeded at {}%",
        thresholds.budget_warning, thresholds.budget_exceeded
    );
    println!(
        "  Goal alerts:     halfway at {}%, almost at {}%, reached at {}%",
        thresholds.goal_halfway, thresholds.goal_almost, thresholds.goal_reached
    );

    if save {
        let mut saved = settings.clone();
        saved.currency_symbol = currency.to_string();
        saved.save(paths)?;
        println!();
        println!("Settings written to: {}", paths.settings_file().display());
    }

    Ok(())
}
