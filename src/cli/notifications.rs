//! CLI command for notifications

use clap::Args;
use std::io::IsTerminal;

use super::context::CliContext;
use crate::display::format_notification_list;
use crate::error::FintrackResult;
use crate::services::{generate_notifications_with, Notification};

/// Options for the notifications command
#[derive(Args, Debug, Clone, Default)]
pub struct NotificationArgs {
    /// Print notifications as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Derive notifications from the current snapshot using configured thresholds
pub fn collect_notifications(ctx: &CliContext) -> Vec<Notification> {
    generate_notifications_with(
        &ctx.snapshot.budgets,
        &ctx.snapshot.goals,
        &ctx.snapshot.transactions,
        &ctx.settings.notification_thresholds,
    )
}

/// Handle the notifications command
pub fn handle_notifications_command(
    ctx: &CliContext,
    args: NotificationArgs,
) -> FintrackResult<()> {
    let notifications = collect_notifications(ctx);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&notifications)?);
    } else {
        let colored = !args.no_color && std::io::stdout().is_terminal();
        print!("{}", format_notification_list(&notifications, colored));
        if notifications.is_empty() {
            println!();
        }
    }

    Ok(())
}
