//! CLI commands for reports

use clap::{Subcommand, ValueEnum};

use super::context::{CliContext, RangeArgs};
use crate::error::FintrackResult;
use crate::models::{BudgetId, GoalId, TransactionType};
use crate::reports::{
    BudgetOverviewReport, GoalReport, MonthlyReport, SpendingReport, SummaryReport,
};
use crate::storage::Snapshot;

/// Transaction type selector for category reports
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindArg {
    #[default]
    Expense,
    Income,
}

impl From<KindArg> for TransactionType {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Expense => TransactionType::Expense,
            KindArg::Income => TransactionType::Income,
        }
    }
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Totals per category
    #[command(alias = "spending")]
    Categories {
        /// Which transactions to group
        #[arg(long = "type", value_enum, default_value_t = KindArg::Expense)]
        kind: KindArg,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// Income and expenses per month
    Monthly {
        #[command(flatten)]
        range: RangeArgs,

        /// Keep the same month of different years apart
        #[arg(long)]
        by_year: bool,
    },

    /// Allocation, spending and status for each budget
    #[command(alias = "budget")]
    Budgets {
        /// Show a single budget
        #[arg(long)]
        id: Option<BudgetId>,
    },

    /// Progress toward each savings goal
    #[command(alias = "goal")]
    Goals {
        /// Show a single goal
        #[arg(long)]
        id: Option<GoalId>,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// Dashboard totals and status counts
    #[command(alias = "dashboard")]
    Summary {
        #[command(flatten)]
        range: RangeArgs,
    },
}

/// Handle report commands
pub fn handle_report_command(ctx: &CliContext, cmd: ReportCommands) -> FintrackResult<()> {
    let output = render_report(ctx, cmd)?;
    println!("{}", output);
    Ok(())
}

/// Build the terminal output for a report command
pub fn render_report(ctx: &CliContext, cmd: ReportCommands) -> FintrackResult<String> {
    let symbol = ctx.currency.as_str();

    let output = match cmd {
        ReportCommands::Categories { kind, range } => {
            SpendingReport::generate(&ctx.snapshot, &range.to_range()?, kind.into())
                .format_terminal(symbol)
        }
        ReportCommands::Monthly { range, by_year } => {
            MonthlyReport::generate(&ctx.snapshot, &range.to_range()?, by_year)
                .format_terminal(symbol)
        }
        ReportCommands::Budgets { id } => {
            let scoped;
            let snapshot = match id {
                Some(id) => {
                    let budget = ctx.snapshot.find_budget(&id)?;
                    scoped = Snapshot::new(
                        ctx.snapshot.transactions.clone(),
                        vec![budget.clone()],
                        Vec::new(),
                    );
                    &scoped
                }
                None => &ctx.snapshot,
            };
            BudgetOverviewReport::generate(snapshot, ctx.today).format_terminal(symbol)
        }
        ReportCommands::Goals { id, range } => {
            let range = range.to_range()?;
            let scoped;
            let snapshot = match id {
                Some(id) => {
                    let goal = ctx.snapshot.find_goal(&id)?;
                    scoped = Snapshot::new(Vec::new(), Vec::new(), vec![goal.clone()]);
                    &scoped
                }
                None => &ctx.snapshot,
            };
            GoalReport::generate(snapshot, &range, ctx.today).format_terminal(symbol)
        }
        ReportCommands::Summary { range } => {
            SummaryReport::generate(&ctx.snapshot, &range.to_range()?, ctx.today)
                .format_terminal(symbol)
        }
    };

    Ok(output)
}
