//! Savings Goal Report
//!
//! Progress toward every savings goal. A date range narrows which
//! contributions count toward the saved figure; status is always judged on
//! the full contribution history.

use chrono::NaiveDate;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::display::{format_bar, format_money, format_percentage, render_table};
use crate::models::{DateRange, Money};
use crate::services::{goal_progress_in_range, goal_status, GoalProgress, ProgressStatus};
use crate::storage::Snapshot;

/// A row in the goal report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalReportRow {
    #[serde(flatten)]
    pub progress: GoalProgress,
    pub status: ProgressStatus,
    pub deadline: Option<NaiveDate>,
    /// Contributions counted toward `saved`
    pub contribution_count: usize,
}

/// Savings Goal Report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalReport {
    pub range: DateRange,
    pub today: NaiveDate,
    pub rows: Vec<GoalReportRow>,
    pub total_target: Money,
    pub total_saved: Money,
}

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "Goal")]
    title: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl GoalReport {
    /// Generate the goal report
    pub fn generate(snapshot: &Snapshot, range: &DateRange, today: NaiveDate) -> Self {
        let rows: Vec<GoalReportRow> = snapshot
            .goals
            .iter()
            .map(|goal| GoalReportRow {
                progress: goal_progress_in_range(goal, range),
                status: goal_status(goal, today),
                deadline: goal.deadline,
                contribution_count: goal
                    .contributions
                    .iter()
                    .filter(|c| range.contains(c.date))
                    .count(),
            })
            .collect();

        let total_target: Money = rows.iter().map(|r| r.progress.target).sum();
        let total_saved: Money = rows.iter().map(|r| r.progress.saved).sum();
        debug!(goals = rows.len(), %range, %today, "Generated goal report");

        Self {
            range: *range,
            today,
            rows,
            total_target,
            total_saved,
        }
    }

    /// Number of goals with the given status
    pub fn count_with_status(&self, status: ProgressStatus) -> usize {
        self.rows.iter().filter(|r| r.status == status).count()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Savings Goals as of {} (contributions: {})\n",
            self.today, self.range
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No savings goals found.\n");
            return output;
        }

        let rows: Vec<GoalRow> = self
            .rows
            .iter()
            .map(|r| GoalRow {
                title: r.progress.title.clone(),
                target: format_money(r.progress.target, symbol),
                saved: format_money(r.progress.saved, symbol),
                remaining: format_money(r.progress.remaining, symbol),
                progress: format!(
                    "{} {}",
                    format_bar(r.progress.percentage, 100.0, 10),
                    format_percentage(r.progress.percentage)
                ),
                deadline: r
                    .deadline
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                status: r.status.to_string(),
            })
            .collect();

        output.push_str(&render_table(&rows));
        output.push('\n');
        output.push_str(&format!(
            "\nTotal saved: {} of {}\n",
            format_money(self.total_saved, symbol),
            format_money(self.total_target, symbol)
        ));
        output
    }
}
