//! Budget Overview Report
//!
//! Allocation, spending and status for every budget.

use chrono::NaiveDate;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::display::{format_bar, format_money, render_table};
use crate::models::Money;
use crate::services::{budget_progress, budget_status, BudgetProgress, ProgressStatus};
use crate::storage::Snapshot;

/// A row in the budget overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetOverviewRow {
    #[serde(flatten)]
    pub progress: BudgetProgress,
    pub status: ProgressStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl BudgetOverviewRow {
    /// Check if spending has gone past the allocation
    pub fn is_overspent(&self) -> bool {
        self.progress.remaining.is_negative()
    }
}

/// Budget Overview Report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetOverviewReport {
    pub today: NaiveDate,
    pub rows: Vec<BudgetOverviewRow>,
    pub total_allocated: Money,
    pub total_spent: Money,
    pub total_remaining: Money,
}

#[derive(Tabled)]
struct OverviewRow {
    #[tabled(rename = "Budget")]
    category: String,
    #[tabled(rename = "Allocated")]
    allocated: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl BudgetOverviewReport {
    /// Generate the overview as of `today`
    ///
    /// Spending counts every expense linked to a budget, whatever its date.
    pub fn generate(snapshot: &Snapshot, today: NaiveDate) -> Self {
        let rows: Vec<BudgetOverviewRow> = snapshot
            .budgets
            .iter()
            .map(|budget| BudgetOverviewRow {
                progress: budget_progress(budget, &snapshot.transactions),
                status: budget_status(budget, &snapshot.transactions, today),
                start_date: budget.start_date,
                end_date: budget.end_date,
            })
            .collect();

        let total_allocated: Money = rows.iter().map(|r| r.progress.allocated).sum();
        let total_spent: Money = rows.iter().map(|r| r.progress.spent).sum();
        debug!(budgets = rows.len(), %today, "Generated budget overview");

        Self {
            today,
            rows,
            total_allocated,
            total_spent,
            total_remaining: total_allocated - total_spent,
        }
    }

    /// Number of budgets with the given status
    pub fn count_with_status(&self, status: ProgressStatus) -> usize {
        self.rows.iter().filter(|r| r.status == status).count()
    }

    /// Budgets that have gone past their allocation
    pub fn overspent(&self) -> impl Iterator<Item = &BudgetOverviewRow> {
        self.rows.iter().filter(|r| r.is_overspent())
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Budget Overview as of {}\n", self.today));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No budgets found.\n");
            return output;
        }

        let mut rows: Vec<OverviewRow> = self
            .rows
            .iter()
            .map(|r| OverviewRow {
                category: r.progress.category.clone(),
                allocated: format_money(r.progress.allocated, symbol),
                spent: format_money(r.progress.spent, symbol),
                remaining: format_money(r.progress.remaining, symbol),
                used: format!(
                    "{} {:>3}%",
                    format_bar(r.progress.percentage as f64, 100.0, 10),
                    r.progress.percentage
                ),
                status: r.status.to_string(),
            })
            .collect();
        rows.push(OverviewRow {
            category: "TOTAL".to_string(),
            allocated: format_money(self.total_allocated, symbol),
            spent: format_money(self.total_spent, symbol),
            remaining: format_money(self.total_remaining, symbol),
            used: String::new(),
            status: String::new(),
        });

        output.push_str(&render_table(&rows));
        output.push('\n');

        let overspent: Vec<&str> = self
            .overspent()
            .map(|r| r.progress.category.as_str())
            .collect();
        if !overspent.is_empty() {
            output.push_str(&format!("\nOverspent: {}\n", overspent.join(", ")));
        }

        output
    }
}
