//! Dashboard Summary Report
//!
//! Headline totals for a date range plus a count of budget and goal
//! statuses as of today.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::display::{format_money, format_percentage, separator};
use crate::models::{DateRange, Money, TransactionType};
use crate::services::{
    budget_status, date_span, filter_transactions, goal_status, group_by_category, summarize,
    CategoryTotal, FinancialSummary, ProgressStatus,
};
use crate::storage::Snapshot;

/// Number of expense categories listed on the dashboard
const TOP_CATEGORIES: usize = 5;

/// How many budgets or goals are in each status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub on_track: usize,
    pub behind: usize,
    pub completed: usize,
}

impl StatusCounts {
    fn tally(statuses: impl Iterator<Item = ProgressStatus>) -> Self {
        statuses.fold(Self::default(), |mut counts, status| {
            match status {
                ProgressStatus::OnTrack => counts.on_track += 1,
                ProgressStatus::Behind => counts.behind += 1,
                ProgressStatus::Completed => counts.completed += 1,
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.on_track + self.behind + self.completed
    }
}

/// Dashboard Summary Report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    pub range: DateRange,
    pub today: NaiveDate,
    #[serde(flatten)]
    pub summary: FinancialSummary,
    /// Earliest and latest transaction date in the range
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    /// Largest expense categories, biggest first
    pub top_expenses: Vec<CategoryTotal>,
    pub budgets: StatusCounts,
    pub goals: StatusCounts,
}

impl SummaryReport {
    /// Generate the dashboard summary
    pub fn generate(snapshot: &Snapshot, range: &DateRange, today: NaiveDate) -> Self {
        let transactions = filter_transactions(&snapshot.transactions, range);
        let summary = summarize(&transactions);
        let span = date_span(&transactions);

        let mut top_expenses = group_by_category(&transactions, TransactionType::Expense);
        top_expenses.sort_by(|a, b| b.value.cmp(&a.value));
        top_expenses.truncate(TOP_CATEGORIES);

        let budgets = StatusCounts::tally(
            snapshot
                .budgets
                .iter()
                .map(|b| budget_status(b, &snapshot.transactions, today)),
        );
        let goals = StatusCounts::tally(snapshot.goals.iter().map(|g| goal_status(g, today)));

        debug!(%range, transactions = summary.transaction_count, "Generated summary report");

        Self {
            range: *range,
            today,
            summary,
            first_date: span.map(|(first, _)| first),
            last_date: span.map(|(_, last)| last),
            top_expenses,
            budgets,
            goals,
        }
    }

    /// Share of income left after expenses, 0 when there is no income
    pub fn savings_rate(&self) -> f64 {
        self.summary
            .net_balance
            .percent_of(self.summary.total_income)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();
        let s = &self.summary;

        output.push_str(&format!("Financial Summary: {}\n", self.range));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str(&format!(
            "{:<20} {:>16}\n",
            "Total Income:",
            format_money(s.total_income, symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            "Total Expenses:",
            format_money(s.total_expenses, symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            "Net Balance:",
            format_money(s.net_balance, symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            "Savings Rate:",
            format_percentage(self.savings_rate())
        ));
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            "Transactions:",
            s.transaction_count
        ));
        if let (Some(first), Some(last)) = (self.first_date, self.last_date) {
            output.push_str(&format!("{:<20} {} to {}\n", "Activity:", first, last));
        }

        if !self.top_expenses.is_empty() {
            output.push_str(&format!("\nTop Expense Categories\n{}\n", separator(40)));
            for category in &self.top_expenses {
                output.push_str(&format!(
                    "  {:<22} {:>14}\n",
                    category.name,
                    format_money(category.value, symbol)
                ));
            }
        }

        output.push_str(&format!("\nStatus as of {}\n{}\n", self.today, separator(40)));
        output.push_str(&format_counts("Budgets", &self.budgets));
        output.push_str(&format_counts("Goals", &self.goals));

        output
    }
}

fn format_counts(label: &str, counts: &StatusCounts) -> String {
    format!(
        "  {:<8} {} total: {} on track, {} behind, {} completed\n",
        label,
        counts.total(),
        counts.on_track,
        counts.behind,
        counts.completed
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, SavingsGoal, Transaction};

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn snapshot() -> Snapshot {
        let food = Budget::for_period("Food", Money::from_units(100), date(1, 1), date(1, 31))
            .with_id(1u64);
        let mut goal = SavingsGoal::new("Car", Money::from_units(100)).with_id(1u64);
        goal.contribute(Money::from_units(100), date(1, 2));

        let transactions = vec![
            Transaction::income("Salary", Money::from_units(2000), date(1, 1)),
            Transaction::expense("Food", Money::from_units(40), date(1, 3))
                .with_budget(food.id.clone()),
            Transaction::expense("Rent", Money::from_units(900), date(1, 4)),
            Transaction::expense("Food", Money::from_units(60), date(1, 20))
                .with_budget(food.id.clone()),
            Transaction::expense("Travel", Money::from_units(300), date(2, 2)),
        ];
        Snapshot::new(transactions, vec![food], vec![goal])
    }

    #[test]
    fn test_generate() {
        let range = DateRange::between(date(1, 1), date(1, 31));
        let report = SummaryReport::generate(&snapshot(), &range, date(1, 15));

        assert_eq!(report.summary.total_income, Money::from_units(2000));
        assert_eq!(report.summary.total_expenses, Money::from_units(1000));
        assert_eq!(report.summary.net_balance, Money::from_units(1000));
        assert_eq!(report.summary.transaction_count, 4);
        assert_eq!(report.first_date, Some(date(1, 1)));
        assert_eq!(report.last_date, Some(date(1, 20)));
        assert_eq!(report.savings_rate(), 50.0);

        let names: Vec<&str> = report.top_expenses.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Rent", "Food"]);
        assert_eq!(report.budgets.completed, 1);
        assert_eq!(report.goals.completed, 1);
    }

    #[test]
    fn test_empty_snapshot() {
        let report = SummaryReport::generate(&Snapshot::default(), &DateRange::all(), date(1, 1));
        assert_eq!(report.summary, FinancialSummary::default());
        assert_eq!(report.savings_rate(), 0.0);
        assert_eq!(report.budgets.total(), 0);
        assert!(report.first_date.is_none());
    }

    #[test]
    fn test_format_terminal() {
        let report = SummaryReport::generate(&snapshot(), &DateRange::all(), date(1, 15));
        let output = report.format_terminal("$");

        assert!(output.contains("Financial Summary: all dates"));
        assert!(output.contains("$2000.00"));
        assert!(output.contains("Top Expense Categories"));
        assert!(output.contains("Budgets"));
        assert!(output.contains("1 completed"));
    }
}
