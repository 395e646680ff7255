//! Monthly Income/Expense Report

use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::display::{format_money, render_table};
use crate::models::{DateRange, Money};
use crate::services::{filter_transactions, monthly_series, monthly_series_by_period};
use crate::storage::Snapshot;

/// Totals for one month bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyRow {
    /// "Jan", or "2025-01" when years are kept apart
    pub label: String,
    pub income: Money,
    pub expenses: Money,
    pub net: Money,
}

/// Month-by-month income and expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyReport {
    pub range: DateRange,
    pub by_year: bool,
    pub rows: Vec<MonthlyRow>,
    pub total_income: Money,
    pub total_expenses: Money,
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
    #[tabled(rename = "Net")]
    net: String,
}

impl MonthlyReport {
    /// Generate the monthly series for a date range
    ///
    /// Without `by_year`, the same calendar month of different years shares
    /// one row.
    pub fn generate(snapshot: &Snapshot, range: &DateRange, by_year: bool) -> Self {
        let transactions = filter_transactions(&snapshot.transactions, range);

        let rows: Vec<MonthlyRow> = if by_year {
            monthly_series_by_period(&transactions)
                .into_iter()
                .map(|p| MonthlyRow {
                    label: p.label(),
                    income: p.income,
                    expenses: p.expenses,
                    net: p.net(),
                })
                .collect()
        } else {
            monthly_series(&transactions)
                .into_iter()
                .map(|m| MonthlyRow {
                    net: m.net(),
                    label: m.month,
                    income: m.income,
                    expenses: m.expenses,
                })
                .collect()
        };

        let total_income = rows.iter().map(|r| r.income).sum();
        let total_expenses = rows.iter().map(|r| r.expenses).sum();
        debug!(%range, months = rows.len(), by_year, "Generated monthly report");

        Self {
            range: *range,
            by_year,
            rows,
            total_income,
            total_expenses,
        }
    }

    pub fn net(&self) -> Money {
        self.total_income - self.total_expenses
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Monthly Income & Expenses: {}\n", self.range));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No dated transactions in this range.\n");
            return output;
        }

        let mut rows: Vec<MonthRow> = self
            .rows
            .iter()
            .map(|r| MonthRow {
                month: r.label.clone(),
                income: format_money(r.income, symbol),
                expenses: format_money(r.expenses, symbol),
                net: format_money(r.net, symbol),
            })
            .collect();
        rows.push(MonthRow {
            month: "TOTAL".to_string(),
            income: format_money(self.total_income, symbol),
            expenses: format_money(self.total_expenses, symbol),
            net: format_money(self.net(), symbol),
        });

        output.push_str(&render_table(&rows));
        output.push('\n');
        output
    }
}
