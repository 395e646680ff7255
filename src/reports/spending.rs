//! Spending Report
//!
//! Totals per category for one transaction type over a date range.

use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::display::{format_bar, format_money, format_percentage, render_table, truncate};
use crate::models::{DateRange, Money, TransactionType};
use crate::services::{filter_transactions, group_by_category};
use crate::storage::Snapshot;

/// One category's share of the total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub name: String,
    pub total: Money,
    pub transaction_count: usize,
    /// Share of the report total, 0 when the total is zero
    pub percentage: f64,
}

/// Category breakdown report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingReport {
    pub range: DateRange,
    pub kind: TransactionType,
    /// Largest category first; ties keep first-seen order
    pub categories: Vec<CategoryShare>,
    pub total: Money,
    pub transaction_count: usize,
}

#[derive(Tabled)]
struct ShareRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

impl SpendingReport {
    /// Generate a category report for a date range
    pub fn generate(snapshot: &Snapshot, range: &DateRange, kind: TransactionType) -> Self {
        let transactions = filter_transactions(&snapshot.transactions, range);
        let totals = group_by_category(&transactions, kind);
        let total: Money = totals.iter().map(|t| t.value).sum();

        let mut categories: Vec<CategoryShare> = totals
            .into_iter()
            .map(|t| CategoryShare {
                transaction_count: transactions
                    .iter()
                    .filter(|txn| txn.kind == kind && txn.category == t.name)
                    .count(),
                percentage: t.value.percent_of(total),
                total: t.value,
                name: t.name,
            })
            .collect();
        categories.sort_by(|a, b| b.total.cmp(&a.total));

        let transaction_count = categories.iter().map(|c| c.transaction_count).sum();
        debug!(%range, %kind, categories = categories.len(), "Generated spending report");

        Self {
            range: *range,
            kind,
            categories,
            total,
            transaction_count,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} by Category: {}\n", self.kind, self.range));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total: {} across {} transactions\n\n",
            format_money(self.total, symbol),
            self.transaction_count
        ));

        if self.categories.is_empty() {
            output.push_str("No transactions in this range.\n");
            return output;
        }

        let rows: Vec<ShareRow> = self
            .categories
            .iter()
            .map(|c| ShareRow {
                category: truncate(&c.name, 30),
                amount: format_money(c.total, symbol),
                count: c.transaction_count,
                share: format_percentage(c.percentage),
                bar: format_bar(c.percentage, 100.0, 20),
            })
            .collect();

        output.push_str(&render_table(&rows));
        output.push('\n');
        output
    }
}
