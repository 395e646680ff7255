//! JSON Export functionality
//!
//! Serializes every derived aggregate for a date range, with schema
//! versioning. Amounts are written as integer cents.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::io::Write;
use tracing::info;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{DateRange, TransactionType};
use crate::reports::{BudgetOverviewReport, BudgetOverviewRow, GoalReport, GoalReportRow};
use crate::services::{
    date_span, filter_transactions, generate_notifications_with, group_by_category,
    monthly_series_by_period, summarize, CategoryTotal, FinancialSummary, Notification,
    NotificationThresholds, PeriodTotals,
};
use crate::storage::Snapshot;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Every derived insight for one snapshot and date range
#[derive(Debug, Clone, Serialize)]
pub struct InsightsExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Date range applied to transactions and contributions
    pub range: DateRange,

    /// Date used for status classification
    pub today: NaiveDate,

    pub summary: FinancialSummary,
    pub expense_categories: Vec<CategoryTotal>,
    pub income_categories: Vec<CategoryTotal>,
    pub monthly: Vec<PeriodTotals>,
    pub budgets: Vec<BudgetOverviewRow>,
    pub goals: Vec<GoalReportRow>,
    pub notifications: Vec<Notification>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    /// Transactions inside the range
    pub transaction_count: usize,
    pub budget_count: usize,
    pub goal_count: usize,
    /// Earliest transaction date inside the range
    pub earliest_transaction: Option<NaiveDate>,
    /// Latest transaction date inside the range
    pub latest_transaction: Option<NaiveDate>,
}

impl InsightsExport {
    /// Derive the export from a snapshot
    ///
    /// Budgets and notifications always consider every transaction; the
    /// range narrows the summary, category, monthly and goal figures.
    pub fn generate(
        snapshot: &Snapshot,
        range: &DateRange,
        today: NaiveDate,
        thresholds: &NotificationThresholds,
    ) -> Self {
        let transactions = filter_transactions(&snapshot.transactions, range);
        let span = date_span(&transactions);

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            budget_count: snapshot.budgets.len(),
            goal_count: snapshot.goals.len(),
            earliest_transaction: span.map(|(first, _)| first),
            latest_transaction: span.map(|(_, last)| last),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            range: *range,
            today,
            summary: summarize(&transactions),
            expense_categories: group_by_category(&transactions, TransactionType::Expense),
            income_categories: group_by_category(&transactions, TransactionType::Income),
            monthly: monthly_series_by_period(&transactions),
            budgets: BudgetOverviewReport::generate(snapshot, today).rows,
            goals: GoalReport::generate(snapshot, range, today).rows,
            notifications: generate_notifications_with(
                &snapshot.budgets,
                &snapshot.goals,
                &snapshot.transactions,
                thresholds,
            ),
            metadata,
        }
    }
}

/// Write an export as JSON
pub fn export_json<W: Write>(
    export: &InsightsExport,
    writer: &mut W,
    pretty: bool,
) -> FintrackResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, export)
    } else {
        serde_json::to_writer(&mut *writer, export)
    }
    .map_err(|e| FintrackError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| FintrackError::Export(e.to_string()))?;
    info!(format = "json", "Exported insights");
    Ok(())
}
