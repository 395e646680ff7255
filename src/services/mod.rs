//! Insight services for fintrack
//!
//! Pure functions over already-loaded snapshot data: date filtering,
//! aggregation, status classification and notification generation.
//! Nothing here performs I/O or reads the clock; "today" is always passed in.

pub mod aggregate;
pub mod filter;
pub mod notifications;
pub mod status;

pub use aggregate::{
    budget_progress, budget_spent, date_span, goal_progress, goal_progress_in_range, goal_saved,
    group_by_category, monthly_series, monthly_series_by_period, summarize, BudgetProgress,
    CategoryTotal, FinancialSummary, GoalProgress, MonthlyTotals, PeriodTotals,
};
pub use filter::{filter_by_range, filter_contributions, filter_transactions};
pub use notifications::{
    generate_notifications, generate_notifications_with, Notification, NotificationThresholds,
    Severity,
};
pub use status::{budget_status, classify, goal_status, ProgressStatus};
