//! Reports module for fintrack
//!
//! Combines filtering, aggregation and status classification into the
//! category, monthly, budget, goal and dashboard summary reports.

pub mod budget_overview;
pub mod goals;
pub mod monthly;
pub mod spending;
pub mod summary;

pub use budget_overview::{BudgetOverviewReport, BudgetOverviewRow};
pub use goals::{GoalReport, GoalReportRow};
pub use monthly::{MonthlyReport, MonthlyRow};
pub use spending::{CategoryShare, SpendingReport};
pub use summary::{StatusCounts, SummaryReport};
