//! Core data models for fintrack
//!
//! Snapshot records (transactions, budgets, savings goals, contributions)
//! plus the value types used to aggregate over them.

pub mod budget;
pub mod goal;
pub mod ids;
pub mod money;
pub mod range;
pub mod transaction;

pub use budget::Budget;
pub use goal::{Contribution, SavingsGoal};
pub use ids::{BudgetId, ContributionId, GoalId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use range::DateRange;
pub use transaction::{Transaction, TransactionType};
