//! Progress status classification
//!
//! Status is derived on every read from current totals and the caller's
//! notion of "today"; it is never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::aggregate::{budget_spent, goal_saved};
use crate::models::{Budget, Money, SavingsGoal, Transaction};

/// Status of a budget or savings goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProgressStatus {
    /// Within schedule (also the state of a freshly created entry)
    #[default]
    #[serde(rename = "On Track")]
    OnTrack,
    /// Past the deadline with something still remaining
    Behind,
    /// Target reached or exceeded
    Completed,
}

impl ProgressStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::OnTrack => "On Track",
            Self::Behind => "Behind",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify progress of `current` toward `target`
///
/// A zero target is never completed: 0 of 0 stays on track.
pub fn classify(
    current: Money,
    target: Money,
    deadline: Option<NaiveDate>,
    today: NaiveDate,
) -> ProgressStatus {
    if target.is_positive() && current >= target {
        return ProgressStatus::Completed;
    }

    let remaining = target - current;
    match deadline {
        Some(deadline) if today > deadline && remaining.is_positive() => ProgressStatus::Behind,
        _ => ProgressStatus::OnTrack,
    }
}

/// Status of a budget; the end date acts as the deadline
pub fn budget_status(
    budget: &Budget,
    transactions: &[Transaction],
    today: NaiveDate,
) -> ProgressStatus {
    classify(
        budget_spent(budget, transactions),
        budget.allocated_amount,
        budget.end_date,
        today,
    )
}

/// Status of a savings goal
pub fn goal_status(goal: &SavingsGoal, today: NaiveDate) -> ProgressStatus {
    classify(goal_saved(goal), goal.target_amount, goal.deadline, today)
}
