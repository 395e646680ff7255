//! Savings goal and contribution models
//!
//! A goal's saved amount is the sum of its contributions, recomputed on
//! every read.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ContributionId, GoalId};
use super::money::Money;

/// A single deposit recorded against a savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub id: ContributionId,
    pub goal_id: GoalId,
    pub amount: Money,
    /// `None` if the upstream date was missing or unparseable
    pub date: Option<NaiveDate>,
}

impl Contribution {
    pub fn new(goal_id: GoalId, amount: Money, date: NaiveDate) -> Self {
        Self {
            id: ContributionId::new(),
            goal_id,
            amount,
            date: Some(date),
        }
    }
}

/// A target amount to accumulate, optionally by a deadline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    /// Unique identifier
    pub id: GoalId,

    /// Display title
    pub title: String,

    /// Amount the user wants to reach
    pub target_amount: Money,

    /// Optional date by which the target should be reached
    pub deadline: Option<NaiveDate>,

    /// Notes
    #[serde(default)]
    pub description: String,

    /// Contributions in recorded order
    #[serde(default)]
    pub contributions: Vec<Contribution>,
}

impl SavingsGoal {
    /// Create a goal with no contributions and no deadline
    pub fn new(title: impl Into<String>, target_amount: Money) -> Self {
        Self {
            id: GoalId::new(),
            title: title.into(),
            target_amount,
            deadline: None,
            description: String::new(),
            contributions: Vec::new(),
        }
    }

    /// Replace the generated ID
    pub fn with_id(mut self, id: impl Into<GoalId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the deadline
    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Record a contribution against this goal
    pub fn contribute(&mut self, amount: Money, date: NaiveDate) -> &Contribution {
        self.contributions
            .push(Contribution::new(self.id.clone(), amount, date));
        &self.contributions[self.contributions.len() - 1]
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (target: {}", self.title, self.target_amount)?;
        if let Some(deadline) = self.deadline {
            write!(f, ", by {}", deadline)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    #[test]
    fn test_contribute_links_goal() {
        let mut goal = SavingsGoal::new("Vacation", Money::from_units(1000)).with_id(9u64);
        let contribution = goal.contribute(Money::from_units(100), date(2, 1)).clone();

        assert_eq!(contribution.goal_id, GoalId::from(9u64));
        assert_eq!(goal.contributions.len(), 1);
    }

    #[test]
    fn test_display() {
        let goal = SavingsGoal::new("Car", Money::from_units(200)).with_deadline(date(6, 30));
        assert_eq!(goal.to_string(), "Car (target: 200.00, by 2025-06-30)");

        let open = SavingsGoal::new("Car", Money::from_units(200));
        assert_eq!(open.to_string(), "Car (target: 200.00)");
    }

    #[test]
    fn test_missing_contributions_default_empty() {
        let json = r#"{"id": 1, "title": "Car", "target_amount": 20000, "deadline": null}"#;
        let goal: SavingsGoal = serde_json::from_str(json).unwrap();
        assert!(goal.contributions.is_empty());
        assert_eq!(goal.id.as_str(), "1");
    }
}
