//! In-memory snapshot of the remote data
//!
//! The snapshot is loaded once and then only read. Derived figures (spent,
//! saved, status) are never stored on it.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::file_io::read_json_required;
use super::normalize::{
    normalize_budget, normalize_contribution, normalize_goal, normalize_transaction,
};
use super::raw::RawSnapshot;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Budget, BudgetId, Contribution, GoalId, SavingsGoal, Transaction};

/// Typed snapshot of transactions, budgets and savings goals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<SavingsGoal>,
}

impl Snapshot {
    pub fn new(
        transactions: Vec<Transaction>,
        budgets: Vec<Budget>,
        goals: Vec<SavingsGoal>,
    ) -> Self {
        Self {
            transactions,
            budgets,
            goals,
        }
    }

    /// Build a snapshot from raw upstream records
    ///
    /// Top-level contributions are appended to their goals after the nested
    /// ones, in input order. Contributions for unknown goals are dropped.
    pub fn from_raw(raw: RawSnapshot) -> Self {
        let transactions: Vec<Transaction> = raw
            .transactions
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(i, raw)| normalize_transaction(raw, i))
            .collect();

        let budgets: Vec<Budget> = raw
            .budgets
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, raw)| normalize_budget(raw, i))
            .collect();

        let mut goals: Vec<SavingsGoal> = raw
            .goals
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, raw)| normalize_goal(raw, i))
            .collect();

        let goal_index: HashMap<GoalId, usize> = goals
            .iter()
            .enumerate()
            .map(|(i, g)| (g.id.clone(), i))
            .collect();

        let top_level = raw.contributions.unwrap_or_default();
        for (i, raw_contribution) in top_level.into_iter().enumerate() {
            let contribution = normalize_contribution(raw_contribution, None, i);
            match goal_index.get(&contribution.goal_id) {
                Some(&i) => goals[i].contributions.push(contribution),
                None => warn!(
                    contribution = %contribution.id,
                    goal = %contribution.goal_id,
                    "Dropping contribution for unknown goal"
                ),
            }
        }

        Self {
            transactions,
            budgets,
            goals,
        }
    }

    /// Parse a snapshot from JSON text
    pub fn from_json_str(json: &str) -> FintrackResult<Self> {
        let raw: RawSnapshot = serde_json::from_str(json)
            .map_err(|e| FintrackError::Storage(format!("Failed to parse snapshot: {}", e)))?;
        Ok(Self::from_raw(raw))
    }

    /// Load a snapshot file
    pub fn load(path: impl AsRef<Path>) -> FintrackResult<Self> {
        let path = path.as_ref();
        let raw: RawSnapshot = read_json_required(path)?;
        let snapshot = Self::from_raw(raw);

        info!(
            path = %path.display(),
            transactions = snapshot.transactions.len(),
            budgets = snapshot.budgets.len(),
            goals = snapshot.goals.len(),
            "Loaded snapshot"
        );

        Ok(snapshot)
    }

    /// True when the snapshot holds no records at all
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.budgets.is_empty() && self.goals.is_empty()
    }

    /// All contributions across all goals, in goal order
    pub fn contributions(&self) -> impl Iterator<Item = &Contribution> {
        self.goals.iter().flat_map(|g| g.contributions.iter())
    }

    /// Look up a budget by ID
    pub fn find_budget(&self, id: &BudgetId) -> FintrackResult<&Budget> {
        self.budgets
            .iter()
            .find(|b| &b.id == id)
            .ok_or_else(|| FintrackError::budget_not_found(id.as_str()))
    }

    /// Look up a savings goal by ID
    pub fn find_goal(&self, id: &GoalId) -> FintrackResult<&SavingsGoal> {
        self.goals
            .iter()
            .find(|g| &g.id == id)
            .ok_or_else(|| FintrackError::goal_not_found(id.as_str()))
    }
}
