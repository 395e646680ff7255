//! Raw upstream record shapes
//!
//! Upstream data is JSON from a web API whose field types are not under our
//! control: amounts arrive as numbers or strings, IDs as integers or strings,
//! dates under more than one field name. Every loosely typed field is kept as
//! a `serde_json::Value` here and converted in `normalize`.

use serde::Deserialize;
use serde_json::Value;

/// A full snapshot as fetched from the remote service
///
/// Absent or `null` collections are treated as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawSnapshot {
    pub transactions: Option<Vec<RawTransaction>>,
    pub budgets: Option<Vec<RawBudget>>,
    pub goals: Option<Vec<RawGoal>>,
    /// Contributions delivered separately from their goals
    pub contributions: Option<Vec<RawContribution>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawTransaction {
    pub id: Option<Value>,
    #[serde(rename = "type")]
    pub kind: Option<Value>,
    pub category: Option<Value>,
    pub amount: Option<Value>,
    pub date: Option<Value>,
    pub transaction_date: Option<Value>,
    pub description: Option<Value>,
    pub budget_id: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawBudget {
    pub id: Option<Value>,
    pub category: Option<Value>,
    pub allocated_amount: Option<Value>,
    pub amount: Option<Value>,
    pub start_date: Option<Value>,
    pub end_date: Option<Value>,
    pub description: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawGoal {
    pub id: Option<Value>,
    pub title: Option<Value>,
    pub name: Option<Value>,
    pub target_amount: Option<Value>,
    pub target: Option<Value>,
    pub deadline: Option<Value>,
    pub description: Option<Value>,
    pub contributions: Option<Vec<RawContribution>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawContribution {
    pub id: Option<Value>,
    pub goal_id: Option<Value>,
    pub amount: Option<Value>,
    pub date: Option<Value>,
    pub contribution_date: Option<Value>,
}
