//! Threshold notifications for budgets and savings goals
//!
//! Each budget and goal is checked on its own; at most one notification is
//! produced per entity. Budgets come first, then goals, each in input order.
//! IDs are derived from the entity ID and the condition, so regenerating
//! over unchanged data yields the same list.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::aggregate::{budget_spent, goal_saved};
use crate::models::{Budget, SavingsGoal, Transaction};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Get the icon/prefix for this severity
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A derived alert about a budget or goal
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(id: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            severity,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity.icon(), self.message)
    }
}

/// Percentage thresholds that trigger notifications
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationThresholds {
    /// Budget usage that triggers a warning
    pub budget_warning: f64,
    /// Budget usage that counts as exceeded
    pub budget_exceeded: f64,
    /// Goal progress that counts as reached
    pub goal_reached: f64,
    /// Goal progress reported as "almost there"
    pub goal_almost: f64,
    /// Goal progress reported as "halfway"
    pub goal_halfway: f64,
}

impl Default for NotificationThresholds {
    fn default() -> Self {
        Self {
            budget_warning: 80.0,
            budget_exceeded: 100.0,
            goal_reached: 100.0,
            goal_almost: 80.0,
            goal_halfway: 50.0,
        }
    }
}

/// Generate notifications using the default thresholds
pub fn generate_notifications(
    budgets: &[Budget],
    goals: &[SavingsGoal],
    transactions: &[Transaction],
) -> Vec<Notification> {
    generate_notifications_with(budgets, goals, transactions, &NotificationThresholds::default())
}

/// Generate notifications using custom thresholds
pub fn generate_notifications_with(
    budgets: &[Budget],
    goals: &[SavingsGoal],
    transactions: &[Transaction],
    thresholds: &NotificationThresholds,
) -> Vec<Notification> {
    let budget_alerts = budgets
        .iter()
        .filter_map(|b| budget_notification(b, transactions, thresholds));
    let goal_alerts = goals
        .iter()
        .filter_map(|g| goal_notification(g, thresholds));

    let notifications: Vec<Notification> = budget_alerts.chain(goal_alerts).collect();
    debug!(count = notifications.len(), "Generated notifications");
    notifications
}

fn budget_notification(
    budget: &Budget,
    transactions: &[Transaction],
    thresholds: &NotificationThresholds,
) -> Option<Notification> {
    let percent = budget_spent(budget, transactions).percent_of(budget.allocated_amount);

    if percent >= thresholds.budget_exceeded {
        Some(Notification::new(
            format!("budget-{}-over", budget.id),
            format!(
                "Budget for {} has been exceeded ({}% used)",
                budget.category,
                percent.floor()
            ),
            Severity::Error,
        ))
    } else if percent >= thresholds.budget_warning {
        Some(Notification::new(
            format!("budget-{}-warning", budget.id),
            format!(
                "Budget for {} is approaching its limit: {}% used",
                budget.category,
                percent.floor()
            ),
            Severity::Warning,
        ))
    } else {
        None
    }
}

fn goal_notification(
    goal: &SavingsGoal,
    thresholds: &NotificationThresholds,
) -> Option<Notification> {
    let progress = goal_saved(goal).percent_of(goal.target_amount);

    if progress >= thresholds.goal_reached {
        Some(Notification::new(
            format!("goal-{}-reached", goal.id),
            format!("Savings goal \"{}\" has been reached!", goal.title),
            Severity::Success,
        ))
    } else if progress >= thresholds.goal_almost {
        Some(Notification::new(
            format!("goal-{}-almost", goal.id),
            format!(
                "Savings goal \"{}\" is almost there: {}% saved",
                goal.title,
                progress.floor()
            ),
            Severity::Info,
        ))
    } else if progress >= thresholds.goal_halfway {
        Some(Notification::new(
            format!("goal-{}-halfway", goal.id),
            format!("Savings goal \"{}\" is halfway there", goal.title),
            Severity::Info,
        ))
    } else {
        None
    }
}
