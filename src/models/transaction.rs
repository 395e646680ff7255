//! Transaction model
//!
//! A single income or expense record. Expenses may reference the budget they
//! count against; the budget never stores the resulting total.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetId, TransactionId};
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Parse a type name case-insensitively ("income", "Expense", ...)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" | "expenses" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Category name
    pub category: String,

    /// Amount (non-negative in well-formed data)
    pub amount: Money,

    /// Transaction date; `None` if the upstream date was missing or unparseable
    pub date: Option<NaiveDate>,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Budget this expense counts against
    #[serde(default)]
    pub budget_id: Option<BudgetId>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        kind: TransactionType,
        category: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            category: category.into(),
            amount,
            date: Some(date),
            description: String::new(),
            budget_id: None,
        }
    }

    /// Create an expense transaction
    pub fn expense(category: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self::new(TransactionType::Expense, category, amount, date)
    }

    /// Create an income transaction
    pub fn income(category: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self::new(TransactionType::Income, category, amount, date)
    }

    /// Attach this transaction to a budget
    pub fn with_budget(mut self, budget_id: BudgetId) -> Self {
        self.budget_id = Some(budget_id);
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Check if this is income
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// Check if this expense counts against the given budget
    pub fn counts_against(&self, budget_id: &BudgetId) -> bool {
        self.is_expense() && self.budget_id.as_ref() == Some(budget_id)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "----------".to_string());
        write!(f, "{} {} {} {}", date, self.kind, self.category, self.amount)
    }
}
