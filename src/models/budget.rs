//! Budget model
//!
//! A spending allocation for a category over a date range. How much has been
//! spent is always derived from transactions and never stored here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;

/// A budget allocation for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Category this budget covers
    pub category: String,

    /// Amount allocated for the period
    pub allocated_amount: Money,

    /// First day of the budget period
    pub start_date: Option<NaiveDate>,

    /// Last day of the budget period; acts as the deadline for status
    pub end_date: Option<NaiveDate>,

    /// Notes
    #[serde(default)]
    pub description: String,
}

impl Budget {
    /// Create a new budget with no date range
    pub fn new(category: impl Into<String>, allocated_amount: Money) -> Self {
        Self {
            id: BudgetId::new(),
            category: category.into(),
            allocated_amount,
            start_date: None,
            end_date: None,
            description: String::new(),
        }
    }

    /// Create a budget covering `[start, end]`
    pub fn for_period(
        category: impl Into<String>,
        allocated_amount: Money,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        let mut budget = Self::new(category, allocated_amount);
        budget.start_date = Some(start);
        budget.end_date = Some(end);
        budget
    }

    /// Replace the generated ID
    pub fn with_id(mut self, id: impl Into<BudgetId>) -> Self {
        self.id = id.into();
        self
    }

    /// Check if a date falls inside the budget period (open-ended bounds match)
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date.map_or(true, |start| date >= start)
            && self.end_date.map_or(true, |end| date <= end)
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} allocated: {}", self.category, self.allocated_amount)?;
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            write!(f, " ({} to {})", start, end)?;
        }
        Ok(())
    }
}
