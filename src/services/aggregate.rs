//! Aggregation of transactions and contributions
//!
//! Every function here is a pure reduction over the slices it is given.
//! Nothing is cached: spent and saved totals are recomputed on each call.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::filter::filter_contributions;
use crate::models::{
    Budget, BudgetId, DateRange, GoalId, Money, SavingsGoal, Transaction, TransactionType,
};

/// Total for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub name: String,
    pub value: Money,
}

/// Income and expense totals for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// Short month name ("Jan")
    pub month: String,
    pub income: Money,
    pub expenses: Money,
}

impl MonthlyTotals {
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}

/// Income and expense totals for one month of one year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    pub year: i32,
    pub month: u32,
    pub income: Money,
    pub expenses: Money,
}

impl PeriodTotals {
    /// Label in `YYYY-MM` form
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}

/// Spending against one budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetProgress {
    pub budget_id: BudgetId,
    pub category: String,
    pub allocated: Money,
    pub spent: Money,
    /// `allocated - spent`; negative when overspent
    pub remaining: Money,
    /// Rounded and unclamped; 0 when nothing is allocated
    pub percentage: i64,
}

/// Savings toward one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub goal_id: GoalId,
    pub title: String,
    pub target: Money,
    pub saved: Money,
    pub remaining: Money,
    /// Capped at 100; 0 when the target is zero
    pub percentage: f64,
}

/// Headline totals for a set of transactions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub net_balance: Money,
    pub transaction_count: usize,
}

/// Sum amounts per category for transactions of one type
///
/// Categories keep the order in which they are first seen.
pub fn group_by_category(
    transactions: &[Transaction],
    kind: TransactionType,
) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for txn in transactions.iter().filter(|t| t.kind == kind) {
        match index.get(txn.category.as_str()) {
            Some(&i) => totals[i].value += txn.amount,
            None => {
                index.insert(txn.category.as_str(), totals.len());
                totals.push(CategoryTotal {
                    name: txn.category.clone(),
                    value: txn.amount,
                });
            }
        }
    }

    totals
}

/// Bucket income and expenses by calendar month, January first
///
/// Months with no transactions are omitted. Years share buckets, so a
/// range spanning two Januaries yields a single "Jan" entry; use
/// [`monthly_series_by_period`] to keep years apart. Undated transactions
/// are skipped.
pub fn monthly_series(transactions: &[Transaction]) -> Vec<MonthlyTotals> {
    let mut buckets: [Option<MonthlyTotals>; 12] = Default::default();

    for txn in transactions {
        let Some(date) = txn.date else { continue };
        let bucket = buckets[date.month0() as usize].get_or_insert_with(|| MonthlyTotals {
            month: date.format("%b").to_string(),
            income: Money::zero(),
            expenses: Money::zero(),
        });
        match txn.kind {
            TransactionType::Income => bucket.income += txn.amount,
            TransactionType::Expense => bucket.expenses += txn.amount,
        }
    }

    buckets.into_iter().flatten().collect()
}

/// Bucket income and expenses by (year, month) in chronological order
pub fn monthly_series_by_period(transactions: &[Transaction]) -> Vec<PeriodTotals> {
    let mut buckets: BTreeMap<(i32, u32), (Money, Money)> = BTreeMap::new();

    for txn in transactions {
        let Some(date) = txn.date else { continue };
        let entry = buckets.entry((date.year(), date.month())).or_default();
        match txn.kind {
            TransactionType::Income => entry.0 += txn.amount,
            TransactionType::Expense => entry.1 += txn.amount,
        }
    }

    buckets
        .into_iter()
        .map(|((year, month), (income, expenses))| PeriodTotals {
            year,
            month,
            income,
            expenses,
        })
        .collect()
}

/// Total expenses recorded against a budget
pub fn budget_spent(budget: &Budget, transactions: &[Transaction]) -> Money {
    transactions
        .iter()
        .filter(|t| t.counts_against(&budget.id))
        .map(|t| t.amount)
        .sum()
}

/// Spending progress for a budget
pub fn budget_progress(budget: &Budget, transactions: &[Transaction]) -> BudgetProgress {
    let spent = budget_spent(budget, transactions);
    let allocated = budget.allocated_amount;
    let percentage = spent.percent_of(allocated).round() as i64;

    debug!(
        budget = %budget.id,
        spent = %spent,
        allocated = %allocated,
        percentage,
        "Budget progress"
    );

    BudgetProgress {
        budget_id: budget.id.clone(),
        category: budget.category.clone(),
        allocated,
        spent,
        remaining: allocated - spent,
        percentage,
    }
}

/// Total contributed toward a goal
pub fn goal_saved(goal: &SavingsGoal) -> Money {
    goal.contributions.iter().map(|c| c.amount).sum()
}

/// Savings progress for a goal over all of its contributions
pub fn goal_progress(goal: &SavingsGoal) -> GoalProgress {
    build_goal_progress(goal, goal_saved(goal))
}

/// Savings progress counting only contributions inside `range`
pub fn goal_progress_in_range(goal: &SavingsGoal, range: &DateRange) -> GoalProgress {
    let saved: Money = filter_contributions(&goal.contributions, range)
        .iter()
        .map(|c| c.amount)
        .sum();
    build_goal_progress(goal, saved)
}

fn build_goal_progress(goal: &SavingsGoal, saved: Money) -> GoalProgress {
    let target = goal.target_amount;
    GoalProgress {
        goal_id: goal.id.clone(),
        title: goal.title.clone(),
        target,
        saved,
        remaining: target - saved,
        percentage: saved.percent_of(target).min(100.0),
    }
}

/// Income, expense and net totals
pub fn summarize(transactions: &[Transaction]) -> FinancialSummary {
    let (total_income, total_expenses) =
        transactions
            .iter()
            .fold((Money::zero(), Money::zero()), |(income, expenses), t| match t.kind {
                TransactionType::Income => (income + t.amount, expenses),
                TransactionType::Expense => (income, expenses + t.amount),
            });

    FinancialSummary {
        total_income,
        total_expenses,
        net_balance: total_income - total_expenses,
        transaction_count: transactions.len(),
    }
}

/// Earliest and latest dated transaction, if any
pub fn date_span(transactions: &[Transaction]) -> Option<(NaiveDate, NaiveDate)> {
    let mut dates = transactions.iter().filter_map(|t| t.date);
    let first = dates.next()?;
    Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
}
