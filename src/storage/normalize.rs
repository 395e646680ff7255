//! Normalization of raw upstream records into typed models
//!
//! This is the only place that knows about upstream field aliases and loose
//! typing. Coercion never fails: bad amounts become zero, bad dates become
//! `None`, and a transaction with an unknown type is dropped. Records without
//! an upstream ID get one derived from their position in the input, so the
//! same snapshot always normalizes to the same IDs.

use chrono::{DateTime, NaiveDate};
use serde_json::Value;
use tracing::{debug, warn};

use super::raw::{RawBudget, RawContribution, RawGoal, RawTransaction};
use crate::models::{
    Budget, BudgetId, Contribution, ContributionId, GoalId, Money, SavingsGoal, Transaction,
    TransactionId, TransactionType,
};

/// Category used when a record carries none
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Coerce an amount field to money
///
/// Accepts JSON numbers and numeric strings; everything else is zero, as is
/// any amount too large to hold in cents.
pub fn coerce_amount(value: Option<&Value>) -> Money {
    let amount = match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|units| units.checked_mul(100))
            .map(Money::from_cents)
            .or_else(|| n.as_f64().and_then(Money::try_from_decimal)),
        Some(Value::String(s)) => Money::parse(s)
            .ok()
            .or_else(|| s.trim().parse::<f64>().ok().and_then(Money::try_from_decimal)),
        _ => return Money::zero(),
    };

    amount.unwrap_or_else(|| {
        warn!(value = ?value, "Amount is not a usable number, using 0");
        Money::zero()
    })
}

/// Coerce a date field to a calendar date
///
/// Accepts `YYYY-MM-DD` and timestamps that start with one
/// (`2025-01-05T10:00:00Z`, `2025-01-05 10:00:00`).
pub fn coerce_date(value: Option<&Value>) -> Option<NaiveDate> {
    let s = match value {
        Some(Value::String(s)) => s.trim(),
        _ => return None,
    };

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
        return Some(datetime.date_naive());
    }

    let (day, rest) = (s.get(..10)?, s.get(10..)?);
    if rest.starts_with('T') || rest.starts_with(' ') {
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    } else {
        None
    }
}

/// Coerce a text field; numbers are rendered, anything else is `None`
pub fn coerce_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Coerce a category that may be a plain name or an object with a `name`
pub fn coerce_category(value: Option<&Value>) -> String {
    let name = match value {
        Some(Value::Object(map)) => coerce_text(map.get("name")),
        other => coerce_text(other),
    };
    name.filter(|n| !n.is_empty())
        .unwrap_or_else(|| UNCATEGORIZED.to_string())
}

fn coerce_id(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::Number(n)) => Some(
            n.as_i64()
                .map(|i| i.to_string())
                .unwrap_or_else(|| n.to_string()),
        ),
        other => coerce_text(other).filter(|s| !s.is_empty()),
    }
}

/// Normalize one upstream transaction found at `position` in its list
///
/// Returns `None` for records whose type is neither income nor expense.
pub fn normalize_transaction(raw: RawTransaction, position: usize) -> Option<Transaction> {
    let id = coerce_id(raw.id.as_ref())
        .map(TransactionId::from_raw)
        .unwrap_or_else(|| TransactionId::from_position(position));

    let kind = match coerce_text(raw.kind.as_ref())
        .as_deref()
        .and_then(TransactionType::parse)
    {
        Some(kind) => kind,
        None => {
            warn!(transaction = %id, kind = ?raw.kind, "Dropping transaction with unknown type");
            return None;
        }
    };

    let date_field = raw.date.as_ref().or(raw.transaction_date.as_ref());
    let date = coerce_date(date_field);
    if date.is_none() {
        debug!(transaction = %id, "Transaction has no usable date");
    }

    Some(Transaction {
        id,
        kind,
        category: coerce_category(raw.category.as_ref()),
        amount: coerce_amount(raw.amount.as_ref()),
        date,
        description: coerce_text(raw.description.as_ref()).unwrap_or_default(),
        budget_id: coerce_id(raw.budget_id.as_ref()).map(BudgetId::from_raw),
    })
}

/// Normalize one upstream budget found at `position` in its list
pub fn normalize_budget(raw: RawBudget, position: usize) -> Budget {
    let allocated = raw.allocated_amount.as_ref().or(raw.amount.as_ref());

    Budget {
        id: coerce_id(raw.id.as_ref())
            .map(BudgetId::from_raw)
            .unwrap_or_else(|| BudgetId::from_position(position)),
        category: coerce_category(raw.category.as_ref()),
        allocated_amount: coerce_amount(allocated),
        start_date: coerce_date(raw.start_date.as_ref()),
        end_date: coerce_date(raw.end_date.as_ref()),
        description: coerce_text(raw.description.as_ref()).unwrap_or_default(),
    }
}

/// Normalize one upstream contribution
///
/// A contribution nested inside a goal inherits that goal's ID when it
/// carries none of its own. `position` is its index in the list it came from.
pub fn normalize_contribution(
    raw: RawContribution,
    parent: Option<&GoalId>,
    position: usize,
) -> Contribution {
    let goal_id = coerce_id(raw.goal_id.as_ref())
        .map(GoalId::from_raw)
        .or_else(|| parent.cloned())
        .unwrap_or_default();

    Contribution {
        id: coerce_id(raw.id.as_ref())
            .map(ContributionId::from_raw)
            .unwrap_or_else(|| match parent {
                Some(goal) => ContributionId::from_raw(format!("{}-idx-{}", goal, position)),
                None => ContributionId::from_position(position),
            }),
        goal_id,
        amount: coerce_amount(raw.amount.as_ref()),
        date: coerce_date(raw.date.as_ref().or(raw.contribution_date.as_ref())),
    }
}

/// Normalize one upstream savings goal, found at `position` in its list,
/// together with its nested contributions
pub fn normalize_goal(raw: RawGoal, position: usize) -> SavingsGoal {
    let id = coerce_id(raw.id.as_ref())
        .map(GoalId::from_raw)
        .unwrap_or_else(|| GoalId::from_position(position));

    let contributions = raw
        .contributions
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, c)| normalize_contribution(c, Some(&id), i))
        .collect();

    SavingsGoal {
        title: coerce_text(raw.title.as_ref().or(raw.name.as_ref())).unwrap_or_default(),
        target_amount: coerce_amount(raw.target_amount.as_ref().or(raw.target.as_ref())),
        deadline: coerce_date(raw.deadline.as_ref()),
        description: coerce_text(raw.description.as_ref()).unwrap_or_default(),
        contributions,
        id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalized(value: Value) -> Option<Transaction> {
        let raw: RawTransaction = serde_json::from_value(value).unwrap();
        normalize_transaction(raw, 0)
    }

    #[test]
    fn test_coerce_amount() {
        assert_eq!(coerce_amount(Some(&json!(50))).cents(), 5000);
        assert_eq!(coerce_amount(Some(&json!(12.5))).cents(), 1250);
        assert_eq!(coerce_amount(Some(&json!("30.25"))).cents(), 3025);
        assert_eq!(coerce_amount(Some(&json!("$1,200.00"))).cents(), 120000);
        assert_eq!(coerce_amount(Some(&json!("1e2"))).cents(), 10000);
        assert_eq!(coerce_amount(Some(&json!("abc"))), Money::zero());
        assert_eq!(coerce_amount(Some(&json!(true))), Money::zero());
        assert_eq!(coerce_amount(Some(&json!(null))), Money::zero());
        assert_eq!(coerce_amount(None), Money::zero());
    }

    #[test]
    fn test_coerce_amount_out_of_range_is_zero() {
        assert_eq!(coerce_amount(Some(&json!("99999999999999999"))), Money::zero());
        assert_eq!(coerce_amount(Some(&json!(99999999999999999u64))), Money::zero());
        assert_eq!(coerce_amount(Some(&json!(1e17))), Money::zero());
        assert_eq!(coerce_amount(Some(&json!("1e300"))), Money::zero());
        assert_eq!(
            coerce_amount(Some(&json!(50_000_000_000_000_000i64))),
            Money::from_units(50_000_000_000_000_000)
        );
    }

    #[test]
    fn test_coerce_date() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 5);
        assert_eq!(coerce_date(Some(&json!("2025-01-05"))), expected);
        assert_eq!(coerce_date(Some(&json!("2025-01-05T10:30:00Z"))), expected);
        assert_eq!(
            coerce_date(Some(&json!("2025-01-05T10:30:00.000000Z"))),
            expected
        );
        assert_eq!(coerce_date(Some(&json!("2025-01-05 10:30:00"))), expected);
        assert_eq!(coerce_date(Some(&json!("2025-13-05"))), None);
        assert_eq!(coerce_date(Some(&json!("yesterday"))), None);
        assert_eq!(coerce_date(Some(&json!("2025-01-05junk"))), None);
        assert_eq!(coerce_date(Some(&json!(20250105))), None);
        assert_eq!(coerce_date(None), None);
    }

    #[test]
    fn test_coerce_category() {
        assert_eq!(coerce_category(Some(&json!("Food"))), "Food");
        assert_eq!(coerce_category(Some(&json!({"id": 2, "name": "Rent"}))), "Rent");
        assert_eq!(coerce_category(Some(&json!(""))), UNCATEGORIZED);
        assert_eq!(coerce_category(None), UNCATEGORIZED);
    }

    #[test]
    fn test_transaction_date_alias() {
        let txn = normalized(json!({
            "id": 1,
            "type": "expense",
            "category": "Food",
            "amount": "50.00",
            "transaction_date": "2025-01-05",
            "budget_id": 3
        }))
        .unwrap();

        assert_eq!(txn.id.as_str(), "1");
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2025, 1, 5));
        assert_eq!(txn.amount.cents(), 5000);
        assert_eq!(txn.budget_id, Some(BudgetId::from(3u64)));
    }

    #[test]
    fn test_date_field_wins_over_alias() {
        let txn = normalized(json!({
            "type": "income",
            "date": "2025-02-01",
            "transaction_date": "2025-03-01"
        }))
        .unwrap();
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2025, 2, 1));
    }

    #[test]
    fn test_unknown_type_dropped() {
        assert!(normalized(json!({"type": "transfer"})).is_none());
        assert!(normalized(json!({})).is_none());
    }

    #[test]
    fn test_garbage_fields_are_soft() {
        let txn = normalized(json!({
            "type": "Expense",
            "amount": "n/a",
            "date": "not a date",
            "category": null
        }))
        .unwrap();

        assert_eq!(txn.amount, Money::zero());
        assert_eq!(txn.date, None);
        assert_eq!(txn.category, UNCATEGORIZED);
        assert_eq!(txn.budget_id, None);
    }

    #[test]
    fn test_budget_amount_alias() {
        let raw: RawBudget = serde_json::from_value(json!({
            "id": "b1",
            "category": "Food",
            "amount": 300,
            "start_date": "2025-01-01",
            "end_date": "2025-01-31"
        }))
        .unwrap();
        let budget = normalize_budget(raw, 0);

        assert_eq!(budget.id.as_str(), "b1");
        assert_eq!(budget.allocated_amount.cents(), 30000);
        assert_eq!(budget.end_date, NaiveDate::from_ymd_opt(2025, 1, 31));
    }

    #[test]
    fn test_goal_with_nested_contributions() {
        let raw: RawGoal = serde_json::from_value(json!({
            "id": 7,
            "name": "Car",
            "target": "200",
            "deadline": "2025-06-30",
            "contributions": [
                {"id": 1, "amount": 100, "date": "2025-02-01"},
                {"id": 2, "goal_id": 7, "amount": "60", "contribution_date": "2025-03-01"}
            ]
        }))
        .unwrap();
        let goal = normalize_goal(raw, 0);

        assert_eq!(goal.title, "Car");
        assert_eq!(goal.target_amount.cents(), 20000);
        assert_eq!(goal.contributions.len(), 2);
        assert!(goal.contributions.iter().all(|c| c.goal_id == goal.id));
        assert_eq!(goal.contributions[1].date, NaiveDate::from_ymd_opt(2025, 3, 1));
    }

    #[test]
    fn test_missing_ids_follow_position() {
        let raw_budget = || -> RawBudget {
            serde_json::from_value(json!({"category": "Food", "allocated_amount": 100})).unwrap()
        };
        let first = normalize_budget(raw_budget(), 2);
        let second = normalize_budget(raw_budget(), 2);
        assert_eq!(first.id, second.id);
        assert_eq!(first.id.as_str(), "idx-2");

        let raw: RawGoal = serde_json::from_value(json!({
            "title": "Trip",
            "target_amount": 500,
            "contributions": [{"amount": 10}, {"amount": 20}]
        }))
        .unwrap();
        let goal = normalize_goal(raw, 0);
        assert_eq!(goal.id.as_str(), "idx-0");
        assert_eq!(goal.contributions[1].id.as_str(), "idx-0-idx-1");
    }
}
