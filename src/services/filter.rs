//! Date-range filtering
//!
//! Filtering always produces a new collection; the source is left untouched.

use chrono::NaiveDate;

use crate::models::{Contribution, DateRange, Transaction};

/// Keep the items whose date falls inside `range`
///
/// With no bounds every item is kept, undated ones included. With any bound
/// present, items without a usable date are excluded.
pub fn filter_by_range<T, F>(items: &[T], range: &DateRange, date_of: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Option<NaiveDate>,
{
    if range.is_unbounded() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| range.contains(date_of(*item)))
        .cloned()
        .collect()
}

/// Filter transactions by their date
pub fn filter_transactions(transactions: &[Transaction], range: &DateRange) -> Vec<Transaction> {
    filter_by_range(transactions, range, |t| t.date)
}

/// Filter contributions by their date
pub fn filter_contributions(
    contributions: &[Contribution],
    range: &DateRange,
) -> Vec<Contribution> {
    filter_by_range(contributions, range, |c| c.date)
}
