//! Inclusive date range used to narrow reports

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FintrackError, FintrackResult};

/// A date window; both bounds are inclusive and an absent bound is unbounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// A range with no bounds
    pub fn all() -> Self {
        Self::default()
    }

    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self::new(Some(from), Some(to))
    }

    pub fn since(from: NaiveDate) -> Self {
        Self::new(Some(from), None)
    }

    pub fn until(to: NaiveDate) -> Self {
        Self::new(None, Some(to))
    }

    /// Parse CLI bounds in `YYYY-MM-DD` form
    ///
    /// Unlike upstream record dates, user-supplied bounds must be valid.
    pub fn parse(from: Option<&str>, to: Option<&str>) -> FintrackResult<Self> {
        let parse_bound = |label: &str, value: &str| {
            NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
                FintrackError::Validation(format!(
                    "Invalid {} date format: {}. Use YYYY-MM-DD",
                    label, value
                ))
            })
        };

        let range = Self {
            from: from.map(|s| parse_bound("start", s)).transpose()?,
            to: to.map(|s| parse_bound("end", s)).transpose()?,
        };

        if let (Some(from), Some(to)) = (range.from, range.to) {
            if from > to {
                return Err(FintrackError::Validation(format!(
                    "Start date {} is after end date {}",
                    from, to
                )));
            }
        }

        Ok(range)
    }

    /// True when neither bound is set
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Check whether a record date falls inside the range
    ///
    /// Undated records only match an unbounded range.
    pub fn contains(&self, date: Option<NaiveDate>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        match date {
            Some(date) => {
                self.from.map_or(true, |from| date >= from)
                    && self.to.map_or(true, |to| date <= to)
            }
            None => false,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.from, self.to) {
            (None, None) => write!(f, "all dates"),
            (Some(from), None) => write!(f, "from {}", from),
            (None, Some(to)) => write!(f, "until {}", to),
            (Some(from), Some(to)) => write!(f, "{} to {}", from, to),
        }
    }
}
