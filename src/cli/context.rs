//! Shared state and arguments for CLI handlers

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::error::FintrackResult;
use crate::models::DateRange;
use crate::storage::Snapshot;

/// Everything a command handler needs
#[derive(Debug, Clone)]
pub struct CliContext {
    pub snapshot: Snapshot,
    pub settings: Settings,
    /// Currency symbol after applying any `--currency` override
    pub currency: String,
    /// Reference date for status classification
    pub today: NaiveDate,
}

impl CliContext {
    pub fn new(snapshot: Snapshot, settings: Settings, today: NaiveDate) -> Self {
        let currency = settings.currency_symbol.clone();
        Self {
            snapshot,
            settings,
            currency,
            today,
        }
    }

    /// Override the settings' currency symbol
    pub fn with_currency(mut self, currency: Option<String>) -> Self {
        if let Some(currency) = currency {
            self.currency = currency;
        }
        self
    }
}

/// Inclusive date range options
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// Start date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// End date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

impl RangeArgs {
    /// Parse into a date range; no bounds means every record
    pub fn to_range(&self) -> FintrackResult<DateRange> {
        DateRange::parse(self.from.as_deref(), self.to.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_override() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let ctx = CliContext::new(Snapshot::default(), Settings::default(), today);
        assert_eq!(ctx.currency, "$");

        let ctx = ctx.with_currency(Some("€".to_string()));
        assert_eq!(ctx.currency, "€");

        let ctx = ctx.with_currency(None);
        assert_eq!(ctx.currency, "€");
    }

    #[test]
    fn test_range_args() {
        let args = RangeArgs {
            from: Some("2025-01-01".into()),
            to: None,
        };
        let range = args.to_range().unwrap();
        assert_eq!(range.from, NaiveDate::from_ymd_opt(2025, 1, 1));
        assert!(range.to.is_none());

        assert!(RangeArgs::default().to_range().unwrap().is_unbounded());

        let bad = RangeArgs {
            from: Some("01/02/2025".into()),
            to: None,
        };
        assert!(bad.to_range().unwrap_err().is_validation());
    }
}
