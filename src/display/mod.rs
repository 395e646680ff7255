//! Display formatting for terminal output
//!
//! Provides table rendering, report helpers and notification formatting.
//! Every amount formatter takes the currency symbol explicitly.

pub mod notification;
pub mod report;
pub mod table;

pub use notification::format_notification_list;
pub use report::{format_bar, format_money, format_percentage, separator, truncate};
pub use table::render_table;
