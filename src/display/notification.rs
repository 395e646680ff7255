//! Notification display formatting

use crate::services::{Notification, Severity};

/// Format notifications one per line, with a severity prefix
pub fn format_notification_list(notifications: &[Notification], colored: bool) -> String {
    if notifications.is_empty() {
        return "No notifications.".to_string();
    }

    let mut output = String::new();
    for notification in notifications {
        let prefix = format!("[{}]", notification.severity.title());
        if colored {
            output.push_str(&format!(
                "{}{:<9}\x1b[0m {}\n",
                color_code(notification.severity),
                prefix,
                notification.message
            ));
        } else {
            output.push_str(&format!("{:<9} {}\n", prefix, notification.message));
        }
    }
    output
}

fn color_code(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "\x1b[36m",
        Severity::Success => "\x1b[32m",
        Severity::Warning => "\x1b[33m",
        Severity::Error => "\x1b[31m",
    }
}
