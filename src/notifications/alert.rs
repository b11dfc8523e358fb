// SPDX-License-Identifier: MPL-2.0
//! Alert channel port.
//!
//! The alert channel presents a blocking banner and keeps no state in the
//! registry. The [`AlertSink`] trait is the seam the composition root fills
//! in; the library ships a console implementation for terminal use.

use super::notification::Notification;

/// Receives rendered alert banners.
pub trait AlertSink: Send + Sync {
    /// Presents one alert banner to the user.
    fn present(&self, text: &str);
}

/// Renders the alert banner for a notification:
/// `"{emoji} {TYPE}\n\n{title}\n\n{message}"`.
#[must_use]
pub fn banner(notification: &Notification) -> String {
    format!(
        "{} {}\n\n{}\n\n{}",
        notification.severity().emoji(),
        notification.severity().as_str().to_uppercase(),
        notification.title(),
        notification.message()
    )
}

/// Writes alert banners to stdout.
#[derive(Debug, Default)]
pub struct ConsoleAlert;

impl AlertSink for ConsoleAlert {
    fn present(&self, text: &str) {
        println!("{text}");
    }
}
