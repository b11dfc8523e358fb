// SPDX-License-Identifier: MPL-2.0
//! Toast grouping bookkeeping.
//!
//! A `ToastGroup` tracks the single counted toast that represents a run of
//! repeated messages: its current notification, the occurrence count, and the
//! cancellation token of its expiry timer, if one was armed at creation.

use super::notification::{Notification, Severity};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Cancellation flag for a scheduled expiry.
///
/// Cancelling is idempotent; cancelling after the timer has already fired is
/// safe and has no effect.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    /// Creates a fresh, uncancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the token cancelled.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns whether the token has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// An active group of repeated toasts, represented by one counted entry.
#[derive(Debug, Clone)]
pub struct ToastGroup {
    notification: Notification,
    count: u32,
    timer: Option<CancellationToken>,
}

impl ToastGroup {
    /// Creates a group around its first notification, with count 1 and no
    /// timer armed.
    #[must_use]
    pub fn new(notification: Notification) -> Self {
        Self {
            notification,
            count: 1,
            timer: None,
        }
    }

    /// Returns the group's representative notification.
    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Returns how many occurrences this group has absorbed.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Attaches the cancellation token of the group's expiry timer.
    pub fn set_timer(&mut self, token: CancellationToken) {
        self.timer = Some(token);
    }

    /// Cancels the group's expiry timer, if one is armed. Idempotent.
    pub fn cancel_timer(&self) {
        if let Some(token) = &self.timer {
            token.cancel();
        }
    }

    /// Absorbs a repeat occurrence into the group.
    ///
    /// Increments the count and rebuilds the representative notification
    /// wholesale: same id and creation time, latest severity/message/duration,
    /// title rewritten as `"{title} ({count})"` from the latest title. The
    /// expiry timer armed at creation is left untouched. Returns the rebuilt
    /// notification so the caller can replace the toast list entry.
    pub fn absorb(
        &mut self,
        severity: Severity,
        title: &str,
        message: &str,
        duration: Option<Duration>,
    ) -> Notification {
        self.count += 1;
        let updated = self.notification.updated(
            severity,
            format!("{} ({})", title, self.count),
            message.to_string(),
            duration,
        );
        self.notification = updated.clone();
        updated
    }
}

/// Derives the default group key for a toast: `toast-{severity}-{slug}`,
/// where the slug is the lowercased title with each internal whitespace run
/// collapsed to a single hyphen. Two shows with the same severity and title
/// always land in the same group.
#[must_use]
pub fn derive_group_key(severity: Severity, title: &str) -> String {
    let slug = title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("toast-{}-{}", severity, slug)
}
