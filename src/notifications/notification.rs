// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record, its process-unique id, and
//! the `Severity` and `Channel` enums used throughout the notification system.
//! Constructing a `Notification` is the factory seam: ids are minted here and
//! nowhere else.

use crate::error::Error;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new id, unique for the lifetime of the process.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level determines the visual treatment and the alert emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully.
    #[default]
    Success,
    /// Something needs attention but nothing is broken yet.
    Warning,
    /// An operation failed.
    Error,
}

impl Severity {
    /// Returns the lowercase wire name for this severity.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Returns the emoji used in alert banners.
    #[must_use]
    pub fn emoji(&self) -> &'static str {
        match self {
            Severity::Success => "✅",
            Severity::Warning => "⚠️",
            Severity::Error => "❌",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    /// Unknown names fail instead of defaulting.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Severity::Success),
            "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            other => Err(Error::InvalidSeverity(other.to_string())),
        }
    }
}

/// Delivery channel for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    /// Non-blocking corner card, may auto-expire.
    #[default]
    Toast,
    /// Centered dialog, dismissed explicitly.
    Modal,
    /// Blocking synchronous banner; leaves no state behind.
    Alert,
}

impl Channel {
    /// Returns the lowercase wire name for this channel.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Toast => "toast",
            Channel::Modal => "modal",
            Channel::Alert => "alert",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toast" => Ok(Channel::Toast),
            "modal" => Ok(Channel::Modal),
            "alert" => Ok(Channel::Alert),
            other => Err(Error::InvalidChannel(other.to_string())),
        }
    }
}

/// A notification to be presented to the user.
///
/// Immutable once delivered; a grouped toast is updated by replacing the
/// whole record (same id, same creation time) via [`Notification::updated`].
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Severity level.
    severity: Severity,
    /// Short heading shown to the user.
    title: String,
    /// Body text shown to the user.
    message: String,
    /// Lifetime before auto-removal. `None` or zero means the notification
    /// persists until explicitly removed.
    duration: Option<Duration>,
    /// Key of the group this notification represents, if any.
    group_key: Option<String>,
    /// When this notification was created.
    created_at: DateTime<Utc>,
}

impl Notification {
    /// Creates a new notification with a fresh unique id.
    ///
    /// Empty titles and messages are accepted as valid content.
    pub fn new(
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
        duration: Option<Duration>,
        group_key: Option<String>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            title: title.into(),
            message: message.into(),
            duration,
            group_key,
            created_at: Utc::now(),
        }
    }

    /// Creates a success notification with no expiry.
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Success, title, message, None, None)
    }

    /// Creates a warning notification with no expiry.
    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, title, message, None, None)
    }

    /// Creates an error notification with no expiry.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, title, message, None, None)
    }

    /// Rebuilds this notification with new content, keeping its identity.
    ///
    /// The id, group key, and creation time carry over unchanged; everything
    /// else is taken from the arguments. Used when a grouped toast absorbs a
    /// repeat occurrence.
    #[must_use]
    pub(crate) fn updated(
        &self,
        severity: Severity,
        title: String,
        message: String,
        duration: Option<Duration>,
    ) -> Self {
        Self {
            id: self.id,
            severity,
            title,
            message,
            duration,
            group_key: self.group_key.clone(),
            created_at: self.created_at,
        }
    }

    /// Returns the notification's unique id.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the configured lifetime, if any.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Returns the group key this notification represents, if any.
    #[must_use]
    pub fn group_key(&self) -> Option<&str> {
        self.group_key.as_deref()
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns whether this notification auto-expires.
    #[must_use]
    pub fn expires(&self) -> bool {
        matches!(self.duration, Some(d) if !d.is_zero())
    }

    /// Remaining-lifetime text for the presentation layer, e.g.
    /// `"Disappears in: 3s"`. `None` for notifications that never expire.
    #[must_use]
    pub fn lifetime_hint(&self) -> Option<String> {
        self.duration
            .filter(|d| !d.is_zero())
            .map(|d| format!("Disappears in: {}s", d.as_secs()))
    }
}
