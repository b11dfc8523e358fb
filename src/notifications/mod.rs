// SPDX-License-Identifier: MPL-2.0
//! In-app notification delivery, grouping, and timing.
//!
//! Notifications travel through one of three channels: toasts (non-blocking
//! cards that may auto-expire), modals (dismissed explicitly), and alerts
//! (blocking banners with no persisted state). Repeated toasts can be merged
//! into a single counted entry per group key.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` record, ids, severity and channel enums
//! - [`registry`] - `Registry` with the show/remove operations and observable state
//! - [`group`] - Toast group bookkeeping and group-key derivation
//! - [`delivery`] - Delayed delivery on the Tokio timer
//! - [`signal`] - Observable state containers (snapshot + change notification)
//! - [`alert`] - Alert sink port and banner rendering
//!
//! # Usage
//!
//! ```no_run
//! use toastline::notifications::{Channel, DeliveryOptions, Registry, Severity};
//! use std::time::Duration;
//!
//! # async fn demo() {
//! let registry = Registry::new();
//!
//! // A toast that disappears after two seconds.
//! registry
//!     .show(
//!         Severity::Success,
//!         "Saved",
//!         "Your changes are on disk",
//!         Channel::Toast,
//!         DeliveryOptions::new().with_duration(Duration::from_secs(2)),
//!     )
//!     .await;
//!
//! // Repeats of the same message collapse into "Sync failed (N)".
//! registry
//!     .show(
//!         Severity::Error,
//!         "Sync failed",
//!         "retrying",
//!         Channel::Toast,
//!         DeliveryOptions::new().grouped(),
//!     )
//!     .await;
//! # }
//! ```

pub mod alert;
pub mod delivery;
pub mod group;
pub mod notification;
pub mod registry;
pub mod signal;

pub use alert::{AlertSink, ConsoleAlert};
pub use group::{CancellationToken, ToastGroup};
pub use notification::{Channel, Notification, NotificationId, Severity};
pub use registry::{DeliveryOptions, Registry};
pub use signal::Signal;
