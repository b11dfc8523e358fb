// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

/// Default severity for notifications triggered without one.
pub const DEFAULT_SEVERITY: &str = "success";

/// Default delivery channel.
pub const DEFAULT_CHANNEL: &str = "toast";

/// Default toast lifetime (in seconds) when expiry is requested without a
/// duration.
pub const DEFAULT_TOAST_DURATION_SECS: u64 = 3;

/// How long the demo binary keeps observing registry state before exiting
/// (in seconds).
pub const DEFAULT_WATCH_SECS: u64 = 6;

const _: () = {
    assert!(DEFAULT_TOAST_DURATION_SECS > 0);
    // The demo must outlive a default-duration toast to print its removal.
    assert!(DEFAULT_WATCH_SECS > DEFAULT_TOAST_DURATION_SECS);
};
