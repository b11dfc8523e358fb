// SPDX-License-Identifier: MPL-2.0
//! Delayed notification delivery.
//!
//! A thin layer over the Tokio timer: wait out a delay, then hand the
//! notification to a delivery callback exactly once. There is no cancellation
//! here; a caller that needs to cancel should not have asked for delayed
//! delivery.

use super::notification::Notification;
use std::time::Duration;
use tokio::time;

/// Invokes `deliver(notification)` once, `delay` after this future is polled.
///
/// A zero delay still goes through the timer, so delivery is never
/// reentrant-synchronous with the caller.
pub async fn deliver_with_delay<F>(notification: Notification, delay: Duration, deliver: F)
where
    F: FnOnce(Notification),
{
    time::sleep(delay).await;
    deliver(notification);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn delivers_exactly_once_after_the_delay() {
        let calls = Arc::new(AtomicU32::new(0));
        let calls_in_task = Arc::clone(&calls);

        let handle = tokio::spawn(deliver_with_delay(
            Notification::success("t", "m"),
            Duration::from_millis(500),
            move |_| {
                calls_in_task.fetch_add(1, Ordering::SeqCst);
            },
        ));

        time::sleep(Duration::from_millis(400)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0, "fired before the delay");

        handle.await.expect("delivery task panicked");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_delay_is_not_reentrant() {
        let calls = Arc::new(AtomicU32::new(0));
        let calls_in_task = Arc::clone(&calls);

        let future = deliver_with_delay(
            Notification::success("t", "m"),
            Duration::ZERO,
            move |_| {
                calls_in_task.fetch_add(1, Ordering::SeqCst);
            },
        );

        // Constructing the future must not run the callback.
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        future.await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn callback_receives_the_notification_unchanged() {
        let notification = Notification::warning("Disk", "almost full");
        let id = notification.id();

        deliver_with_delay(notification, Duration::from_millis(10), move |n| {
            assert_eq!(n.id(), id);
            assert_eq!(n.title(), "Disk");
            assert_eq!(n.message(), "almost full");
        })
        .await;
    }
}
