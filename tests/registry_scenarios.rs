// SPDX-License-Identifier: MPL-2.0
//! End-to-end timing scenarios for the notification registry.
//!
//! All tests run under paused Tokio time, so second-scale durations resolve
//! instantly and deterministically.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use toastline::notifications::{
    AlertSink, Channel, DeliveryOptions, Registry, Severity,
};
use tokio::time::sleep;

/// Lets freshly spawned tasks run far enough to register their timers.
async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

#[derive(Default)]
struct RecordingAlert {
    banners: Mutex<Vec<String>>,
}

impl RecordingAlert {
    fn banners(&self) -> Vec<String> {
        self.banners.lock().expect("lock poisoned").clone()
    }
}

impl AlertSink for RecordingAlert {
    fn present(&self, text: &str) {
        self.banners
            .lock()
            .expect("lock poisoned")
            .push(text.to_string());
    }
}

#[tokio::test(start_paused = true)]
async fn toast_with_duration_expires_on_schedule() {
    let registry = Registry::new();
    registry
        .show(
            Severity::Success,
            "Hi",
            "there",
            Channel::Toast,
            DeliveryOptions::new().with_duration(Duration::from_secs(2)),
        )
        .await;

    assert_eq!(registry.toasts().len(), 1, "missing immediately after show");

    sleep(Duration::from_secs(1)).await;
    assert_eq!(registry.toasts().len(), 1, "removed before its duration");

    sleep(Duration::from_millis(1500)).await;
    assert_eq!(registry.toasts().len(), 0, "still present after expiry");
}

#[tokio::test(start_paused = true)]
async fn toast_without_duration_persists() {
    let registry = Registry::new();
    registry
        .show(
            Severity::Success,
            "Sticky",
            "m",
            Channel::Toast,
            DeliveryOptions::new(),
        )
        .await;
    registry
        .show(
            Severity::Success,
            "Zero",
            "m",
            Channel::Toast,
            DeliveryOptions::new().with_duration(Duration::ZERO),
        )
        .await;

    sleep(Duration::from_secs(5)).await;
    assert_eq!(registry.toasts().len(), 2);

    let id = registry.toasts()[0].id();
    registry.remove_toast(id);
    assert_eq!(registry.toasts().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn three_grouped_shows_spaced_apart_yield_one_counted_toast() {
    let registry = Registry::new();
    for i in 0..3 {
        registry
            .show(
                Severity::Success,
                "X",
                "Y",
                Channel::Toast,
                DeliveryOptions::new().grouped(),
            )
            .await;
        if i < 2 {
            sleep(Duration::from_millis(100)).await;
        }
    }

    let toasts = registry.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title(), "X (3)");
}

#[tokio::test(start_paused = true)]
async fn delayed_toast_is_absent_until_the_delay_elapses() {
    let registry = Registry::new();
    let delayed = registry.clone();
    let handle = tokio::spawn(async move {
        delayed
            .show(
                Severity::Warning,
                "Later",
                "m",
                Channel::Toast,
                DeliveryOptions::new().delayed(Duration::from_millis(1000)),
            )
            .await;
    });

    settle().await;
    assert!(registry.toasts().is_empty(), "visible before the delay");

    sleep(Duration::from_millis(999)).await;
    assert!(registry.toasts().is_empty(), "visible just before the delay");

    sleep(Duration::from_millis(2)).await;
    assert_eq!(registry.toasts().len(), 1);

    handle.await.expect("show task panicked");
}

#[tokio::test(start_paused = true)]
async fn delayed_alert_fires_only_after_the_delay() {
    let sink = Arc::new(RecordingAlert::default());
    let registry = Registry::with_alert_sink(sink.clone());

    let delayed = registry.clone();
    let handle = tokio::spawn(async move {
        delayed
            .show(
                Severity::Warning,
                "W",
                "M",
                Channel::Alert,
                DeliveryOptions::new().delayed(Duration::from_secs(2)),
            )
            .await;
    });

    settle().await;
    assert!(sink.banners().is_empty());

    sleep(Duration::from_millis(1900)).await;
    assert!(sink.banners().is_empty());

    sleep(Duration::from_millis(200)).await;
    let banners = sink.banners();
    assert_eq!(banners.len(), 1);
    assert!(banners[0].contains("WARNING"));
    assert!(banners[0].contains("W"));
    assert!(banners[0].contains("M"));

    handle.await.expect("show task panicked");
}

#[tokio::test(start_paused = true)]
async fn grouped_show_delay_postpones_completion_not_visibility() {
    let registry = Registry::new();
    let delayed = registry.clone();
    let handle = tokio::spawn(async move {
        delayed
            .show(
                Severity::Success,
                "G",
                "m",
                Channel::Toast,
                DeliveryOptions::new()
                    .grouped()
                    .delayed(Duration::from_millis(500)),
            )
            .await;
    });

    settle().await;
    assert_eq!(registry.toasts().len(), 1, "mutation hidden behind the delay");
    assert!(!handle.is_finished(), "call returned before the delay");

    sleep(Duration::from_millis(600)).await;
    assert!(handle.is_finished());
    handle.await.expect("show task panicked");
}

#[tokio::test(start_paused = true)]
async fn group_expiry_removes_the_counted_toast() {
    let registry = Registry::new();
    registry
        .show(
            Severity::Success,
            "Batch",
            "m",
            Channel::Toast,
            DeliveryOptions::new()
                .grouped()
                .with_duration(Duration::from_secs(2)),
        )
        .await;

    sleep(Duration::from_secs(1)).await;
    assert_eq!(registry.toasts().len(), 1);

    sleep(Duration::from_millis(1500)).await;
    assert!(registry.toasts().is_empty(), "group outlived its duration");
}

#[tokio::test(start_paused = true)]
async fn repeat_shows_do_not_extend_the_group_timer() {
    let registry = Registry::new();
    registry
        .show(
            Severity::Success,
            "Batch",
            "m",
            Channel::Toast,
            DeliveryOptions::new()
                .grouped()
                .with_duration(Duration::from_secs(2)),
        )
        .await;

    sleep(Duration::from_millis(1500)).await;
    // A repeat with a longer duration must not push expiry out.
    registry
        .show(
            Severity::Success,
            "Batch",
            "m",
            Channel::Toast,
            DeliveryOptions::new()
                .grouped()
                .with_duration(Duration::from_secs(10)),
        )
        .await;
    assert_eq!(registry.toasts()[0].title(), "Batch (2)");

    sleep(Duration::from_secs(1)).await;
    assert!(
        registry.toasts().is_empty(),
        "creation-time timer did not govern expiry"
    );
}

#[tokio::test(start_paused = true)]
async fn removing_a_group_cancels_its_timer() {
    let registry = Registry::new();
    registry
        .show(
            Severity::Success,
            "G",
            "m",
            Channel::Toast,
            DeliveryOptions::new()
                .grouped()
                .with_duration(Duration::from_secs(2)),
        )
        .await;

    sleep(Duration::from_secs(1)).await;
    let id = registry.toasts()[0].id();
    registry.remove_toast(id);
    assert!(registry.toasts().is_empty());

    // Re-create the group after the old timer's deadline has passed; the
    // cancelled timer must not remove the fresh group.
    sleep(Duration::from_secs(2)).await;
    registry
        .show(
            Severity::Success,
            "G",
            "m",
            Channel::Toast,
            DeliveryOptions::new().grouped(),
        )
        .await;
    sleep(Duration::from_secs(3)).await;

    let toasts = registry.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title(), "G", "count carried over from a dead group");
    assert_ne!(toasts[0].id(), id);
}

#[tokio::test(start_paused = true)]
async fn modals_persist_until_explicitly_closed() {
    let registry = Registry::new();
    registry
        .show(
            Severity::Error,
            "Fatal",
            "details",
            Channel::Modal,
            DeliveryOptions::new().with_duration(Duration::from_secs(1)),
        )
        .await;

    sleep(Duration::from_secs(5)).await;
    assert_eq!(registry.modals().len(), 1, "modal expired on its own");

    let id = registry.modals()[0].id();
    registry.remove_modal(id);
    assert!(registry.modals().is_empty());
}
