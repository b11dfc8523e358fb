// SPDX-License-Identifier: MPL-2.0
//! Notification registry: show/remove operations across delivery channels.
//!
//! The registry owns three pieces of state (the toast list, the modal list,
//! and the map of active toast groups) and is the seam a presentation layer
//! consumes. Lists are published as immutable snapshots through [`Signal`]s;
//! the group map is internal bookkeeping.
//!
//! All mutations happen under one mutex, with the matching snapshot published
//! before the lock is released, so no two operations interleave their
//! internal steps and observers always see a consistent list. The only
//! suspension points are the optional pre-show and pre-return delays.

use super::alert::{self, AlertSink, ConsoleAlert};
use super::delivery;
use super::group::{derive_group_key, CancellationToken, ToastGroup};
use super::notification::{Channel, Notification, NotificationId, Severity};
use super::signal::Signal;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tracing::debug;

/// Per-call delivery configuration for [`Registry::show`].
///
/// Negative delays and durations are unrepresentable; boundary code that
/// parses signed user input must reject them before building options.
#[derive(Debug, Clone, Default)]
pub struct DeliveryOptions {
    /// Delay before the notification is shown (standard path) or before the
    /// call returns (grouped path).
    pub delayed: Option<Duration>,
    /// Merge repeats into a counted entry. Toast channel only; modal and
    /// alert ignore it.
    pub grouped: bool,
    /// Explicit group key. Defaults to a key derived from severity and title.
    pub group_key: Option<String>,
    /// Lifetime before auto-removal. `None` or zero means no expiry.
    pub duration: Option<Duration>,
}

impl DeliveryOptions {
    /// Creates empty options: immediate, ungrouped, no expiry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pre-show delay.
    #[must_use]
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delayed = Some(delay);
        self
    }

    /// Enables grouping of repeated messages.
    #[must_use]
    pub fn grouped(mut self) -> Self {
        self.grouped = true;
        self
    }

    /// Sets an explicit group key instead of the derived one.
    #[must_use]
    pub fn with_group_key(mut self, key: impl Into<String>) -> Self {
        self.group_key = Some(key.into());
        self
    }

    /// Sets the auto-removal lifetime.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

#[derive(Default)]
struct State {
    toasts: Vec<Notification>,
    modals: Vec<Notification>,
    groups: HashMap<String, ToastGroup>,
}

struct Inner {
    state: Mutex<State>,
    toast_signal: Signal<Arc<Vec<Notification>>>,
    modal_signal: Signal<Arc<Vec<Notification>>>,
    alert_sink: Arc<dyn AlertSink>,
}

impl Inner {
    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The notification registry.
///
/// Cloning is cheap (a shared handle); the composition root owns the value
/// and hands clones to whatever needs to observe or mutate it. Expiry timers
/// hold their own clones, so a registry stays alive while timers are pending.
#[derive(Clone)]
pub struct Registry {
    inner: Arc<Inner>,
}

impl Registry {
    /// Creates a registry whose alert channel writes to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_alert_sink(Arc::new(ConsoleAlert))
    }

    /// Creates a registry with an injected alert sink.
    #[must_use]
    pub fn with_alert_sink(alert_sink: Arc<dyn AlertSink>) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(State::default()),
                toast_signal: Signal::new(Arc::new(Vec::new())),
                modal_signal: Signal::new(Arc::new(Vec::new())),
                alert_sink,
            }),
        }
    }

    /// Shows a notification on the given channel.
    ///
    /// Routes to grouped-toast handling when `options.grouped` is set and the
    /// channel is [`Channel::Toast`]; otherwise delivers a standalone
    /// notification. Returns once the notification has been handed to its
    /// channel, after any requested delay. Accepts all input as-is: empty
    /// titles and messages are valid content.
    pub async fn show(
        &self,
        severity: Severity,
        title: &str,
        message: &str,
        channel: Channel,
        options: DeliveryOptions,
    ) {
        if options.grouped && channel == Channel::Toast {
            self.show_grouped(severity, title, message, options).await;
        } else {
            self.show_standard(severity, title, message, channel, options)
                .await;
        }
    }

    /// Removes the toast with this id. No-op for unknown ids.
    ///
    /// If the id belongs to an active group, the group's expiry timer is
    /// cancelled and the group entry discarded; a later matching show starts
    /// a fresh group.
    pub fn remove_toast(&self, id: NotificationId) {
        let mut state = self.inner.state();

        let group_key = state
            .groups
            .iter()
            .find(|(_, group)| group.notification().id() == id)
            .map(|(key, _)| key.clone());
        if let Some(key) = group_key {
            if let Some(group) = state.groups.remove(&key) {
                group.cancel_timer();
                debug!(group = %key, "toast group discarded");
            }
        }

        let before = state.toasts.len();
        state.toasts.retain(|toast| toast.id() != id);
        if state.toasts.len() != before {
            self.publish_toasts(&state);
            debug!(%id, "toast removed");
        }
    }

    /// Removes the modal with this id. No-op if not present.
    pub fn remove_modal(&self, id: NotificationId) {
        let mut state = self.inner.state();
        let before = state.modals.len();
        state.modals.retain(|modal| modal.id() != id);
        if state.modals.len() != before {
            self.publish_modals(&state);
            debug!(%id, "modal removed");
        }
    }

    /// Returns the current toast list snapshot.
    #[must_use]
    pub fn toasts(&self) -> Arc<Vec<Notification>> {
        self.inner.toast_signal.get()
    }

    /// Returns the current modal list snapshot.
    #[must_use]
    pub fn modals(&self) -> Arc<Vec<Notification>> {
        self.inner.modal_signal.get()
    }

    /// Subscribes to toast list replacements.
    #[must_use]
    pub fn watch_toasts(&self) -> watch::Receiver<Arc<Vec<Notification>>> {
        self.inner.toast_signal.subscribe()
    }

    /// Subscribes to modal list replacements.
    #[must_use]
    pub fn watch_modals(&self) -> watch::Receiver<Arc<Vec<Notification>>> {
        self.inner.modal_signal.subscribe()
    }

    /// Grouped-toast path: merge into an existing group or create one.
    ///
    /// The group mutation is applied and published immediately; a requested
    /// delay is waited out afterwards, so it postpones only the call's
    /// completion, never the mutation's visibility.
    async fn show_grouped(
        &self,
        severity: Severity,
        title: &str,
        message: &str,
        options: DeliveryOptions,
    ) {
        let key = options
            .group_key
            .clone()
            .unwrap_or_else(|| derive_group_key(severity, title));

        {
            let mut state = self.inner.state();

            let updated = state
                .groups
                .get_mut(&key)
                .map(|group| group.absorb(severity, title, message, options.duration));

            if let Some(updated) = updated {
                // Replace in place: same id, same position, order preserved.
                if let Some(entry) = state
                    .toasts
                    .iter_mut()
                    .find(|toast| toast.id() == updated.id())
                {
                    *entry = updated;
                }
                self.publish_toasts(&state);
                debug!(group = %key, "toast group updated");
            } else {
                let notification = Notification::new(
                    severity,
                    title,
                    message,
                    options.duration,
                    Some(key.clone()),
                );
                let mut group = ToastGroup::new(notification.clone());
                if let Some(duration) = notification.duration().filter(|d| !d.is_zero()) {
                    let token = CancellationToken::new();
                    group.set_timer(token.clone());
                    self.spawn_group_expiry(key.clone(), duration, token);
                }
                state.groups.insert(key.clone(), group);
                state.toasts.push(notification);
                self.publish_toasts(&state);
                debug!(group = %key, "toast group created");
            }
        }

        if let Some(delay) = options.delayed {
            tokio::time::sleep(delay).await;
        }
    }

    /// Standard path: build one notification and dispatch it, possibly after
    /// a delay.
    async fn show_standard(
        &self,
        severity: Severity,
        title: &str,
        message: &str,
        channel: Channel,
        options: DeliveryOptions,
    ) {
        let notification = Notification::new(severity, title, message, options.duration, None);

        if let Some(delay) = options.delayed {
            let registry = self.clone();
            delivery::deliver_with_delay(notification, delay, move |n| {
                registry.dispatch(n, channel);
            })
            .await;
        } else {
            self.dispatch(notification, channel);
        }
    }

    fn dispatch(&self, notification: Notification, channel: Channel) {
        debug!(id = %notification.id(), %channel, "notification delivered");
        match channel {
            Channel::Toast => self.deliver_toast(notification),
            Channel::Modal => {
                let mut state = self.inner.state();
                state.modals.push(notification);
                self.publish_modals(&state);
            }
            Channel::Alert => {
                self.inner.alert_sink.present(&alert::banner(&notification));
            }
        }
    }

    fn deliver_toast(&self, notification: Notification) {
        let id = notification.id();
        let expiry = notification.duration().filter(|d| !d.is_zero());

        {
            let mut state = self.inner.state();
            state.toasts.push(notification);
            self.publish_toasts(&state);
        }

        if let Some(duration) = expiry {
            let registry = self.clone();
            tokio::spawn(async move {
                tokio::time::sleep(duration).await;
                // A toast removed in the meantime makes this a no-op.
                registry.remove_toast(id);
            });
        }
    }

    fn spawn_group_expiry(&self, key: String, duration: Duration, token: CancellationToken) {
        let registry = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            if token.is_cancelled() {
                return;
            }
            registry.expire_group(&key);
        });
    }

    fn expire_group(&self, key: &str) {
        let mut state = self.inner.state();
        let Some(group) = state.groups.remove(key) else {
            return;
        };
        group.cancel_timer();
        let id = group.notification().id();
        state.toasts.retain(|toast| toast.id() != id);
        self.publish_toasts(&state);
        debug!(group = %key, "toast group expired");
    }

    fn publish_toasts(&self, state: &State) {
        self.inner.toast_signal.set(Arc::new(state.toasts.clone()));
    }

    fn publish_modals(&self, state: &State) {
        self.inner.modal_signal.set(Arc::new(state.modals.clone()));
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
