// SPDX-License-Identifier: MPL-2.0
//! Observable state containers.
//!
//! A `Signal` is a value plus change notification: writers replace the whole
//! value, readers take cloned snapshots or subscribe for updates. Built on
//! `tokio::sync::watch` so subscribers never observe a half-applied mutation.

use tokio::sync::watch;

/// A watchable value replaced wholesale on every write.
#[derive(Debug)]
pub struct Signal<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> Signal<T> {
    /// Creates a signal holding `initial`.
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Returns a cloned snapshot of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replaces the value and notifies all subscribers.
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Returns a receiver that observes every subsequent replacement.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}
