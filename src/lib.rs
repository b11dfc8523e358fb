// SPDX-License-Identifier: MPL-2.0
//! `toastline` is an in-app notification center built on Tokio.
//!
//! It provides a registry of active notifications across three delivery
//! channels (toast, modal, alert), with optional pre-display delay, automatic
//! expiry, and grouping of repeated messages into a single counted entry.
//! Presentation layers subscribe to observable snapshots of the registry
//! state and feed user close actions back into it.

#![doc(html_root_url = "https://docs.rs/toastline/0.2.0")]

pub mod config;
pub mod error;
pub mod notifications;
