// SPDX-License-Identifier: MPL-2.0
//! `toast_feed` is a mock activity feed with a bounded stack of toast
//! notifications, built with the Iced GUI framework.
//!
//! Notifications arrive on a timer, fade out on their own or when
//! dismissed, and are evicted oldest-first when the stack is full.

#![doc(html_root_url = "https://docs.rs/toast_feed/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod notifications;
pub mod ui;
