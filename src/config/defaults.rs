// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Queue**: capacity and timing of the toast stack
//! - **Generator**: interval and remote profile source

use crate::domain::feed::{
    animation_bounds, auto_dismiss_bounds, interval_bounds, max_visible_bounds,
};

// ==========================================================================
// Queue Defaults
// ==========================================================================

/// Default number of simultaneously visible toasts.
pub const DEFAULT_MAX_VISIBLE: usize = max_visible_bounds::DEFAULT;

/// Minimum number of visible toasts.
pub const MIN_MAX_VISIBLE: usize = max_visible_bounds::MIN;

/// Maximum number of visible toasts.
pub const MAX_MAX_VISIBLE: usize = max_visible_bounds::MAX;

/// Default auto-dismiss timeout in milliseconds (0 disables).
pub const DEFAULT_AUTO_DISMISS_MS: u64 = auto_dismiss_bounds::DEFAULT_MS;

/// Maximum auto-dismiss timeout in milliseconds.
pub const MAX_AUTO_DISMISS_MS: u64 = auto_dismiss_bounds::MAX_MS;

/// Default fade-out animation length in milliseconds.
pub const DEFAULT_ANIMATION_MS: u64 = animation_bounds::DEFAULT_MS;

/// Maximum fade-out animation length in milliseconds.
pub const MAX_ANIMATION_MS: u64 = animation_bounds::MAX_MS;

/// Period of the timer subscription that advances the queue.
pub const QUEUE_TICK_MS: u64 = 50;

// ==========================================================================
// Generator Defaults
// ==========================================================================

/// Default generation interval in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = interval_bounds::DEFAULT_MS;

/// Minimum generation interval in milliseconds.
pub const MIN_INTERVAL_MS: u64 = interval_bounds::MIN_MS;

/// Maximum generation interval in milliseconds.
pub const MAX_INTERVAL_MS: u64 = interval_bounds::MAX_MS;

/// Public random-user endpoint used for display names.
pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";

const _: () = {
    assert!(MIN_MAX_VISIBLE <= DEFAULT_MAX_VISIBLE && DEFAULT_MAX_VISIBLE <= MAX_MAX_VISIBLE);
    assert!(DEFAULT_AUTO_DISMISS_MS <= MAX_AUTO_DISMISS_MS);
    assert!(DEFAULT_ANIMATION_MS <= MAX_ANIMATION_MS);
    assert!(MIN_INTERVAL_MS <= DEFAULT_INTERVAL_MS && DEFAULT_INTERVAL_MS <= MAX_INTERVAL_MS);
    // The queue must be advanced well within one fade animation.
    assert!(QUEUE_TICK_MS < DEFAULT_ANIMATION_MS);
};
