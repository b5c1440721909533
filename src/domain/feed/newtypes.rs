// SPDX-License-Identifier: MPL-2.0
//! Feed newtypes.
//!
//! This module provides type-safe wrappers for the queue tuning values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// MaxVisible
// =============================================================================

/// Bounds for the number of simultaneously visible toasts.
pub mod max_visible_bounds {
    /// Minimum visible toasts.
    pub const MIN: usize = 1;
    /// Maximum visible toasts.
    pub const MAX: usize = 20;
    /// Default visible toasts.
    pub const DEFAULT: usize = 4;
}

/// Maximum number of non-fading toasts in the queue (1–20).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxVisible(usize);

impl MaxVisible {
    /// Creates a new capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(max_visible_bounds::MIN, max_visible_bounds::MAX))
    }

    /// Returns the raw capacity.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for MaxVisible {
    fn default() -> Self {
        Self(max_visible_bounds::DEFAULT)
    }
}

// =============================================================================
// AutoDismissTimeout
// =============================================================================

/// Bounds for the auto-dismiss timeout in milliseconds.
pub mod auto_dismiss_bounds {
    /// Zero disables auto-dismiss.
    pub const MIN_MS: u64 = 0;
    /// Maximum auto-dismiss timeout.
    pub const MAX_MS: u64 = 60_000;
    /// Default auto-dismiss timeout.
    pub const DEFAULT_MS: u64 = 5_000;
}

/// Delay after which a visible toast starts fading on its own.
///
/// A value of zero disables auto-dismiss entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoDismissTimeout(u64);

impl AutoDismissTimeout {
    /// Auto-dismiss turned off.
    pub const DISABLED: Self = Self(0);

    /// Creates a new timeout in milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(auto_dismiss_bounds::MIN_MS, auto_dismiss_bounds::MAX_MS))
    }

    /// Returns the timeout in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the timeout, or `None` when auto-dismiss is disabled.
    #[must_use]
    pub fn as_duration(self) -> Option<Duration> {
        (self.0 > 0).then(|| Duration::from_millis(self.0))
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        self.0 > 0
    }
}

impl Default for AutoDismissTimeout {
    fn default() -> Self {
        Self(auto_dismiss_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// AnimationDuration
// =============================================================================

/// Bounds for the fade-out animation in milliseconds.
pub mod animation_bounds {
    /// Zero removes toasts on the next tick after they start fading.
    pub const MIN_MS: u64 = 0;
    /// Maximum animation duration.
    pub const MAX_MS: u64 = 5_000;
    /// Default animation duration.
    pub const DEFAULT_MS: u64 = 300;
}

/// Length of the fade-out window between dismissal and removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationDuration(u64);

impl AnimationDuration {
    /// Creates a new duration in milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(animation_bounds::MIN_MS, animation_bounds::MAX_MS))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for AnimationDuration {
    fn default() -> Self {
        Self(animation_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// GenerationInterval
// =============================================================================

/// Bounds for the generator interval in milliseconds.
pub mod interval_bounds {
    /// Minimum generation interval.
    pub const MIN_MS: u64 = 500;
    /// Maximum generation interval.
    pub const MAX_MS: u64 = 60_000;
    /// Default generation interval.
    pub const DEFAULT_MS: u64 = 3_000;
}

/// Period between two generation attempts (500 ms–60 s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationInterval(u64);

impl GenerationInterval {
    /// Creates a new interval in milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(interval_bounds::MIN_MS, interval_bounds::MAX_MS))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for GenerationInterval {
    fn default() -> Self {
        Self(interval_bounds::DEFAULT_MS)
    }
}
