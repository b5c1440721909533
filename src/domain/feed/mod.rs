// SPDX-License-Identifier: MPL-2.0
//! Feed domain types.
//!
//! Range-checked tuning values for the notification queue. They are
//! independent of any presentation framework.

pub mod newtypes;

pub use newtypes::{
    animation_bounds, auto_dismiss_bounds, interval_bounds, max_visible_bounds,
    AnimationDuration, AutoDismissTimeout, GenerationInterval, MaxVisible,
};
