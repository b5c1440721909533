// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`feed`]: Toast feed tuning values ([`MaxVisible`](feed::MaxVisible),
//!   [`AutoDismissTimeout`](feed::AutoDismissTimeout),
//!   [`AnimationDuration`](feed::AnimationDuration),
//!   [`GenerationInterval`](feed::GenerationInterval))

pub mod feed;
