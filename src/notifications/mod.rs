// SPDX-License-Identifier: MPL-2.0
//! Toast notification queue for the activity feed.
//!
//! Notifications appear in a bounded stack, fade out after a timeout, when
//! dismissed, or when pushed out by newer ones, and are removed once the
//! fade animation is over.
//!
//! # Components
//!
//! - [`record`] - `NotificationRecord` with its identifier, user and priority
//! - [`timers`] - `TimerRegistry`, one pending deadline per identifier
//! - [`queue`] - `NotificationQueue`, ordered records and their transitions
//! - [`generator`] - `Generator`, single-flight record production
//! - [`controller`] - `Controller`, capacity, dismissal and teardown
//! - [`toast`] - Toast widget rendering a record
//!
//! # Usage
//!
//! ```
//! use std::time::{Duration, Instant};
//! use toast_feed::notifications::{
//!     Controller, ControllerOptions, FeedUser, GeneratorOptions, NotificationRecord, Priority,
//! };
//!
//! let mut controller = Controller::new(ControllerOptions::default(), GeneratorOptions::default());
//! controller.set_on_dismiss(|record| println!("{} left", record.id()));
//!
//! let now = Instant::now();
//! let record = NotificationRecord::new(FeedUser::new("Ada"), "liked your post", "09:00:00", Priority::Low);
//! let id = record.id().clone();
//! controller.insert(record, now);
//!
//! controller.dismiss(&id, now);
//! controller.tick(now + Duration::from_secs(1));
//! assert!(controller.is_empty());
//! ```

pub mod controller;
pub mod generator;
pub mod queue;
pub mod record;
pub mod timers;
pub mod toast;

pub use controller::{Controller, ControllerOptions, TickReport, TimerAction};
pub use generator::{GenerationJob, GenerationTicket, Generator, GeneratorOptions};
pub use queue::NotificationQueue;
pub use record::{FeedUser, NotificationId, NotificationRecord, Priority};
pub use timers::{DueTimer, TimerRegistry};
pub use toast::{Message as ToastMessage, Toast};
