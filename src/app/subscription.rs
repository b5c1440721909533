// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.

use super::Message;
use crate::config::QUEUE_TICK_MS;
use crate::domain::feed::GenerationInterval;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Forwards window close requests so the queue can be torn down first.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = event {
            return Some(Message::WindowCloseRequested(window_id));
        }
        None
    })
}

/// Drives queue timers, only while toasts are on screen.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(QUEUE_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Requests a new notification every interval while the queue is alive.
pub fn create_generation_subscription(
    alive: bool,
    interval: GenerationInterval,
) -> Subscription<Message> {
    if alive {
        time::every(interval.as_duration()).map(|_| Message::GenerateRequested)
    } else {
        Subscription::none()
    }
}
