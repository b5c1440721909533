// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Every handler reads the clock once and hands that instant to the queue,
//! so a single message never observes two different "now"s.

use super::Message;
use crate::notifications::generator::{DEFAULT_MESSAGES, FALLBACK_USERS};
use crate::notifications::{
    Controller, FeedUser, GenerationTicket, NotificationRecord, Priority, ToastMessage,
};
use crate::ui::feed;
use iced::{window, Task};
use std::time::Instant;

/// Mutable state the handlers operate on.
pub struct UpdateContext<'a> {
    pub controller: &'a mut Controller,
}

pub fn handle_toast_message(
    ctx: &mut UpdateContext<'_>,
    message: ToastMessage,
    now: Instant,
) -> Task<Message> {
    match message {
        ToastMessage::Dismiss(id) => {
            ctx.controller.dismiss(&id, now);
        }
        ToastMessage::Clicked(id) => {
            ctx.controller.click(&id);
        }
    }
    Task::none()
}

pub fn handle_feed_message(
    ctx: &mut UpdateContext<'_>,
    message: feed::Message,
    now: Instant,
) -> Task<Message> {
    match message {
        feed::Message::LoadSampleBatch => ctx.controller.replace_all(sample_batch(), now),
        feed::Message::ClearAll => ctx.controller.replace_all(Vec::new(), now),
    }
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let report = ctx.controller.tick(now);
    if !report.is_empty() {
        tracing::trace!(
            faded = report.faded.len(),
            removed = report.removed.len(),
            "queue advanced"
        );
    }
    Task::none()
}

/// Starts a generation unless one is already in flight.
pub fn handle_generate_requested(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.controller.begin_generation() {
        Some(job) => Task::perform(job.run(), |(ticket, record)| {
            Message::Generated(ticket, record)
        }),
        None => Task::none(),
    }
}

pub fn handle_generated(
    ctx: &mut UpdateContext<'_>,
    ticket: GenerationTicket,
    record: NotificationRecord,
    now: Instant,
) -> Task<Message> {
    if !ctx.controller.complete_generation(ticket, record, now) {
        tracing::debug!("discarded stale generation result");
    }
    Task::none()
}

/// Tears the queue down, then closes the window.
pub fn handle_window_close(ctx: &mut UpdateContext<'_>, window_id: window::Id) -> Task<Message> {
    ctx.controller.teardown();
    window::close(window_id)
}

/// A batch with one record per fallback user, oldest first.
#[must_use]
pub fn sample_batch() -> Vec<NotificationRecord> {
    let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
    FALLBACK_USERS
        .iter()
        .zip(DEFAULT_MESSAGES.iter().cycle())
        .zip(Priority::ALL.iter().cycle())
        .map(|(((name, color), message), priority)| {
            NotificationRecord::new(
                FeedUser::new(*name).with_color(*color),
                *message,
                timestamp.clone(),
                *priority,
            )
        })
        .collect()
}
