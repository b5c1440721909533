// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The feed fills the window and the toast overlay is stacked above it.

use super::Message;
use crate::notifications::{Controller, Toast};
use crate::ui::feed::{self, FeedStats, Post};
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub posts: &'a [Post],
    pub controller: &'a Controller,
    pub stats: FeedStats,
}

/// Renders the feed with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let feed_view = feed::view(ctx.posts, ctx.stats).map(Message::Feed);
    let toasts = Toast::view_overlay(ctx.controller).map(Message::Toast);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(feed_view)
        .push(toasts)
        .into()
}
