// SPDX-License-Identifier: MPL-2.0
//! Mock social feed shown behind the toast overlay.
//!
//! The posts are static sample data; the header exposes counters and two
//! controls that replace the toast queue wholesale.

use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, tag_color, typography};
use iced::widget::{button, container, scrollable, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// A static feed post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub author: &'static str,
    pub color: &'static str,
    pub body: &'static str,
    pub likes: u32,
}

/// Counters rendered in the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedStats {
    pub visible: usize,
    pub dismissed: usize,
    pub clicked: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Replace the toasts with the sample batch.
    LoadSampleBatch,
    /// Replace the toasts with nothing.
    ClearAll,
}

/// Sample posts.
#[must_use]
pub fn mock_posts() -> Vec<Post> {
    vec![
        Post {
            author: "Maya Patel",
            color: "amber",
            body: "Finally finished the mural on 5th street. Three weekends, two ladders, one very patient landlord.",
            likes: 128,
        },
        Post {
            author: "Liam Carter",
            color: "sky",
            body: "Hot take: the best debugging tool is still a good night's sleep.",
            likes: 342,
        },
        Post {
            author: "Zoe Martin",
            color: "violet",
            body: "Trail run this morning, fog so thick I could barely see my own shoes.",
            likes: 57,
        },
        Post {
            author: "Noah Kim",
            color: "emerald",
            body: "Sourdough attempt #14. It rose. I'm not crying, you're crying.",
            likes: 219,
        },
        Post {
            author: "Ava Thompson",
            color: "rose",
            body: "Book club pick for next month is up, vote in the thread below!",
            likes: 73,
        },
    ]
}

/// Renders the header and the post list.
pub fn view(posts: &[Post], stats: FeedStats) -> Element<'_, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Text::new("Activity feed").size(typography::TITLE_MD))
                .width(Length::Fill),
        )
        .push(
            Text::new(format!(
                "{} visible · {} dismissed · {} opened",
                stats.visible, stats.dismissed, stats.clicked
            ))
            .size(typography::CAPTION),
        )
        .push(button(Text::new("Sample batch").size(typography::CAPTION)).on_press(Message::LoadSampleBatch))
        .push(button(Text::new("Clear").size(typography::CAPTION)).on_press(Message::ClearAll));

    let list = posts
        .iter()
        .fold(Column::new().spacing(spacing::SM), |column, post| {
            column.push(post_card(post))
        });

    let content = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fixed(sizing::FEED_WIDTH))
        .push(header)
        .push(scrollable(list).height(Length::Fill));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::LG)
        .into()
}

fn post_card(post: &Post) -> Element<'_, Message> {
    let accent = tag_color(Some(post.color));

    let author = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Text::new(post.author.get(..1).unwrap_or("?")).size(typography::CAPTION))
                .width(Length::Fixed(sizing::AVATAR))
                .height(Length::Fixed(sizing::AVATAR))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(move |_theme: &Theme| container::Style {
                    background: Some(iced::Background::Color(accent)),
                    text_color: Some(palette::WHITE),
                    border: iced::Border {
                        radius: radius::FULL.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
        )
        .push(Text::new(post.author).size(typography::BODY));

    let body = Column::new()
        .spacing(spacing::XS)
        .push(author)
        .push(Text::new(post.body).size(typography::BODY))
        .push(
            Text::new(format!("♥ {}", post.likes))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_400),
                }),
        );

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(|theme: &Theme| container::Style {
            background: Some(iced::Background::Color(
                theme.extended_palette().background.weak.color,
            )),
            border: iced::Border {
                color: palette::GRAY_700,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            ..Default::default()
        })
        .into()
}
