// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! The widget reads a record's fields and its `fading_out` flag, nothing
//! else. Fading toasts are drawn translucent and no longer react to input.

use super::controller::Controller;
use super::record::{NotificationId, NotificationRecord, Priority};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, tag_color, typography,
};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Messages emitted by toasts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The dismiss button was pressed.
    Dismiss(NotificationId),
    /// The toast body was clicked.
    Clicked(NotificationId),
}

/// Toast widget.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    pub fn view(record: &NotificationRecord) -> Element<'_, Message> {
        let alpha = Self::alpha(record);
        let accent = with_alpha(Self::priority_color(record.priority()), alpha);
        let avatar_color = with_alpha(tag_color(record.user().color.as_deref()), alpha);

        let avatar = Container::new(
            Text::new(record.user().initial())
                .size(typography::BODY)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(with_alpha(palette::WHITE, alpha)),
                }),
        )
        .width(Length::Fixed(sizing::AVATAR))
        .height(Length::Fixed(sizing::AVATAR))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(avatar_color)),
            border: iced::Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        });

        let body = Column::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(record.user().name.clone())
                    .size(typography::BODY)
                    .style(move |theme: &Theme| text::Style {
                        color: Some(with_alpha(theme.palette().text, alpha)),
                    }),
            )
            .push(
                Text::new(record.message().to_string())
                    .size(typography::BODY)
                    .style(move |theme: &Theme| text::Style {
                        color: Some(with_alpha(theme.palette().text, alpha)),
                    }),
            )
            .push(
                Text::new(format!("{} · {}", record.timestamp(), record.priority().label()))
                    .size(typography::CAPTION)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(with_alpha(palette::GRAY_400, alpha)),
                    }),
            );

        let mut dismiss_button = button(Text::new("✕").size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(dismiss_button_style);
        if !record.is_fading_out() {
            dismiss_button = dismiss_button.on_press(Message::Dismiss(record.id().clone()));
        }

        // Layout: [avatar] [name/message/time] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(avatar)
            .push(Container::new(body).width(Length::Fill))
            .push(dismiss_button);

        let card = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent, alpha));

        if record.is_fading_out() {
            card.into()
        } else {
            mouse_area(card)
                .on_press(Message::Clicked(record.id().clone()))
                .into()
        }
    }

    /// Renders the toast overlay with every queued record.
    ///
    /// Toasts are stacked in the bottom-right corner, newest at the bottom.
    pub fn view_overlay(controller: &Controller) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> =
            controller.records().iter().map(Self::view).collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        Container::new(
            Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
    }

    /// Accent color for a priority level.
    #[must_use]
    pub fn priority_color(priority: Priority) -> Color {
        match priority {
            Priority::Low => palette::PRIORITY_LOW,
            Priority::Medium => palette::PRIORITY_MEDIUM,
            Priority::High => palette::PRIORITY_HIGH,
        }
    }

    /// Opacity for a record, based on its fade flag.
    #[must_use]
    pub fn alpha(record: &NotificationRecord) -> f32 {
        if record.is_fading_out() {
            opacity::FADING
        } else {
            opacity::OPAQUE
        }
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn toast_container_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(with_alpha(bg_color, alpha))),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(with_alpha(theme.palette().text, alpha)),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_background = |a: f32| {
        Some(iced::Background::Color(Color {
            a,
            ..palette::GRAY_400
        }))
    };

    let (background, text_color) = match status {
        button::Status::Active => (None, base.text),
        button::Status::Hovered => (hover_background(opacity::OVERLAY_SUBTLE), base.text),
        button::Status::Pressed => (hover_background(opacity::OVERLAY_MEDIUM), base.text),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
        ),
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
