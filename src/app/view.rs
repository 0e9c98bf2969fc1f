// SPDX-License-Identifier: MPL-2.0
//! Demo window layout: a row of trigger buttons under the toast overlay.

use super::Message;
use crate::toast::{Manager, Variant};
use crate::ui::design_tokens::{opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::overlay;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{Background, Color, Element, Length, Theme};
use std::time::Instant;

/// Renders the demo page with the toast overlay stacked on top.
pub fn view(manager: &Manager, now: Instant) -> Element<'_, Message> {
    let buttons = Variant::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::SM), |row, variant| {
            row.push(trigger_button(variant))
        });

    let page = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(Text::new("Toast notifications").size(typography::TITLE_MD))
        .push(buttons);

    let base = Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    Stack::new()
        .push(base)
        .push(overlay::view(manager, now).map(Message::Toast))
        .into()
}

fn trigger_button(variant: Variant) -> Element<'static, Message> {
    let accent = variant.color();

    button(
        Container::new(Text::new(label(variant)).size(typography::BODY))
            .height(Length::Fill)
            .align_y(Vertical::Center),
    )
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding([0.0, spacing::MD])
    .on_press(Message::Show(variant))
    .style(move |theme: &Theme, status| trigger_button_style(theme, status, accent))
    .into()
}

fn label(variant: Variant) -> &'static str {
    match variant {
        Variant::Neutral => "Default",
        Variant::Info => "Info",
        Variant::Success => "Success",
        Variant::Warning => "Warning",
        Variant::Error => "Error",
    }
}

fn trigger_button_style(theme: &Theme, status: button::Status, accent: Color) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OPAQUE,
        button::Status::Pressed => opacity::SURFACE,
        button::Status::Active => 0.85,
        button::Status::Disabled => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..accent })),
        text_color: theme.extended_palette().background.base.color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
