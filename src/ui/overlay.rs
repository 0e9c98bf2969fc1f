// SPDX-License-Identifier: MPL-2.0
//! Toast overlay rendering.
//!
//! Draws the surface container as a column of cards aligned to the stack
//! position. Pointer and click events on a card are reported back as
//! [`toast::Message`](crate::toast::Message)s addressed to that toast.

use crate::config::Position;
use crate::toast::{Manager, Message, ToastElement, ToastInstance};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, mouse_area, progress_bar, text, Column, Container, Row, Text};
use iced::{Background, Color, Element, Length, Theme};
use std::time::Instant;

/// Renders every attached toast, stacked at the container position.
///
/// Returns an empty, zero-sized element while the surface has no toasts.
pub fn view(manager: &Manager, now: Instant) -> Element<'_, Message> {
    let Some(surface) = manager.surface().filter(|surface| !surface.is_empty()) else {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    };

    let (horizontal, vertical) = alignment(surface.position());

    let cards: Vec<Element<'_, Message>> = surface
        .toasts()
        .map(|toast| card(toast, now))
        .collect();

    let column = Column::with_children(cards)
        .spacing(spacing::XS)
        .align_x(horizontal);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(horizontal)
        .align_y(vertical)
        .padding(spacing::MD)
        .into()
}

/// Renders a single toast card.
fn card(toast: &ToastInstance, now: Instant) -> Element<'_, Message> {
    let id = toast.id();
    let element = toast.element();
    let accent = element.variant().color();
    let alpha = card_alpha(element);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center);

    if let Some(glyph) = element.icon() {
        let badge = Container::new(Text::new(glyph).size(typography::CAPTION))
            .width(Length::Fixed(sizing::ICON_MD))
            .height(Length::Fixed(sizing::ICON_MD))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(move |_theme: &Theme| icon_badge_style(accent, alpha));
        row = row.push(badge);
    }

    let message = Text::new(element.text())
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(with_alpha(theme.palette().text, alpha)),
        });

    let close = button(Text::new("×").size(typography::BODY))
        .on_press(Message::CloseRequested(id))
        .padding([0.0, spacing::XXS])
        .style(close_button_style);

    row = row
        .push(
            Container::new(message)
                .width(Length::Fill)
                .align_x(Horizontal::Left),
        )
        .push(close);

    let mut body = Column::new().spacing(spacing::XS).push(row);

    if let Some(progress) = toast.progress_at(now) {
        let bar = progress_bar(0.0..=1.0, progress)
            .girth(sizing::PROGRESS_TRACK)
            .style(move |theme: &Theme| progress_style(theme, accent, alpha));
        body = body.push(bar);
    }

    let card = Container::new(body)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_card_style(theme, accent, alpha));

    mouse_area(card)
        .on_enter(Message::PointerEntered(id))
        .on_exit(Message::PointerLeft(id))
        .on_press(Message::Clicked(id))
        .into()
}

/// Maps a stack position to container alignment.
fn alignment(position: Position) -> (Horizontal, Vertical) {
    let horizontal = match position {
        Position::TopLeft | Position::BottomLeft => Horizontal::Left,
        Position::TopCenter | Position::BottomCenter => Horizontal::Center,
        Position::TopRight | Position::BottomRight => Horizontal::Right,
    };
    let vertical = if position.is_top() {
        Vertical::Top
    } else {
        Vertical::Bottom
    };
    (horizontal, vertical)
}

/// Card opacity for the element's current markers.
///
/// Toasts are transparent until their appear frame and fade while removing.
fn card_alpha(element: &ToastElement) -> f32 {
    if element.is_removing() {
        opacity::OVERLAY_MEDIUM
    } else if element.is_visible() {
        opacity::OPAQUE
    } else {
        opacity::TRANSPARENT
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn toast_card_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE * alpha,
            ..bg_color
        })),
        border: iced::Border {
            color: with_alpha(accent, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: with_alpha(shadow::MD.color, opacity::OVERLAY_SUBTLE * alpha),
            ..shadow::MD
        },
        text_color: Some(with_alpha(theme.palette().text, alpha)),
        ..Default::default()
    }
}

fn icon_badge_style(accent: Color, alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(accent, alpha))),
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(with_alpha(palette::WHITE, alpha)),
        ..Default::default()
    }
}

fn progress_style(theme: &Theme, accent: Color, alpha: f32) -> progress_bar::Style {
    let track = theme.extended_palette().background.weak.color;

    progress_bar::Style {
        background: Background::Color(with_alpha(track, alpha)),
        bar: Background::Color(with_alpha(accent, alpha)),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
    }
}

fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let hover_background = |level: f32| {
        Some(Background::Color(Color {
            a: level,
            ..palette::GRAY_400
        }))
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: hover_background(opacity::OVERLAY_SUBTLE),
            text_color: base.text,
            border: iced::Border {
                color: palette::GRAY_200,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: hover_background(opacity::OVERLAY_MEDIUM),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: with_alpha(base.text, opacity::OVERLAY_MEDIUM),
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToastConfig;
    use crate::toast::{Timeline, Variant};

    #[test]
    fn alignment_follows_position() {
        assert_eq!(
            alignment(Position::TopLeft),
            (Horizontal::Left, Vertical::Top)
        );
        assert_eq!(
            alignment(Position::BottomCenter),
            (Horizontal::Center, Vertical::Bottom)
        );
        assert_eq!(
            alignment(Position::TopRight),
            (Horizontal::Right, Vertical::Top)
        );
    }

    #[test]
    fn card_alpha_tracks_markers() {
        let mut element = ToastElement::build(Variant::Info, "hi".into(), &ToastConfig::default());
        assert_eq!(card_alpha(&element), opacity::TRANSPARENT);

        element.set_visible(true);
        assert_eq!(card_alpha(&element), opacity::OPAQUE);

        element.mark_removing();
        assert_eq!(card_alpha(&element), opacity::OVERLAY_MEDIUM);
    }

    #[test]
    fn toast_card_style_uses_accent_color() {
        let accent = palette::SUCCESS_500;
        let style = toast_card_style(&Theme::Dark, accent, opacity::OPAQUE);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn faded_card_is_translucent() {
        let style = toast_card_style(&Theme::Light, palette::ERROR_500, opacity::OVERLAY_MEDIUM);
        assert!(style.border.color.a < 1.0);
    }

    #[test]
    fn close_button_only_draws_background_on_interaction() {
        let theme = Theme::Dark;
        assert!(close_button_style(&theme, button::Status::Active)
            .background
            .is_none());
        assert!(close_button_style(&theme, button::Status::Hovered)
            .background
            .is_some());
    }

    #[test]
    fn view_renders_with_and_without_toasts() {
        let start = Instant::now();
        let mut timeline = Timeline::new(start);
        let mut manager = Manager::default();

        let _ = view(&manager, start);

        manager.toaster(&mut timeline).error("X");
        manager.pump(&mut timeline, start);
        let _ = view(&manager, start);
    }
}
