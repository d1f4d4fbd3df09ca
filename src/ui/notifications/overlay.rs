// SPDX-License-Identifier: MPL-2.0
//! Rendering of the toast layer.

use super::stack::{Shown, ToastStack};
use super::Message;
use crate::app::i18n::fluent::I18n;
use crate::ui::design_tokens::{elevation, frame, palette, sizing, spacing, typography};
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

const CLOSE_HOVER_ALPHA: f32 = 0.2;
const CLOSE_PRESSED_ALPHA: f32 = 0.5;

/// Shown toasts stacked in the bottom-right corner, oldest on top.
pub fn overlay<'a>(stack: &'a ToastStack, i18n: &'a I18n) -> Element<'a, Message> {
    if stack.shown().next().is_none() {
        return Column::new().into();
    }

    let column = stack.shown().fold(
        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right),
        |column, shown| column.push(card(shown, i18n)),
    );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn card<'a>(shown: &'a Shown, i18n: &'a I18n) -> Element<'a, Message> {
    let toast = shown.toast();
    let accent = toast.severity().accent();

    let args: Vec<(&str, &str)> = toast
        .args()
        .iter()
        .map(|(name, value)| (*name, value.as_str()))
        .collect();
    let message = i18n.tr_with_args(toast.key(), &args);

    let close = button(Text::new("×").size(typography::BODY))
        .padding(spacing::XXS)
        .style(close_style)
        .on_press(Message::Dismiss(shown.id()));

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(toast.severity().glyph())
                .size(typography::LEAD)
                .color(accent),
        )
        .push(
            Text::new(message)
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(close);

    Container::new(row)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| card_style(theme, accent))
        .into()
}

fn card_style(theme: &Theme, accent: Color) -> container::Style {
    let background = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(background.color)),
        text_color: Some(background.text),
        border: Border {
            color: accent,
            width: frame::ACCENT,
            radius: frame::RADIUS_MD.into(),
        },
        shadow: elevation::FLOATING,
        ..Default::default()
    }
}

fn close_style(theme: &Theme, status: button::Status) -> button::Style {
    let highlight = |alpha: f32| {
        Some(Background::Color(Color {
            a: alpha,
            ..palette::MUTED
        }))
    };
    let background = match status {
        button::Status::Hovered => highlight(CLOSE_HOVER_ALPHA),
        button::Status::Pressed => highlight(CLOSE_PRESSED_ALPHA),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: theme.extended_palette().background.base.text,
        border: Border {
            radius: frame::RADIUS_SM.into(),
            ..Default::default()
        },
        shadow: elevation::FLAT,
        snap: true,
    }
}
