// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{elevation, frame, palette, tone, Tone};
use iced::widget::button;
use iced::{Background, Border, Theme};

fn filled(tone: Tone, status: button::Status) -> button::Style {
    let (background, border_color, shadow) = match status {
        button::Status::Active | button::Status::Pressed => {
            (tone.rest, tone.edge, elevation::RAISED)
        }
        button::Status::Hovered => (tone.hover, tone.rest, elevation::FLOATING),
        button::Status::Disabled => (palette::MIST, palette::MUTED, elevation::FLAT),
    };
    let text_color = if status == button::Status::Disabled {
        palette::MUTED
    } else {
        palette::WHITE
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: frame::HAIRLINE,
            radius: frame::RADIUS_SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Blue button opening and closing the viewfinder.
pub fn viewfinder(_theme: &Theme, status: button::Status) -> button::Style {
    filled(tone::VIEWFINDER, status)
}

/// Green capture button, grayed out while an attempt runs.
pub fn capture(_theme: &Theme, status: button::Status) -> button::Style {
    filled(tone::CAPTURE, status)
}
