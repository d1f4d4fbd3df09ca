// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::frame;
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Framed area holding the live preview.
///
/// Colors follow the active iced `Theme` so the frame reads well in light
/// and dark modes.
pub fn viewfinder(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: frame::HAIRLINE,
            radius: frame::RADIUS_MD.into(),
        },
        ..Default::default()
    }
}

/// Inline error block shown in place of the result.
pub fn error_block(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let ColorScheme {
        error,
        error_surface,
        ..
    } = *colors;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(error_surface)),
        border: Border {
            color: error,
            width: frame::HAIRLINE,
            radius: frame::RADIUS_SM.into(),
        },
        text_color: Some(error),
        ..Default::default()
    }
}
