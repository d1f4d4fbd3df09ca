// SPDX-License-Identifier: MPL-2.0
//! Theme mode from the settings and the screen colors derived from it.
//!
//! The mode is resolved once at startup; `System` asks the desktop through
//! `dark-light` and falls back to dark when it cannot tell.

use crate::ui::design_tokens::{palette, tone};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// Light or dark, once `System` has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn resolve(self) -> Appearance {
        self.resolve_with(detect_system)
    }

    fn resolve_with(self, detect: impl FnOnce() -> Option<Appearance>) -> Appearance {
        match self {
            ThemeMode::Light => Appearance::Light,
            ThemeMode::Dark => Appearance::Dark,
            ThemeMode::System => detect().unwrap_or(Appearance::Dark),
        }
    }
}

fn detect_system() -> Option<Appearance> {
    match dark_light::detect() {
        Ok(dark_light::Mode::Light) => Some(Appearance::Light),
        Ok(dark_light::Mode::Dark) => Some(Appearance::Dark),
        _ => None,
    }
}

impl Appearance {
    #[must_use]
    pub fn theme(self) -> Theme {
        match self {
            Appearance::Light => Theme::Light,
            Appearance::Dark => Theme::Dark,
        }
    }

    #[must_use]
    pub fn colors(self) -> ColorScheme {
        match self {
            Appearance::Light => ColorScheme::LIGHT,
            Appearance::Dark => ColorScheme::DARK,
        }
    }
}

/// Colors of the capture screen, by role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    /// Title and section headings.
    pub text: Color,
    /// Empty-state hint.
    pub hint: Color,
    /// Loading spinner.
    pub loading: Color,
    /// Recognized food name.
    pub food: Color,
    /// Permission notice and inline error.
    pub error: Color,
    /// Background of the inline error block.
    pub error_surface: Color,
}

impl ColorScheme {
    pub const LIGHT: ColorScheme = ColorScheme {
        text: palette::INK,
        hint: palette::SLATE,
        loading: tone::VIEWFINDER.rest,
        food: tone::CAPTURE.rest,
        error: palette::ERROR,
        error_surface: palette::CLOUD,
    };

    pub const DARK: ColorScheme = ColorScheme {
        text: palette::WHITE,
        hint: palette::MIST,
        loading: tone::VIEWFINDER.hover,
        food: tone::CAPTURE.hover,
        error: palette::ERROR,
        error_surface: palette::NIGHT,
    };
}
