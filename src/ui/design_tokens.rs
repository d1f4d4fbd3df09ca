// SPDX-License-Identifier: MPL-2.0
//! Colors, spacing and sizes shared by the capture screen.
//!
//! Layout code reads these constants instead of literals, so the viewfinder,
//! the result column and the toasts line up on the same 8px grid.
//!
//! ```
//! use nutrascan::ui::design_tokens::{sizing, spacing, tone};
//!
//! let gap = spacing::MD; // two grid units
//! assert!(sizing::VIEWFINDER_WIDTH >= sizing::RESULT_IMAGE);
//! assert_ne!(tone::CAPTURE.rest, tone::VIEWFINDER.rest);
//! # let _ = gap;
//! ```

use iced::Color;

pub mod palette {
    use iced::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const INK: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const NIGHT: Color = Color::from_rgb(0.15, 0.15, 0.15);
    pub const SLATE: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const MUTED: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const MIST: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const CLOUD: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Toast accents
    pub const SUCCESS: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO: Color = Color::from_rgb(0.392, 0.588, 1.0);
    pub const WARNING: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const ERROR: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

/// Shades of one filled button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub rest: Color,
    pub hover: Color,
    pub edge: Color,
}

pub mod tone {
    use super::Tone;
    use iced::Color;

    /// Opens and closes the viewfinder.
    pub const VIEWFINDER: Tone = Tone {
        rest: Color::from_rgb(0.0, 0.482, 1.0),
        hover: Color::from_rgb(0.2, 0.58, 1.0),
        edge: Color::from_rgb(0.0, 0.4, 0.85),
    };

    /// Takes the picture.
    pub const CAPTURE: Tone = Tone {
        rest: Color::from_rgb(0.157, 0.655, 0.271),
        hover: Color::from_rgb(0.22, 0.74, 0.35),
        edge: Color::from_rgb(0.12, 0.53, 0.22),
    };
}

pub mod spacing {
    const UNIT: f32 = 8.0;

    pub const XXS: f32 = UNIT * 0.5;
    pub const XS: f32 = UNIT;
    pub const SM: f32 = UNIT * 1.5;
    pub const MD: f32 = UNIT * 2.0;
    pub const LG: f32 = UNIT * 3.0;
}

pub mod sizing {
    use crate::domain::capture::TransformPolicy;

    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const SPINNER: f32 = 48.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    pub const VIEWFINDER_WIDTH: f32 = 320.0;
    pub const VIEWFINDER_HEIGHT: f32 = 240.0;

    /// The uploaded image is shown at its real size.
    #[allow(clippy::cast_precision_loss)]
    pub const RESULT_IMAGE: f32 = TransformPolicy::CAPTURE.width as f32;
}

pub mod typography {
    pub const TITLE: f32 = 20.0;
    pub const HEADING: f32 = 18.0;
    /// Food name and the permission notice.
    pub const LEAD: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

/// Outline widths and corner radii.
pub mod frame {
    pub const HAIRLINE: f32 = 1.0;
    pub const ACCENT: f32 = 2.0;
    pub const RADIUS_SM: f32 = 4.0;
    pub const RADIUS_MD: f32 = 8.0;
}

pub mod elevation {
    use iced::{Color, Shadow, Vector};

    const fn drop(offset_y: f32, blur_radius: f32) -> Shadow {
        Shadow {
            color: Color::BLACK,
            offset: Vector { x: 0.0, y: offset_y },
            blur_radius,
        }
    }

    pub const FLAT: Shadow = drop(0.0, 0.0);
    pub const RAISED: Shadow = drop(2.0, 4.0);
    pub const FLOATING: Shadow = drop(4.0, 8.0);
}

const _: () = {
    assert!(spacing::XXS < spacing::XS && spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD && spacing::MD < spacing::LG);
    assert!(typography::TITLE > typography::HEADING);
    assert!(typography::HEADING > typography::LEAD);
    assert!(typography::LEAD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
    assert!(sizing::VIEWFINDER_WIDTH >= sizing::RESULT_IMAGE);
    assert!(sizing::TOAST_WIDTH <= sizing::VIEWFINDER_WIDTH);
    assert!(frame::ACCENT > frame::HAIRLINE);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_sits_on_the_grid() {
        for step in [spacing::XXS, spacing::XS, spacing::SM, spacing::MD, spacing::LG] {
            assert_eq!((step * 2.0) % spacing::XS, 0.0);
        }
    }

    #[test]
    fn result_image_matches_uploaded_size() {
        assert_eq!(
            sizing::RESULT_IMAGE,
            crate::app::config::CAPTURE_POLICY.width as f32
        );
    }

    #[test]
    fn hover_shades_are_lighter_than_rest() {
        for tone in [tone::VIEWFINDER, tone::CAPTURE] {
            let brightness = |c: Color| c.r + c.g + c.b;
            assert!(brightness(tone.hover) > brightness(tone.rest));
            assert!(brightness(tone.edge) < brightness(tone.rest));
        }
    }
}
