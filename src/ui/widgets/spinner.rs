// SPDX-License-Identifier: MPL-2.0
//! Loading indicator shown while a capture is being recognized.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, path::Arc, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

const STROKE_WIDTH: f32 = 3.0;
const TRACK_ALPHA: f32 = 0.25;

/// Angle of the spinning arc, advanced on every tick while busy.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rotation(f32);

impl Rotation {
    /// One turn takes 24 ticks.
    pub const STEP: f32 = PI / 12.0;

    #[must_use]
    pub fn advanced(self) -> Self {
        Self((self.0 + Self::STEP) % TAU)
    }

    #[must_use]
    pub fn radians(self) -> f32 {
        self.0
    }
}

struct Spinner {
    rotation: Rotation,
    color: Color,
    cache: Cache,
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame: &mut Frame| {
            let center = frame.center();
            let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

            frame.stroke(
                &Path::circle(center, radius),
                Stroke::default()
                    .with_width(STROKE_WIDTH)
                    .with_color(Color {
                        a: TRACK_ALPHA,
                        ..self.color
                    }),
            );

            // Half-turn arc, starting from twelve o'clock at rotation zero
            let start = self.rotation.radians() - FRAC_PI_2;
            let arc = Path::new(|builder| {
                builder.arc(Arc {
                    center,
                    radius,
                    start_angle: Radians(start),
                    end_angle: Radians(start + PI),
                });
            });
            frame.stroke(
                &arc,
                Stroke::default()
                    .with_width(STROKE_WIDTH)
                    .with_color(self.color)
                    .with_line_cap(canvas::LineCap::Round),
            );
        });

        vec![geometry]
    }
}

/// Spinner drawn in `color` at `rotation`.
pub fn spinner<'a, Message: 'a>(color: Color, rotation: Rotation) -> Element<'a, Message> {
    Canvas::new(Spinner {
        rotation,
        color,
        cache: Cache::default(),
    })
    .width(Length::Fixed(sizing::SPINNER))
    .height(Length::Fixed(sizing::SPINNER))
    .into()
}
