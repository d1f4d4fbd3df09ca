// SPDX-License-Identifier: MPL-2.0
//! View rendering for the capture screen.
//!
//! Everything shown is derived from the [`Presentation`] computed by the
//! workflow presenter; this module only lays it out.

use super::i18n::fluent::I18n;
use super::Message;
use crate::domain::capture::CapturedImage;
use crate::domain::recognition::RecognitionResult;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{self, ToastStack};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::{spinner, Rotation};
use crate::workflow::presenter::{Body, MainView, Presentation, Viewfinder};
use crate::workflow;
use iced::widget::image::Handle;
use iced::widget::{button, scrollable, Column, Container, Image, Row, Stack, Text};
use iced::{alignment, Element, Length};
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub presentation: Presentation,
    pub preview: Option<&'a Path>,
    pub notifications: &'a ToastStack,
    pub colors: &'a ColorScheme,
    pub spinner_rotation: Rotation,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let title = Text::new(i18n.tr("app-title"))
        .size(typography::TITLE)
        .color(ctx.colors.text);

    let screen: Element<'_, Message> = match ctx.presentation {
        Presentation::Blank => Column::new().into(),
        Presentation::Denied => Container::new(
            Text::new(i18n.tr("permission-denied"))
                .size(typography::LEAD)
                .color(ctx.colors.error),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into(),
        Presentation::Main(MainView { viewfinder, body }) => Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(view_viewfinder(viewfinder, ctx.preview, i18n))
            .push(view_body(body, i18n, ctx.colors, ctx.spinner_rotation))
            .into(),
    };

    let content = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(title)
            .push(scrollable(screen).height(Length::Fill)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD);

    Stack::new()
        .push(content)
        .push(notifications::overlay(ctx.notifications, i18n).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_viewfinder<'a>(
    viewfinder: Viewfinder,
    preview: Option<&Path>,
    i18n: &I18n,
) -> Element<'a, Message> {
    let toggle = |label_key: &str| {
        button(Text::new(i18n.tr(label_key)))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::viewfinder)
            .on_press(Message::Workflow(workflow::Message::ToggleViewfinder))
    };

    match viewfinder {
        Viewfinder::Closed => toggle("button-open-camera").into(),
        Viewfinder::Open { can_capture } => {
            let frame: Element<'a, Message> = match preview {
                Some(path) => Image::new(Handle::from_path(path))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into(),
                None => Text::new(i18n.tr("viewfinder-no-frame"))
                    .size(typography::CAPTION)
                    .into(),
            };

            let capture = button(Text::new(i18n.tr("button-capture")))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::capture)
                .on_press_maybe(
                    can_capture.then_some(Message::Workflow(workflow::Message::Capture)),
                );

            Column::new()
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .push(
                    Container::new(frame)
                        .width(Length::Fixed(sizing::VIEWFINDER_WIDTH))
                        .height(Length::Fixed(sizing::VIEWFINDER_HEIGHT))
                        .align_x(alignment::Horizontal::Center)
                        .align_y(alignment::Vertical::Center)
                        .style(styles::container::viewfinder),
                )
                .push(
                    Row::new()
                        .spacing(spacing::SM)
                        .push(toggle("button-close-camera"))
                        .push(capture),
                )
                .into()
        }
    }
}

fn view_body<'a>(
    body: Body,
    i18n: &I18n,
    colors: &ColorScheme,
    spinner_rotation: Rotation,
) -> Element<'a, Message> {
    match body {
        Body::Empty => Text::new(i18n.tr("empty-hint"))
            .size(typography::CAPTION)
            .color(colors.hint)
            .into(),
        Body::Loading => Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(spinner::<Message>(colors.loading, spinner_rotation))
            .push(Text::new(i18n.tr("loading-text")).size(typography::BODY))
            .into(),
        Body::Result { image, result } => view_result(&image, &result, i18n, colors),
        Body::Error { message_key } => Container::new(
            Text::new(i18n.tr(message_key)).size(typography::BODY),
        )
        .padding(spacing::SM)
        .width(Length::Fixed(sizing::VIEWFINDER_WIDTH))
        .style(styles::container::error_block(colors))
        .into(),
    }
}

fn view_result<'a>(
    image: &CapturedImage,
    result: &RecognitionResult,
    i18n: &I18n,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let heading = |key: &str| {
        Text::new(i18n.tr(key))
            .size(typography::HEADING)
            .color(colors.text)
    };

    let nutrients = result.nutrition_info().iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, entry| {
            let value = entry.value.to_string();
            column.push(
                Text::new(i18n.tr_with_args(
                    "nutrient-line",
                    &[("name", entry.name.as_str()), ("value", value.as_str())],
                ))
                .size(typography::BODY),
            )
        },
    );

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(heading("result-image-title"))
        .push(
            Image::new(Handle::from_path(image.path()))
                .width(Length::Fixed(sizing::RESULT_IMAGE))
                .height(Length::Fixed(sizing::RESULT_IMAGE)),
        )
        .push(heading("result-food-title"))
        .push(
            Text::new(result.food_name().to_string())
                .size(typography::LEAD)
                .color(colors.food),
        )
        .push(heading("result-nutrition-title"))
        .push(nutrients)
        .into()
}
