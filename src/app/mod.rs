// SPDX-License-Identifier: MPL-2.0
//! Application root state for the capture screen.
//!
//! The `App` struct wires the capture [`Workflow`] to its collaborators,
//! notifications, localization and diagnostics, and turns every workflow
//! [`Effect`](crate::workflow::Effect) into an iced `Task`.

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
use crate::error::Result;
use crate::infrastructure::{
    BypassHeader, FileCamera, FsFileReader, HttpRecognitionService, ImageManipulator,
};
use crate::ui::notifications::{Toast, ToastStack};
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::Rotation;
use crate::workflow::pipeline::Services;
use crate::workflow::{self, Workflow};
use config::Config;
use i18n::fluent::I18n;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Root iced application state.
pub struct App {
    pub i18n: I18n,
    workflow: Workflow,
    services: Services,
    notifications: ToastStack,
    diagnostics: DiagnosticsCollector,
    /// Report target for `--diagnostics-out`.
    diagnostics_out: Option<PathBuf>,
    /// Resolved once at startup so system detection does not run per frame.
    theme: Theme,
    colors: ColorScheme,
    /// Frame the next capture will take, while the viewfinder is open.
    preview: Option<PathBuf>,
    spinner_rotation: Rotation,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("status", &self.workflow.status())
            .field("services", &self.services)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Builds the production collaborators from the settings.
///
/// Returns the services and the i18n keys of any settings that had to be
/// ignored. When no camera source is configured, frames are read from
/// `<config dir>/frames`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn services_from_config(config: &Config) -> Result<(Services, Vec<String>)> {
    let mut warnings = Vec::new();

    let bypass = match &config.recognition.bypass_header {
        Some(header) => match BypassHeader::parse(&header.name, &header.value) {
            Ok(bypass) => Some(bypass),
            Err(err) => {
                eprintln!("[WARN] {err}");
                warnings.push("notification-config-invalid-header".to_string());
                None
            }
        },
        None => None,
    };
    let recognizer = HttpRecognitionService::new(&config.recognition.base_url, bypass)?;

    let source = config.camera.source.clone().unwrap_or_else(|| {
        paths::get_app_config_dir()
            .map(|dir| dir.join(config::DEFAULT_FRAMES_DIR))
            .unwrap_or_default()
    });

    let services = Services {
        camera: Arc::new(FileCamera::new(source)),
        processor: Arc::new(ImageManipulator),
        reader: Arc::new(FsFileReader),
        recognizer: Arc::new(recognizer),
        policy: config::CAPTURE_POLICY,
    };
    Ok((services, warnings))
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Creates the application and asks the camera for permission.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            lang,
            diagnostics_out,
            config,
            warnings,
            services,
        } = flags;

        let capacity = config
            .diagnostics
            .buffer_capacity
            .unwrap_or(config::DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY);

        let appearance = config.general.theme_mode.resolve();
        let mut app = App {
            i18n: I18n::new(lang, &config),
            workflow: Workflow::new(),
            services,
            notifications: ToastStack::default(),
            diagnostics: DiagnosticsCollector::new(BufferCapacity::new(capacity)),
            diagnostics_out,
            theme: appearance.theme(),
            colors: appearance.colors(),
            preview: None,
            spinner_rotation: Rotation::default(),
        };

        let now = Instant::now();
        for key in warnings {
            app.diagnostics.log_warning(key.clone());
            app.notifications.push(Toast::settings_warning(key), now);
        }

        let task = app.update(Message::Workflow(workflow::Message::Start));
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.workflow.is_busy(),
            !self.notifications.is_empty(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            workflow: &mut self.workflow,
            services: &self.services,
            notifications: &mut self.notifications,
            diagnostics: &mut self.diagnostics,
            diagnostics_out: self.diagnostics_out.as_deref(),
            preview: &mut self.preview,
            spinner_rotation: &mut self.spinner_rotation,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            presentation: workflow::presenter::present(&self.workflow),
            preview: self.preview.as_deref(),
            notifications: &self.notifications,
            colors: &self.colors,
            spinner_rotation: self.spinner_rotation,
        })
    }
}
