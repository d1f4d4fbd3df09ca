// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::app::config::Config;
use crate::ui::notifications;
use crate::workflow::{self, pipeline::Services};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Capture workflow events, from the screen or from a finished stage.
    Workflow(workflow::Message),
    Notification(notifications::Message),
    /// Periodic tick for the spinner, toast expiry and diagnostics draining.
    Tick(Instant),
}

/// Everything the launcher resolved before the window opens.
#[derive(Debug)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Where to write the diagnostics report after each error.
    pub diagnostics_out: Option<PathBuf>,
    /// Loaded settings with CLI overrides applied.
    pub config: Config,
    /// i18n keys of startup warnings to show as toasts.
    pub warnings: Vec<String>,
    pub services: Services,
}
