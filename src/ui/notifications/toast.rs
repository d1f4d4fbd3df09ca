// SPDX-License-Identifier: MPL-2.0
//! Toast contents and how long each kind stays up.

use crate::ui::design_tokens::palette;
use crate::workflow::WorkflowError;
use iced::Color;
use std::time::Duration;

/// Handed out by the stack when a toast is pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(pub(super) u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Display time once shown; errors stay until dismissed.
    #[must_use]
    pub fn lifetime(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }

    pub(super) fn accent(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS,
            Severity::Info => palette::INFO,
            Severity::Warning => palette::WARNING,
            Severity::Error => palette::ERROR,
        }
    }

    pub(super) fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "i",
            Severity::Warning | Severity::Error => "!",
        }
    }
}

/// A message waiting to be shown, with its fluent key and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    severity: Severity,
    key: String,
    args: Vec<(&'static str, String)>,
}

impl Toast {
    fn new(severity: Severity, key: impl Into<String>) -> Self {
        Self {
            severity,
            key: key.into(),
            args: Vec::new(),
        }
    }

    /// Food recognized, with the nutrient summary line.
    #[must_use]
    pub fn recognized(food: &str, nutrients: String) -> Self {
        let mut toast = Self::new(Severity::Success, "notification-recognized");
        toast.args = vec![("food", food.to_string()), ("nutrients", nutrients)];
        toast
    }

    /// A terminal failure of the current attempt.
    #[must_use]
    pub fn failure(err: &WorkflowError) -> Self {
        Self::new(Severity::Error, err.notification_key())
    }

    /// Capture refused because an attempt is still running.
    #[must_use]
    pub fn busy() -> Self {
        Self::new(Severity::Info, "notification-busy")
    }

    /// A setting that was ignored at startup.
    #[must_use]
    pub fn settings_warning(key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, key)
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn args(&self) -> &[(&'static str, String)] {
        &self.args
    }
}
