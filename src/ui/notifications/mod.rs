// SPDX-License-Identifier: MPL-2.0
//! Toasts announcing capture outcomes.
//!
//! Recognition results, failures, rejected captures and ignored settings are
//! stacked in the bottom-right corner without blocking the screen. At most
//! three toasts are shown; the rest wait and get their full display time once
//! a slot frees up.
//!
//! ```ignore
//! let mut toasts = ToastStack::default();
//! toasts.push(Toast::failure(&err), Instant::now());
//! let layer = overlay(&toasts, &i18n).map(Message::Notification);
//! ```

mod overlay;
mod stack;
mod toast;

pub use overlay::overlay;
pub use stack::{Shown, ToastStack};
pub use toast::{Severity, Toast, ToastId};

/// Interactions with the toast layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Dismiss(ToastId),
}
