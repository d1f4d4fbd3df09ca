// SPDX-License-Identifier: MPL-2.0
//! Shared UI building blocks for the capture screen.
//!
//! - [`design_tokens`] - Colors, spacing, sizing and type scale
//! - [`theming`] - Light/Dark/System theme mode and color schemes
//! - [`styles`] - Button and container styles
//! - [`widgets`] - Animated loading spinner
//! - [`notifications`] - Toasts announcing capture outcomes

pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod widgets;
