// SPDX-License-Identifier: MPL-2.0
//! `nutrascan` captures a photo of a meal, sends it to a food-recognition
//! service and shows the predicted dish with its nutrition facts.
//!
//! The capture flow lives in [`workflow`], independent of any UI toolkit; the
//! iced desktop application in [`app`] drives it with the adapters from
//! [`infrastructure`].

pub mod app;
pub mod application;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod workflow;
