// SPDX-License-Identifier: MPL-2.0
//! Capture-device port.
//!
//! The device decides permission once; the workflow never asks twice.

use crate::domain::capture::{CapturedImage, PermissionState};
use std::fmt;
use std::path::PathBuf;

/// Errors raised by a capture device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    /// The device has nothing to capture from.
    NoFrame,

    /// Reading or storing the frame failed.
    Io(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::NoFrame => write!(f, "no frame available"),
            CameraError::Io(msg) => write!(f, "capture failed: {msg}"),
        }
    }
}

impl std::error::Error for CameraError {}

/// A device that can take pictures.
pub trait Camera: Send + Sync {
    /// Asks for access to the device.
    ///
    /// Implementations return [`PermissionState::Unknown`] when they cannot
    /// tell; the workflow treats that as a refusal.
    fn request_permission(&self) -> PermissionState;

    /// Captures one frame into a transient location.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError`] if no frame could be taken.
    fn take_picture(&self) -> Result<CapturedImage, CameraError>;

    /// Path of the frame the next capture would take, for the viewfinder.
    fn preview(&self) -> Option<PathBuf>;
}
