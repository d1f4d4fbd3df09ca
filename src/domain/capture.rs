// SPDX-License-Identifier: MPL-2.0
//! Capture-side domain types.

use std::path::{Path, PathBuf};

/// Outcome of the capture-device permission request.
///
/// Starts as `Unknown` and is resolved exactly once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionState {
    #[default]
    Unknown,
    Granted,
    Denied,
}

impl PermissionState {
    /// Returns true once the permission request has produced an answer.
    #[must_use]
    pub fn is_resolved(self) -> bool {
        !matches!(self, PermissionState::Unknown)
    }

    #[must_use]
    pub fn is_granted(self) -> bool {
        matches!(self, PermissionState::Granted)
    }
}

/// Reference to a transient image file on local storage.
///
/// The file itself belongs to the platform; dropping the reference never
/// deletes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CapturedImage {
    path: PathBuf,
}

impl CapturedImage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Local path of the image.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name used in logs (never the full path).
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(String::new, |name| name.to_string_lossy().into_owned())
    }
}

/// Encoding used when re-saving a captured frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
}

impl OutputFormat {
    /// File extension written for this format.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
        }
    }
}

/// Resize and re-encode parameters applied to every captured frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformPolicy {
    /// Target width in pixels.
    pub width: u32,
    /// Target height in pixels.
    pub height: u32,
    /// Lossy quality factor in `0.0..=1.0`.
    pub quality: f32,
    /// Output encoding.
    pub format: OutputFormat,
}

impl TransformPolicy {
    /// The fixed policy used for uploads: 224x224 JPEG at quality 0.5.
    pub const CAPTURE: TransformPolicy = TransformPolicy {
        width: 224,
        height: 224,
        quality: 0.5,
        format: OutputFormat::Jpeg,
    };

    /// Quality mapped to the 1-100 scale used by JPEG encoders.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn encoder_quality(&self) -> u8 {
        // Clamped to 1..=100 before the cast, so truncation cannot occur
        (self.quality * 100.0).round().clamp(1.0, 100.0) as u8
    }
}

impl Default for TransformPolicy {
    fn default() -> Self {
        Self::CAPTURE
    }
}
