// SPDX-License-Identifier: MPL-2.0
//! File-backed camera.
//!
//! The source is either a single image or a directory of images. Each capture
//! copies the next frame (directories cycle in file-name order) into the
//! capture directory, so the workflow only ever touches its own transient
//! copies.

use crate::application::port::{Camera, CameraError};
use crate::domain::capture::{CapturedImage, PermissionState};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Extensions accepted as camera frames.
pub const FRAME_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp"];

/// Directory name used under the system temp dir for captures.
const CAPTURE_DIR_NAME: &str = "NutraScan";

#[derive(Debug)]
pub struct FileCamera {
    source: PathBuf,
    capture_dir: PathBuf,
    cursor: AtomicUsize,
}

impl FileCamera {
    /// Creates a camera reading from `source` and capturing into the system
    /// temp directory.
    #[must_use]
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self::with_capture_dir(source, std::env::temp_dir().join(CAPTURE_DIR_NAME))
    }

    #[must_use]
    pub fn with_capture_dir(source: impl Into<PathBuf>, capture_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            capture_dir: capture_dir.into(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Lists the frames currently available, sorted by file name.
    fn frames(&self) -> Vec<PathBuf> {
        if self.source.is_file() {
            return if is_frame(&self.source) {
                vec![self.source.clone()]
            } else {
                Vec::new()
            };
        }

        let Ok(entries) = std::fs::read_dir(&self.source) else {
            return Vec::new();
        };
        let mut frames: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_frame(path))
            .collect();
        frames.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        frames
    }

    fn next_frame(&self, advance: bool) -> Option<PathBuf> {
        let frames = self.frames();
        if frames.is_empty() {
            return None;
        }
        let index = if advance {
            self.cursor.fetch_add(1, Ordering::Relaxed)
        } else {
            self.cursor.load(Ordering::Relaxed)
        };
        frames.get(index % frames.len()).cloned()
    }
}

impl Camera for FileCamera {
    fn request_permission(&self) -> PermissionState {
        let readable = self
            .frames()
            .iter()
            .any(|frame| std::fs::File::open(frame).is_ok());
        if readable {
            PermissionState::Granted
        } else {
            PermissionState::Denied
        }
    }

    fn take_picture(&self) -> Result<CapturedImage, CameraError> {
        let frame = self.next_frame(true).ok_or(CameraError::NoFrame)?;

        std::fs::create_dir_all(&self.capture_dir).map_err(|e| CameraError::Io(e.to_string()))?;

        let extension = frame
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("jpg")
            .to_ascii_lowercase();
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S%3f");
        let target = self
            .capture_dir
            .join(format!("capture-{stamp}.{extension}"));

        std::fs::copy(&frame, &target).map_err(|e| CameraError::Io(e.to_string()))?;
        Ok(CapturedImage::new(target))
    }

    fn preview(&self) -> Option<PathBuf> {
        self.next_frame(false)
    }
}

fn is_frame(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| FRAME_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}
