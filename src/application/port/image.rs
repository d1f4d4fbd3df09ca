// SPDX-License-Identifier: MPL-2.0
//! Image manipulation port.

use crate::domain::capture::{CapturedImage, TransformPolicy};
use std::fmt;

/// Errors that can occur while transforming a captured frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageProcessingError {
    /// The source could not be decoded.
    Decode(String),

    /// The resized image could not be encoded or written.
    Encode(String),
}

impl fmt::Display for ImageProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageProcessingError::Decode(msg) => write!(f, "failed to decode image: {msg}"),
            ImageProcessingError::Encode(msg) => write!(f, "failed to encode image: {msg}"),
        }
    }
}

impl std::error::Error for ImageProcessingError {}

/// Resizes and re-encodes images according to a [`TransformPolicy`].
pub trait ImageProcessor: Send + Sync {
    /// Produces a new transient image from `source`.
    ///
    /// The same source and policy must always produce the same bytes, and
    /// the output dimensions are exactly those of the policy.
    ///
    /// # Errors
    ///
    /// Returns [`ImageProcessingError`] if decoding or encoding fails.
    fn manipulate(
        &self,
        source: &CapturedImage,
        policy: &TransformPolicy,
    ) -> Result<CapturedImage, ImageProcessingError>;
}
