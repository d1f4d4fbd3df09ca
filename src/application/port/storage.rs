// SPDX-License-Identifier: MPL-2.0
//! File access port for transient images.

use crate::domain::capture::CapturedImage;

/// Reads a transient image fully into memory.
pub trait FileReader: Send + Sync {
    /// # Errors
    ///
    /// Returns the underlying I/O error when the file is missing or unreadable.
    fn read(&self, image: &CapturedImage) -> std::io::Result<Vec<u8>>;
}
