// SPDX-License-Identifier: MPL-2.0
//! Filesystem reader for transient images.

use crate::application::port::FileReader;
use crate::domain::capture::CapturedImage;

#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileReader;

impl FileReader for FsFileReader {
    fn read(&self, image: &CapturedImage) -> std::io::Result<Vec<u8>> {
        std::fs::read(image.path())
    }
}
