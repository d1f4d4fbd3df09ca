// SPDX-License-Identifier: MPL-2.0
//! Resize and re-encode of captured frames with the `image` crate.
//!
//! The output is written next to the source as `<stem>-<w>x<h>.<ext>`.
//! Alpha is dropped before encoding since JPEG has no alpha channel.

use crate::application::port::{ImageProcessingError, ImageProcessor};
use crate::domain::capture::{CapturedImage, OutputFormat, TransformPolicy};
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::imageops::FilterType;
use image_rs::DynamicImage;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct ImageManipulator;

impl ImageManipulator {
    /// Resizes `image` to exactly the policy dimensions.
    #[must_use]
    pub fn resize(image: &DynamicImage, policy: &TransformPolicy) -> DynamicImage {
        image.resize_exact(policy.width.max(1), policy.height.max(1), FilterType::Lanczos3)
    }
}

impl ImageProcessor for ImageManipulator {
    fn manipulate(
        &self,
        source: &CapturedImage,
        policy: &TransformPolicy,
    ) -> Result<CapturedImage, ImageProcessingError> {
        let image = image_rs::open(source.path())
            .map_err(|e| ImageProcessingError::Decode(format!("{}: {e}", source.file_name())))?;

        let resized = Self::resize(&image, policy);
        let target = output_path(source.path(), policy);

        let file = File::create(&target).map_err(|e| ImageProcessingError::Encode(e.to_string()))?;
        let mut writer = BufWriter::new(file);

        match policy.format {
            OutputFormat::Jpeg => {
                let rgb = resized.to_rgb8();
                JpegEncoder::new_with_quality(&mut writer, policy.encoder_quality())
                    .encode_image(&rgb)
                    .map_err(|e| ImageProcessingError::Encode(e.to_string()))?;
            }
        }

        std::io::Write::flush(&mut writer).map_err(|e| ImageProcessingError::Encode(e.to_string()))?;
        Ok(CapturedImage::new(target))
    }
}

fn output_path(source: &Path, policy: &TransformPolicy) -> PathBuf {
    let stem = source
        .file_stem()
        .map_or_else(|| "capture".into(), |s| s.to_string_lossy());
    let name = format!(
        "{stem}-{}x{}.{}",
        policy.width,
        policy.height,
        policy.format.extension()
    );
    source.with_file_name(name)
}
