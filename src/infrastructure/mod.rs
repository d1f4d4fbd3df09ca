// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like the
//! `image` codecs, `reqwest` and system I/O.
//!
//! # Available Adapters
//!
//! - [`camera`]: Frame source on disk (implements [`Camera`])
//! - [`manipulator`]: Resize and JPEG re-encode (implements [`ImageProcessor`])
//! - [`storage`]: Filesystem reads (implements [`FileReader`])
//! - [`http`]: Recognition endpoint client (implements [`RecognitionService`])
//!
//! [`Camera`]: crate::application::port::Camera
//! [`ImageProcessor`]: crate::application::port::ImageProcessor
//! [`FileReader`]: crate::application::port::FileReader
//! [`RecognitionService`]: crate::application::port::RecognitionService

pub mod camera;
pub mod http;
pub mod manipulator;
pub mod storage;

pub use camera::FileCamera;
pub use http::{BypassHeader, HttpRecognitionService};
pub use manipulator::ImageManipulator;
pub use storage::FsFileReader;
