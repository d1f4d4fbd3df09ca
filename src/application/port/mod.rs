// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the collaborators the capture workflow consumes.
//! These traits use only domain types, ensuring the workflow remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`camera`]: Capture-device permission and frame capture
//! - [`image`]: Resize and re-encode of a captured frame
//! - [`storage`]: Reading a transient image back into memory
//! - [`recognition`]: The remote food-recognition endpoint
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no HTTP types)
//! - Traits are `Send + Sync` so they can be shared across blocking tasks
//! - Blocking ports have no `async fn`; callers run them through
//!   `tokio::task::spawn_blocking` and hand the result back as a message
//! - The recognition port returns a boxed future because it is network-bound

pub mod camera;
pub mod image;
pub mod recognition;
pub mod storage;

pub use camera::{Camera, CameraError};
pub use image::{ImageProcessingError, ImageProcessor};
pub use recognition::{RawResponse, RecognitionService, TransportError};
pub use storage::FileReader;
