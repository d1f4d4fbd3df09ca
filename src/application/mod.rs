// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports the capture workflow depends on.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The workflow drives the ports without knowing their implementations
//!
//! # Example
//!
//! ```ignore
//! use nutrascan::application::port::Camera;
//! use nutrascan::infrastructure::camera::FileCamera;
//!
//! let camera = FileCamera::new("/path/to/frames");
//! if camera.request_permission().is_granted() {
//!     let frame = camera.take_picture()?;
//! }
//! ```

pub mod port;
