// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Recognition**: Endpoint location and request timeout
//! - **Transform**: Resize and compression applied before upload
//! - **Diagnostics**: Event buffer size
//!
//! The transform values and the timeout are fixed; they are never read from
//! `settings.toml`.

use crate::domain::capture::TransformPolicy;
use crate::domain::diagnostics::buffer_capacity_bounds;

// ==========================================================================
// Recognition Defaults
// ==========================================================================

/// Base URL used when neither the config file nor the CLI names one.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Path appended to the base URL for submissions.
pub const CAPTURE_ENDPOINT_PATH: &str = "/api/capture";

/// Request timeout in milliseconds.
pub const REQUEST_TIMEOUT_MS: u64 = 30_000;

// ==========================================================================
// Camera Defaults
// ==========================================================================

/// Frame directory, relative to the config dir, used when no source is set.
pub const DEFAULT_FRAMES_DIR: &str = "frames";

// ==========================================================================
// Transform Defaults
// ==========================================================================

/// Resize/re-encode policy applied to every capture.
pub const CAPTURE_POLICY: TransformPolicy = TransformPolicy::CAPTURE;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;
