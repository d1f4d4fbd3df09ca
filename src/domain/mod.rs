// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains the plain data carried through the capture workflow.
//! Wire formats (JSON) and framework handles live in outer layers so these
//! types stay trivially testable.
//!
//! # Modules
//!
//! - [`capture`]: Capture-side types ([`PermissionState`](capture::PermissionState),
//!   [`CapturedImage`](capture::CapturedImage), [`TransformPolicy`](capture::TransformPolicy))
//! - [`recognition`]: Recognition types ([`RecognitionRequest`](recognition::RecognitionRequest),
//!   [`RecognitionResult`](recognition::RecognitionResult), [`NutrientValue`](recognition::NutrientValue))
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))

pub mod capture;
pub mod diagnostics;
pub mod recognition;
