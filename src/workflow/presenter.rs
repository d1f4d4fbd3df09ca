// SPDX-License-Identifier: MPL-2.0
//! Maps workflow state to what the screen shows.
//!
//! [`present`] is a pure function of the state: calling it twice on the same
//! workflow yields equal presentations, and the view layer renders from the
//! presentation alone.

use super::{Phase, Workflow};
use crate::domain::capture::{CapturedImage, PermissionState};
use crate::domain::recognition::RecognitionResult;

/// Message key of the inline error shown for every failed attempt.
pub const GENERIC_ERROR_KEY: &str = "error-generic";

/// Whole-screen presentation.
#[derive(Debug, Clone, PartialEq)]
pub enum Presentation {
    /// Permission not answered yet.
    Blank,
    /// Permission refused; replaces the screen.
    Denied,
    Main(MainView),
}

/// Regular screen once permission is granted.
#[derive(Debug, Clone, PartialEq)]
pub struct MainView {
    pub viewfinder: Viewfinder,
    pub body: Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewfinder {
    Closed,
    Open { can_capture: bool },
}

/// Content below the viewfinder controls. Exactly one variant is visible.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Empty,
    Loading,
    Result {
        image: CapturedImage,
        result: RecognitionResult,
    },
    Error {
        message_key: &'static str,
    },
}

#[must_use]
pub fn present(workflow: &Workflow) -> Presentation {
    match workflow.permission() {
        PermissionState::Unknown => Presentation::Blank,
        PermissionState::Denied => Presentation::Denied,
        PermissionState::Granted => Presentation::Main(MainView {
            viewfinder: if workflow.viewfinder_open() {
                Viewfinder::Open {
                    can_capture: !workflow.is_busy(),
                }
            } else {
                Viewfinder::Closed
            },
            body: body(workflow),
        }),
    }
}

fn body(workflow: &Workflow) -> Body {
    let shown = || match (workflow.image(), workflow.result()) {
        (Some(image), Some(result)) => Some(Body::Result {
            image: image.clone(),
            result: result.clone(),
        }),
        _ => None,
    };

    match workflow.phase() {
        Phase::Idle => Body::Empty,
        Phase::Capturing => shown().unwrap_or(Body::Empty),
        Phase::Submitting => Body::Loading,
        Phase::Succeeded => shown().unwrap_or(Body::Error {
            message_key: GENERIC_ERROR_KEY,
        }),
        Phase::Failed(_) => Body::Error {
            message_key: GENERIC_ERROR_KEY,
        },
    }
}
