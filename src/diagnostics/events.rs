// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::workflow::{Effect, WorkflowError};

/// User-initiated actions captured for diagnostics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    OpenViewfinder,
    CloseViewfinder,
    Capture,
    DismissNotification,
}

/// Asynchronous stages of a capture attempt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    PermissionRequest,
    TakePicture,
    Transform,
    Encode,
    Submit,
}

impl PipelineStage {
    /// Stage started by `effect`, if any.
    #[must_use]
    pub fn from_effect(effect: &Effect) -> Option<Self> {
        match effect {
            Effect::RequestPermission => Some(Self::PermissionRequest),
            Effect::TakePicture => Some(Self::TakePicture),
            Effect::Transform(_) => Some(Self::Transform),
            Effect::Encode(_) => Some(Self::Encode),
            Effect::Submit(_) => Some(Self::Submit),
            Effect::None | Effect::Notify(_) | Effect::Rejected(_) => None,
        }
    }
}

/// Workflow state changes worth keeping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    PermissionResolved { granted: bool },
    Recognized { food_name: String, nutrient_count: usize },
    CaptureRejected { reason: String },
}

/// An error with the context needed to reproduce it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEvent {
    /// Taxonomy name (e.g. `TransportError`).
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_bytes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl From<&WorkflowError> for ErrorEvent {
    fn from(err: &WorkflowError) -> Self {
        let context = err.context();
        Self {
            error_type: err.kind().to_string(),
            message: err.to_string(),
            endpoint: context.map(|c| c.endpoint.clone()),
            payload_bytes: context.map(|c| c.payload_bytes),
            status: context.and_then(|c| c.status),
        }
    }
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    StageStarted {
        stage: PipelineStage,
    },

    /// Reported by the worker that ran the stage.
    StageCompleted {
        stage: PipelineStage,
        duration_ms: u64,
    },

    AppState {
        state: AppStateEvent,
    },

    Warning {
        message: String,
    },

    Error {
        #[serde(flatten)]
        error: ErrorEvent,
    },
}
