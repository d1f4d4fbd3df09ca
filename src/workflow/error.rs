// SPDX-License-Identifier: MPL-2.0
//! Error taxonomy of a capture attempt.
//!
//! Every variant ends the attempt it belongs to; nothing is retried.

use crate::application::port::TransportError;
use std::fmt;

/// What was sent, where, and what came back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionContext {
    /// Full URL of the recognition endpoint.
    pub endpoint: String,
    /// Size of the base64 payload in bytes.
    pub payload_bytes: usize,
    /// HTTP status, when a response arrived.
    pub status: Option<u16>,
}

impl fmt::Display for SubmissionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "endpoint={} payload_bytes={}",
            self.endpoint, self.payload_bytes
        )?;
        if let Some(status) = self.status {
            write!(f, " status={status}")?;
        }
        Ok(())
    }
}

/// Why a completed response did not yield a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoDataReason {
    /// The server answered outside the 2xx range.
    UnexpectedStatus(u16),
    /// The body was empty.
    EmptyBody,
    /// The body was not the expected JSON document.
    MalformedBody(String),
    /// `food_name` was absent or blank.
    MissingFoodName,
    /// `nutrition_info` was absent or empty.
    MissingNutritionInfo,
}

impl fmt::Display for NoDataReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoDataReason::UnexpectedStatus(code) => write!(f, "unexpected HTTP status {code}"),
            NoDataReason::EmptyBody => write!(f, "empty response body"),
            NoDataReason::MalformedBody(msg) => write!(f, "malformed response body: {msg}"),
            NoDataReason::MissingFoodName => write!(f, "food name missing in response"),
            NoDataReason::MissingNutritionInfo => write!(f, "nutrition info missing in response"),
        }
    }
}

/// Terminal failure of one capture attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    PermissionDenied,
    CameraUnavailable(String),
    ImageProcessing(String),
    Encoding(String),
    Transport {
        context: SubmissionContext,
        error: TransportError,
    },
    NoValidData {
        context: SubmissionContext,
        reason: NoDataReason,
    },
}

impl WorkflowError {
    /// Taxonomy name used in logs and diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            WorkflowError::PermissionDenied => "PermissionDenied",
            WorkflowError::CameraUnavailable(_) => "CameraUnavailable",
            WorkflowError::ImageProcessing(_) => "ImageProcessingError",
            WorkflowError::Encoding(_) => "EncodingError",
            WorkflowError::Transport { .. } => "TransportError",
            WorkflowError::NoValidData { .. } => "NoValidData",
        }
    }

    /// Submission details, for the errors raised after the request was built.
    #[must_use]
    pub fn context(&self) -> Option<&SubmissionContext> {
        match self {
            WorkflowError::Transport { context, .. } | WorkflowError::NoValidData { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }

    /// Returns the i18n key of the toast raised for this error.
    #[must_use]
    pub fn notification_key(&self) -> &'static str {
        match self {
            WorkflowError::PermissionDenied => "notification-camera-permission",
            WorkflowError::CameraUnavailable(_) => "notification-camera-unavailable",
            WorkflowError::ImageProcessing(_) => "notification-capture-failed",
            WorkflowError::Encoding(_) | WorkflowError::Transport { .. } => {
                "notification-recognition-failed"
            }
            WorkflowError::NoValidData { .. } => "notification-no-valid-data",
        }
    }
}

impl fmt::Display for WorkflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowError::PermissionDenied => write!(f, "camera permission denied"),
            WorkflowError::CameraUnavailable(msg) => write!(f, "camera unavailable: {msg}"),
            WorkflowError::ImageProcessing(msg) => write!(f, "image processing failed: {msg}"),
            WorkflowError::Encoding(msg) => write!(f, "encoding failed: {msg}"),
            WorkflowError::Transport { context, error } => write!(f, "{error} ({context})"),
            WorkflowError::NoValidData { context, reason } => {
                write!(f, "no valid data: {reason} ({context})")
            }
        }
    }
}

impl std::error::Error for WorkflowError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(status: Option<u16>) -> SubmissionContext {
        SubmissionContext {
            endpoint: "http://localhost/api/capture".into(),
            payload_bytes: 1024,
            status,
        }
    }

    #[test]
    fn transport_and_no_data_are_distinct_kinds() {
        let transport = WorkflowError::Transport {
            context: context(None),
            error: TransportError::Timeout,
        };
        let no_data = WorkflowError::NoValidData {
            context: context(Some(200)),
            reason: NoDataReason::MissingNutritionInfo,
        };
        assert_ne!(transport.kind(), no_data.kind());
        assert_eq!(transport.kind(), "TransportError");
        assert_eq!(no_data.kind(), "NoValidData");
    }

    #[test]
    fn display_includes_submission_context() {
        let err = WorkflowError::NoValidData {
            context: context(Some(502)),
            reason: NoDataReason::UnexpectedStatus(502),
        };
        let text = err.to_string();
        assert!(text.contains("endpoint=http://localhost/api/capture"));
        assert!(text.contains("payload_bytes=1024"));
        assert!(text.contains("status=502"));
    }

    #[test]
    fn status_is_omitted_when_unknown() {
        assert!(!context(None).to_string().contains("status"));
    }

    #[test]
    fn context_is_only_available_after_submission() {
        assert!(WorkflowError::ImageProcessing("bad".into()).context().is_none());
        let err = WorkflowError::Transport {
            context: context(None),
            error: TransportError::Network("refused".into()),
        };
        assert_eq!(err.context().map(|c| c.payload_bytes), Some(1024));
    }
}
