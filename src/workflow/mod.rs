// SPDX-License-Identifier: MPL-2.0
//! Capture workflow state machine.
//!
//! [`Workflow`] owns every piece of attempt state. Events arrive as
//! [`Message`]s; [`Workflow::update`] mutates the state and answers with the
//! [`Effect`] the caller must run next. Stage runners in [`pipeline`] turn an
//! effect back into the follow-up message, so capture, transform, encode and
//! submit always run one after the other.
//!
//! Only one attempt is in flight at a time. A capture requested while an
//! attempt is running is rejected and leaves the state untouched.

pub mod contract;
pub mod error;
pub mod pipeline;
pub mod presenter;

pub use error::{NoDataReason, SubmissionContext, WorkflowError};

use crate::domain::capture::{CapturedImage, PermissionState};
use crate::domain::recognition::{RecognitionRequest, RecognitionResult};

/// Observable status of the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStatus {
    Idle,
    AwaitingPermission,
    ViewfinderOpen,
    Capturing,
    Submitting,
    Succeeded,
    Failed,
}

/// Progress of the current attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Capturing,
    Submitting,
    Succeeded,
    Failed(WorkflowError),
}

/// Stage whose completion message is awaited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Picture,
    Transform,
    Encode,
    Recognition,
}

/// Events dispatched into the workflow.
#[derive(Debug, Clone)]
pub enum Message {
    /// Screen mounted; asks for permission the first time only.
    Start,
    PermissionResolved(PermissionState),
    ToggleViewfinder,
    Capture,
    FrameCaptured(Result<CapturedImage, WorkflowError>),
    FrameTransformed(Result<CapturedImage, WorkflowError>),
    ImageEncoded(Result<RecognitionRequest, WorkflowError>),
    RecognitionCompleted(Result<RecognitionResult, WorkflowError>),
}

/// Something the user should be told about.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Recognized(RecognitionResult),
    Failed(WorkflowError),
}

/// Why an event was refused without touching the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// An attempt is already running.
    Busy,
}

/// Work the caller must perform after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    RequestPermission,
    TakePicture,
    Transform(CapturedImage),
    Encode(CapturedImage),
    Submit(RecognitionRequest),
    Notify(Notice),
    Rejected(Rejection),
}

/// State of the capture screen.
#[derive(Debug, Clone)]
pub struct Workflow {
    permission: PermissionState,
    permission_requested: bool,
    viewfinder_open: bool,
    phase: Phase,
    pending: Option<Stage>,
    image: Option<CapturedImage>,
    result: Option<RecognitionResult>,
}

impl Default for Workflow {
    fn default() -> Self {
        Self::new()
    }
}

impl Workflow {
    #[must_use]
    pub fn new() -> Self {
        Self {
            permission: PermissionState::Unknown,
            permission_requested: false,
            viewfinder_open: false,
            phase: Phase::Idle,
            pending: None,
            image: None,
            result: None,
        }
    }

    #[must_use]
    pub fn permission(&self) -> PermissionState {
        self.permission
    }

    #[must_use]
    pub fn viewfinder_open(&self) -> bool {
        self.viewfinder_open
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Transformed image of the latest attempt that got past the transform.
    #[must_use]
    pub fn image(&self) -> Option<&CapturedImage> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn result(&self) -> Option<&RecognitionResult> {
        self.result.as_ref()
    }

    /// Returns true while an attempt is running.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Capturing | Phase::Submitting)
    }

    /// Running attempts win; otherwise an open viewfinder is reported
    /// before the outcome of the last attempt.
    #[must_use]
    pub fn status(&self) -> WorkflowStatus {
        if !self.permission.is_resolved() {
            return WorkflowStatus::AwaitingPermission;
        }
        match self.phase {
            Phase::Capturing => WorkflowStatus::Capturing,
            Phase::Submitting => WorkflowStatus::Submitting,
            _ if self.viewfinder_open => WorkflowStatus::ViewfinderOpen,
            Phase::Idle => WorkflowStatus::Idle,
            Phase::Succeeded => WorkflowStatus::Succeeded,
            Phase::Failed(_) => WorkflowStatus::Failed,
        }
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::Start => {
                if self.permission_requested {
                    Effect::None
                } else {
                    self.permission_requested = true;
                    Effect::RequestPermission
                }
            }
            Message::PermissionResolved(state) => self.resolve_permission(state),
            Message::ToggleViewfinder => {
                if self.permission.is_granted() {
                    self.viewfinder_open = !self.viewfinder_open;
                }
                Effect::None
            }
            Message::Capture => self.begin_capture(),
            Message::FrameCaptured(outcome) => {
                if !self.awaits(Stage::Picture) {
                    return Effect::None;
                }
                match outcome {
                    Ok(_) if !self.viewfinder_open => self.fail(WorkflowError::CameraUnavailable(
                        "viewfinder closed during capture".into(),
                    )),
                    Ok(frame) => {
                        self.pending = Some(Stage::Transform);
                        Effect::Transform(frame)
                    }
                    Err(err) => self.fail(err),
                }
            }
            Message::FrameTransformed(outcome) => {
                if !self.awaits(Stage::Transform) {
                    return Effect::None;
                }
                match outcome {
                    Ok(image) => {
                        // New image replaces the old reference; the result it
                        // belonged to is cleared before submission starts.
                        self.image = Some(image.clone());
                        self.result = None;
                        self.phase = Phase::Submitting;
                        self.pending = Some(Stage::Encode);
                        Effect::Encode(image)
                    }
                    Err(err) => self.fail(err),
                }
            }
            Message::ImageEncoded(outcome) => {
                if !self.awaits(Stage::Encode) {
                    return Effect::None;
                }
                match outcome {
                    Ok(request) => {
                        self.pending = Some(Stage::Recognition);
                        Effect::Submit(request)
                    }
                    Err(err) => self.finish_submission(Err(err)),
                }
            }
            Message::RecognitionCompleted(outcome) => {
                if !self.awaits(Stage::Recognition) {
                    return Effect::None;
                }
                self.finish_submission(outcome)
            }
        }
    }

    fn resolve_permission(&mut self, state: PermissionState) -> Effect {
        if self.permission.is_resolved() {
            return Effect::None;
        }
        self.permission_requested = true;
        if state.is_granted() {
            self.permission = PermissionState::Granted;
            Effect::None
        } else {
            self.permission = PermissionState::Denied;
            self.viewfinder_open = false;
            self.fail(WorkflowError::PermissionDenied)
        }
    }

    fn begin_capture(&mut self) -> Effect {
        if self.is_busy() {
            return Effect::Rejected(Rejection::Busy);
        }
        if !self.permission.is_granted() {
            return self.fail(WorkflowError::CameraUnavailable(
                "camera permission not granted".into(),
            ));
        }
        if !self.viewfinder_open {
            return self.fail(WorkflowError::CameraUnavailable(
                "viewfinder is closed".into(),
            ));
        }
        self.phase = Phase::Capturing;
        self.pending = Some(Stage::Picture);
        Effect::TakePicture
    }

    fn finish_submission(&mut self, outcome: Result<RecognitionResult, WorkflowError>) -> Effect {
        self.viewfinder_open = false;
        match outcome {
            Ok(result) => {
                self.pending = None;
                self.phase = Phase::Succeeded;
                self.result = Some(result.clone());
                Effect::Notify(Notice::Recognized(result))
            }
            Err(err) => {
                self.result = None;
                self.fail(err)
            }
        }
    }

    fn awaits(&self, stage: Stage) -> bool {
        self.pending == Some(stage)
    }

    fn fail(&mut self, err: WorkflowError) -> Effect {
        self.pending = None;
        self.phase = Phase::Failed(err.clone());
        Effect::Notify(Notice::Failed(err))
    }
}
