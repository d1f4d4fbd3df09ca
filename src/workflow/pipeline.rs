// SPDX-License-Identifier: MPL-2.0
//! Async stage runners.
//!
//! Each stage is a future that resolves to the message the workflow expects
//! next. Blocking ports run on the tokio blocking pool so the UI thread never
//! waits on the camera, the codec or the filesystem.

use super::contract;
use super::error::{SubmissionContext, WorkflowError};
use super::{Effect, Message};
use crate::application::port::{Camera, FileReader, ImageProcessor, RecognitionService};
use crate::domain::capture::{CapturedImage, PermissionState, TransformPolicy};
use crate::domain::recognition::{RecognitionRequest, RecognitionResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::sync::Arc;

/// Collaborators the workflow consumes.
#[derive(Clone)]
pub struct Services {
    pub camera: Arc<dyn Camera>,
    pub processor: Arc<dyn ImageProcessor>,
    pub reader: Arc<dyn FileReader>,
    pub recognizer: Arc<dyn RecognitionService>,
    pub policy: TransformPolicy,
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("endpoint", &self.recognizer.endpoint())
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl Services {
    /// Returns the stage future for an effect, or `None` when the effect
    /// needs no asynchronous work.
    #[must_use]
    pub fn run(&self, effect: &Effect) -> Option<BoxFuture<'static, Message>> {
        match effect {
            Effect::RequestPermission => Some(
                request_permission(Arc::clone(&self.camera))
                    .map(Message::PermissionResolved)
                    .boxed(),
            ),
            Effect::TakePicture => Some(
                capture_frame(Arc::clone(&self.camera))
                    .map(Message::FrameCaptured)
                    .boxed(),
            ),
            Effect::Transform(frame) => Some(
                transform_frame(Arc::clone(&self.processor), frame.clone(), self.policy)
                    .map(Message::FrameTransformed)
                    .boxed(),
            ),
            Effect::Encode(image) => Some(
                encode_image(Arc::clone(&self.reader), image.clone())
                    .map(Message::ImageEncoded)
                    .boxed(),
            ),
            Effect::Submit(request) => Some(
                submit(Arc::clone(&self.recognizer), request.clone())
                    .map(Message::RecognitionCompleted)
                    .boxed(),
            ),
            Effect::None | Effect::Notify(_) | Effect::Rejected(_) => None,
        }
    }
}

/// Asks the camera for access. A crashed request counts as unknown.
pub async fn request_permission(camera: Arc<dyn Camera>) -> PermissionState {
    tokio::task::spawn_blocking(move || camera.request_permission())
        .await
        .unwrap_or(PermissionState::Unknown)
}

pub async fn capture_frame(camera: Arc<dyn Camera>) -> Result<CapturedImage, WorkflowError> {
    tokio::task::spawn_blocking(move || camera.take_picture())
        .await
        .map_err(|e| WorkflowError::CameraUnavailable(e.to_string()))?
        .map_err(|e| WorkflowError::CameraUnavailable(e.to_string()))
}

pub async fn transform_frame(
    processor: Arc<dyn ImageProcessor>,
    frame: CapturedImage,
    policy: TransformPolicy,
) -> Result<CapturedImage, WorkflowError> {
    tokio::task::spawn_blocking(move || processor.manipulate(&frame, &policy))
        .await
        .map_err(|e| WorkflowError::ImageProcessing(e.to_string()))?
        .map_err(|e| WorkflowError::ImageProcessing(e.to_string()))
}

/// Reads the whole image into memory and base64-encodes it.
pub async fn encode_image(
    reader: Arc<dyn FileReader>,
    image: CapturedImage,
) -> Result<RecognitionRequest, WorkflowError> {
    let bytes = tokio::task::spawn_blocking(move || {
        reader
            .read(&image)
            .map_err(|e| format!("{}: {e}", image.file_name()))
    })
    .await
    .map_err(|e| WorkflowError::Encoding(e.to_string()))?
    .map_err(WorkflowError::Encoding)?;

    if bytes.is_empty() {
        return Err(WorkflowError::Encoding("image file is empty".into()));
    }
    Ok(RecognitionRequest::new(STANDARD.encode(bytes)))
}

/// Posts the request and applies the payload contract to the response.
pub async fn submit(
    service: Arc<dyn RecognitionService>,
    request: RecognitionRequest,
) -> Result<RecognitionResult, WorkflowError> {
    let mut context = SubmissionContext {
        endpoint: service.endpoint().to_string(),
        payload_bytes: request.payload_bytes(),
        status: None,
    };

    let response = match service.submit(request).await {
        Ok(response) => response,
        Err(error) => return Err(WorkflowError::Transport { context, error }),
    };

    context.status = Some(response.status);
    contract::interpret(response.status, &response.body)
        .map_err(|reason| WorkflowError::NoValidData { context, reason })
}
