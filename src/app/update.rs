// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Workflow events go through [`Workflow::update`]; the returned effect is
//! either reported to the user (toasts, diagnostics) or run as a stage task
//! whose result comes back as the next workflow message.

use super::i18n::fluent::I18n;
use super::Message;
use crate::diagnostics::{
    AppStateEvent, DiagnosticsCollector, ErrorEvent, PipelineStage, UserAction,
};
use crate::domain::recognition::RecognitionResult;
use crate::ui::notifications::{self, Toast, ToastStack};
use crate::ui::widgets::Rotation;
use crate::workflow::pipeline::Services;
use crate::workflow::{self, Effect, Notice, Rejection, Workflow, WorkflowError};
use iced::Task;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Mutable view of the application state used by the update handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub workflow: &'a mut Workflow,
    pub services: &'a Services,
    pub notifications: &'a mut ToastStack,
    pub diagnostics: &'a mut DiagnosticsCollector,
    pub diagnostics_out: Option<&'a Path>,
    pub preview: &'a mut Option<PathBuf>,
    pub spinner_rotation: &'a mut Rotation,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Workflow(message) => {
            let effect = advance(ctx, message);
            run_stage(ctx, &effect)
        }
        Message::Notification(notifications::Message::Dismiss(id)) => {
            ctx.diagnostics.log_action(UserAction::DismissNotification);
            ctx.notifications.dismiss(id, Instant::now());
            Task::none()
        }
        Message::Tick(now) => {
            ctx.diagnostics.process_pending();
            ctx.notifications.expire(now);
            if ctx.workflow.is_busy() {
                *ctx.spinner_rotation = ctx.spinner_rotation.advanced();
            }
            Task::none()
        }
    }
}

/// Feeds one event to the workflow and reports anything the user must see.
///
/// Returns the effect so stage effects can be turned into tasks.
fn advance(ctx: &mut UpdateContext<'_>, message: workflow::Message) -> Effect {
    log_user_action(ctx, &message);

    let permission_before = ctx.workflow.permission();
    let effect = ctx.workflow.update(message);
    let permission = ctx.workflow.permission();
    if !permission_before.is_resolved() && permission.is_resolved() {
        ctx.diagnostics.log_state(AppStateEvent::PermissionResolved {
            granted: permission.is_granted(),
        });
    }

    *ctx.preview = if ctx.workflow.viewfinder_open() {
        ctx.services.camera.preview()
    } else {
        None
    };

    match &effect {
        Effect::Notify(Notice::Recognized(result)) => announce_result(ctx, result),
        Effect::Notify(Notice::Failed(err)) => report_failure(ctx, err),
        Effect::Rejected(Rejection::Busy) => {
            ctx.diagnostics.log_state(AppStateEvent::CaptureRejected {
                reason: "submission in flight".to_string(),
            });
            ctx.diagnostics
                .log_warning("capture ignored: previous attempt still running");
            ctx.notifications.push(Toast::busy(), Instant::now());
        }
        _ => {}
    }
    effect
}

fn log_user_action(ctx: &mut UpdateContext<'_>, message: &workflow::Message) {
    let action = match message {
        workflow::Message::ToggleViewfinder if ctx.workflow.viewfinder_open() => {
            UserAction::CloseViewfinder
        }
        workflow::Message::ToggleViewfinder => UserAction::OpenViewfinder,
        workflow::Message::Capture => UserAction::Capture,
        _ => return,
    };
    ctx.diagnostics.log_action(action);
}

/// Runs the stage an effect names, timing it through the diagnostics handle.
fn run_stage(ctx: &mut UpdateContext<'_>, effect: &Effect) -> Task<Message> {
    let (Some(stage), Some(future)) = (PipelineStage::from_effect(effect), ctx.services.run(effect))
    else {
        return Task::none();
    };

    ctx.diagnostics.log_stage_started(stage);
    let handle = ctx.diagnostics.handle();
    let started = Instant::now();

    Task::perform(
        async move {
            let next = future.await;
            handle.log_stage_completed(stage, started.elapsed());
            next
        },
        Message::Workflow,
    )
}

fn announce_result(ctx: &mut UpdateContext<'_>, result: &RecognitionResult) {
    ctx.diagnostics.log_state(AppStateEvent::Recognized {
        food_name: result.food_name().to_string(),
        nutrient_count: result.nutrition_info().len(),
    });
    let now = Instant::now();
    ctx.notifications.clear_failures(now);
    ctx.notifications.push(
        Toast::recognized(result.food_name(), summarize_nutrients(ctx.i18n, result)),
        now,
    );
}

fn report_failure(ctx: &mut UpdateContext<'_>, err: &WorkflowError) {
    ctx.diagnostics.log_error(ErrorEvent::from(err));
    ctx.notifications.push(Toast::failure(err), Instant::now());

    if let Some(path) = ctx.diagnostics_out {
        ctx.diagnostics.process_pending();
        if let Err(export_err) = ctx.diagnostics.export_to_file(path) {
            eprintln!("[WARN] Failed to write diagnostics report: {export_err}");
        }
    }
}

/// Joins the nutrition entries into one line, in response order.
pub fn summarize_nutrients(i18n: &I18n, result: &RecognitionResult) -> String {
    result
        .nutrition_info()
        .iter()
        .map(|entry| {
            let value = entry.value.to_string();
            i18n.tr_with_args(
                "nutrient-line",
                &[("name", entry.name.as_str()), ("value", value.as_str())],
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::application::port::{
        Camera, CameraError, FileReader, ImageProcessingError, ImageProcessor, RawResponse,
        RecognitionService, TransportError,
    };
    use crate::diagnostics::DiagnosticEventKind;
    use crate::domain::capture::{CapturedImage, PermissionState, TransformPolicy};
    use crate::domain::recognition::{NutrientValue, NutritionEntry, RecognitionRequest};
    use crate::ui::notifications::Severity;
    use futures_util::future::BoxFuture;
    use futures_util::FutureExt;
    use std::sync::Arc;
    use std::time::Duration;
    use tempfile::tempdir;

    struct FixedCamera;

    impl Camera for FixedCamera {
        fn request_permission(&self) -> PermissionState {
            PermissionState::Granted
        }

        fn take_picture(&self) -> Result<CapturedImage, CameraError> {
            Ok(CapturedImage::new("/frames/a.png"))
        }

        fn preview(&self) -> Option<PathBuf> {
            Some(PathBuf::from("/frames/a.png"))
        }
    }

    struct Unused;

    impl ImageProcessor for Unused {
        fn manipulate(
            &self,
            source: &CapturedImage,
            _policy: &TransformPolicy,
        ) -> Result<CapturedImage, ImageProcessingError> {
            Ok(source.clone())
        }
    }

    impl FileReader for Unused {
        fn read(&self, _image: &CapturedImage) -> std::io::Result<Vec<u8>> {
            Ok(b"ABC".to_vec())
        }
    }

    impl RecognitionService for Unused {
        fn endpoint(&self) -> &str {
            "http://test/api/capture"
        }

        fn submit(
            &self,
            _request: RecognitionRequest,
        ) -> BoxFuture<'static, Result<RawResponse, TransportError>> {
            async { Err(TransportError::Timeout) }.boxed()
        }
    }

    struct Harness {
        i18n: I18n,
        workflow: Workflow,
        services: Services,
        notifications: ToastStack,
        diagnostics: DiagnosticsCollector,
        diagnostics_out: Option<PathBuf>,
        preview: Option<PathBuf>,
        spinner_rotation: Rotation,
    }

    impl Harness {
        fn new() -> Self {
            let config = Config {
                general: crate::app::config::GeneralConfig {
                    language: Some("en-US".into()),
                    ..Default::default()
                },
                ..Default::default()
            };
            Self {
                i18n: I18n::new(None, &config),
                workflow: Workflow::new(),
                services: Services {
                    camera: Arc::new(FixedCamera),
                    processor: Arc::new(Unused),
                    reader: Arc::new(Unused),
                    recognizer: Arc::new(Unused),
                    policy: TransformPolicy::CAPTURE,
                },
                notifications: ToastStack::default(),
                diagnostics: DiagnosticsCollector::default(),
                diagnostics_out: None,
                preview: None,
                spinner_rotation: Rotation::default(),
            }
        }

        fn advance(&mut self, message: workflow::Message) -> Effect {
            let mut ctx = UpdateContext {
                i18n: &self.i18n,
                workflow: &mut self.workflow,
                services: &self.services,
                notifications: &mut self.notifications,
                diagnostics: &mut self.diagnostics,
                diagnostics_out: self.diagnostics_out.as_deref(),
                preview: &mut self.preview,
                spinner_rotation: &mut self.spinner_rotation,
            };
            advance(&mut ctx, message)
        }

        fn send(&mut self, message: Message) {
            let mut ctx = UpdateContext {
                i18n: &self.i18n,
                workflow: &mut self.workflow,
                services: &self.services,
                notifications: &mut self.notifications,
                diagnostics: &mut self.diagnostics,
                diagnostics_out: self.diagnostics_out.as_deref(),
                preview: &mut self.preview,
                spinner_rotation: &mut self.spinner_rotation,
            };
            let _task = update(&mut ctx, message);
        }

        fn open_viewfinder(&mut self) {
            self.advance(workflow::Message::Start);
            self.advance(workflow::Message::PermissionResolved(
                PermissionState::Granted,
            ));
            self.advance(workflow::Message::ToggleViewfinder);
        }

        fn submitting(&mut self) {
            self.open_viewfinder();
            self.advance(workflow::Message::Capture);
            self.advance(workflow::Message::FrameCaptured(Ok(CapturedImage::new(
                "/tmp/a.png",
            ))));
            self.advance(workflow::Message::FrameTransformed(Ok(CapturedImage::new(
                "/tmp/a-224x224.jpg",
            ))));
        }
    }

    fn apple() -> RecognitionResult {
        RecognitionResult::new(
            "Apple",
            vec![
                NutritionEntry::new("Calories", NutrientValue::Number(95.0)),
                NutritionEntry::new("Protein", NutrientValue::Text("0.5g".into())),
            ],
        )
        .expect("valid result")
    }

    #[test]
    fn nutrients_are_summarized_in_order() {
        let harness = Harness::new();
        assert_eq!(
            summarize_nutrients(&harness.i18n, &apple()),
            "Calories: 95, Protein: 0.5g"
        );
    }

    #[test]
    fn opening_viewfinder_logs_action_and_loads_preview() {
        let mut harness = Harness::new();
        harness.open_viewfinder();

        assert_eq!(harness.preview, Some(PathBuf::from("/frames/a.png")));
        assert!(harness.diagnostics.iter().any(|e| matches!(
            e.kind,
            DiagnosticEventKind::UserAction {
                action: UserAction::OpenViewfinder,
                ..
            }
        )));
        assert!(harness.diagnostics.iter().any(|e| matches!(
            e.kind,
            DiagnosticEventKind::AppState {
                state: AppStateEvent::PermissionResolved { granted: true }
            }
        )));
    }

    #[test]
    fn busy_capture_raises_info_toast_and_warning() {
        let mut harness = Harness::new();
        harness.submitting();

        let effect = harness.advance(workflow::Message::Capture);
        assert_eq!(effect, Effect::Rejected(Rejection::Busy));
        let toast = harness.notifications.shown().next().expect("toast").toast();
        assert_eq!(toast.severity(), Severity::Info);
        assert_eq!(toast.key(), "notification-busy");
        assert!(harness
            .diagnostics
            .iter()
            .any(|e| matches!(e.kind, DiagnosticEventKind::Warning { .. })));
    }

    #[test]
    fn success_clears_error_toasts_and_announces_food() {
        let mut harness = Harness::new();
        harness.notifications.push(
            Toast::failure(&WorkflowError::Encoding("gone".into())),
            Instant::now(),
        );
        harness.submitting();
        harness.advance(workflow::Message::ImageEncoded(Ok(RecognitionRequest::new(
            "QUJD".into(),
        ))));

        harness.advance(workflow::Message::RecognitionCompleted(Ok(apple())));

        assert_eq!(harness.preview, None);
        let toasts: Vec<_> = harness.notifications.shown().map(|s| s.toast()).collect();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].key(), "notification-recognized");
        assert_eq!(toasts[0].args()[1].1, "Calories: 95, Protein: 0.5g");
    }

    #[test]
    fn failure_logs_error_and_exports_report() {
        let dir = tempdir().expect("temp dir");
        let report = dir.path().join("report.json");
        let mut harness = Harness::new();
        harness.diagnostics_out = Some(report.clone());
        harness.submitting();

        harness.advance(workflow::Message::ImageEncoded(Err(WorkflowError::Encoding(
            "image file is empty".into(),
        ))));

        let toast = harness.notifications.shown().next().expect("toast").toast();
        assert_eq!(toast.severity(), Severity::Error);
        assert_eq!(toast.key(), "notification-recognition-failed");
        let content = std::fs::read_to_string(report).expect("report written");
        assert!(content.contains("EncodingError"));
    }

    #[test]
    fn tick_expires_toasts_and_spins_only_while_busy() {
        let mut harness = Harness::new();
        let t0 = Instant::now();
        harness.notifications.push(Toast::busy(), t0);

        harness.send(Message::Tick(t0 + Duration::from_secs(4)));
        assert!(harness.notifications.is_empty());
        assert_eq!(harness.spinner_rotation, Rotation::default());

        harness.submitting();
        harness.send(Message::Tick(t0));
        assert_eq!(harness.spinner_rotation, Rotation::default().advanced());
    }

    #[test]
    fn dismissing_a_toast_logs_the_action() {
        let mut harness = Harness::new();
        let id = harness.notifications.push(
            Toast::failure(&WorkflowError::PermissionDenied),
            Instant::now(),
        );

        harness.send(Message::Notification(notifications::Message::Dismiss(id)));

        assert!(harness.notifications.is_empty());
        assert!(harness.diagnostics.iter().any(|e| matches!(
            e.kind,
            DiagnosticEventKind::UserAction {
                action: UserAction::DismissNotification,
                ..
            }
        )));
    }

    #[test]
    fn denied_permission_raises_permission_toast() {
        let mut harness = Harness::new();
        harness.advance(workflow::Message::Start);
        harness.advance(workflow::Message::PermissionResolved(
            PermissionState::Denied,
        ));

        let toast = harness.notifications.shown().next().expect("toast").toast();
        assert_eq!(toast.key(), "notification-camera-permission");
        assert_eq!(harness.preview, None);
    }
}
