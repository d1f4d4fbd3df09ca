// SPDX-License-Identifier: MPL-2.0
//! End-to-end capture attempts through the real camera, manipulator and
//! file reader, with a canned recognition service standing in for the network.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use nutrascan::app::config::{self, Config, GeneralConfig};
use nutrascan::app::i18n::fluent::I18n;
use nutrascan::application::port::{RawResponse, RecognitionService, TransportError};
use nutrascan::domain::capture::{PermissionState, TransformPolicy};
use nutrascan::domain::recognition::RecognitionRequest;
use nutrascan::infrastructure::{FileCamera, FsFileReader, ImageManipulator};
use nutrascan::workflow::pipeline::Services;
use nutrascan::workflow::presenter::{present, Body, Presentation, Viewfinder};
use nutrascan::workflow::{
    Effect, Message, NoDataReason, Notice, Workflow, WorkflowError, WorkflowStatus,
};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::{tempdir, TempDir};

struct CannedService {
    status: u16,
    body: &'static str,
    seen: Mutex<Vec<RecognitionRequest>>,
}

impl CannedService {
    fn new(status: u16, body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body,
            seen: Mutex::new(Vec::new()),
        })
    }
}

impl RecognitionService for CannedService {
    fn endpoint(&self) -> &str {
        "http://127.0.0.1:5000/api/capture"
    }

    fn submit(
        &self,
        request: RecognitionRequest,
    ) -> BoxFuture<'static, Result<RawResponse, TransportError>> {
        self.seen.lock().expect("lock").push(request);
        let response = RawResponse {
            status: self.status,
            body: self.body.as_bytes().to_vec(),
        };
        async move { Ok(response) }.boxed()
    }
}

struct Fixture {
    _frames: TempDir,
    _captures: TempDir,
    services: Services,
}

fn write_frame(dir: &Path) {
    let image = image_rs::RgbImage::from_fn(320, 240, |x, y| {
        image_rs::Rgb([(x % 256) as u8, (y % 256) as u8, 120])
    });
    image.save(dir.join("meal.png")).expect("write frame");
}

fn fixture(recognizer: Arc<CannedService>, with_frame: bool) -> Fixture {
    let frames = tempdir().expect("frames dir");
    let captures = tempdir().expect("captures dir");
    if with_frame {
        write_frame(frames.path());
    }
    let services = Services {
        camera: Arc::new(FileCamera::with_capture_dir(frames.path(), captures.path())),
        processor: Arc::new(ImageManipulator),
        reader: Arc::new(FsFileReader),
        recognizer,
        policy: TransformPolicy::CAPTURE,
    };
    Fixture {
        _frames: frames,
        _captures: captures,
        services,
    }
}

/// Feeds `message` and every follow-up stage message until the workflow
/// asks for nothing more to run.
async fn drive(workflow: &mut Workflow, services: &Services, message: Message) -> Effect {
    let mut effect = workflow.update(message);
    while let Some(stage) = services.run(&effect) {
        let next = stage.await;
        effect = workflow.update(next);
    }
    effect
}

async fn open_viewfinder(workflow: &mut Workflow, services: &Services) {
    drive(workflow, services, Message::Start).await;
    assert_eq!(workflow.permission(), PermissionState::Granted);
    workflow.update(Message::ToggleViewfinder);
}

#[tokio::test]
async fn capture_is_shrunk_encoded_and_recognized() {
    let service = CannedService::new(
        200,
        r#"{"food_name":"Apple","nutrition_info":[{"name":"Calories","value":95},{"name":"Protein","value":"0.5g"}]}"#,
    );
    let fixture = fixture(Arc::clone(&service), true);
    let mut workflow = Workflow::new();
    open_viewfinder(&mut workflow, &fixture.services).await;

    let effect = drive(&mut workflow, &fixture.services, Message::Capture).await;

    let Effect::Notify(Notice::Recognized(result)) = effect else {
        panic!("expected a recognized result, got {effect:?}");
    };
    assert_eq!(result.food_name(), "Apple");
    assert_eq!(result.nutrition_info().len(), 2);
    assert_eq!(workflow.status(), WorkflowStatus::Succeeded);
    assert!(!workflow.viewfinder_open());

    let image = workflow.image().expect("transformed image").clone();
    assert!(image.file_name().ends_with("-224x224.jpg"));
    let decoded = image_rs::open(image.path()).expect("jpeg decodes");
    assert_eq!((decoded.width(), decoded.height()), (224, 224));

    let seen = service.seen.lock().expect("lock");
    assert_eq!(seen.len(), 1);
    let sent = STANDARD
        .decode(seen[0].image_base64())
        .expect("standard base64");
    assert_eq!(sent, std::fs::read(image.path()).expect("read image"));

    match present(&workflow) {
        Presentation::Main(view) => {
            assert_eq!(view.viewfinder, Viewfinder::Closed);
            assert!(matches!(view.body, Body::Result { .. }));
        }
        other => panic!("expected main view, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_ends_in_no_valid_data() {
    let service = CannedService::new(500, r#"{"error":"model offline"}"#);
    let fixture = fixture(service, true);
    let mut workflow = Workflow::new();
    open_viewfinder(&mut workflow, &fixture.services).await;

    let effect = drive(&mut workflow, &fixture.services, Message::Capture).await;

    match effect {
        Effect::Notify(Notice::Failed(WorkflowError::NoValidData { context, reason })) => {
            assert_eq!(reason, NoDataReason::UnexpectedStatus(500));
            assert_eq!(context.status, Some(500));
            assert!(context.payload_bytes > 0);
        }
        other => panic!("expected NoValidData, got {other:?}"),
    }
    assert!(workflow.result().is_none());
    assert!(matches!(
        present(&workflow),
        Presentation::Main(view) if matches!(view.body, Body::Error { .. })
    ));
}

#[tokio::test]
async fn missing_frames_deny_permission() {
    let fixture = fixture(CannedService::new(200, "{}"), false);
    let mut workflow = Workflow::new();

    let effect = drive(&mut workflow, &fixture.services, Message::Start).await;

    assert_eq!(
        effect,
        Effect::Notify(Notice::Failed(WorkflowError::PermissionDenied))
    );
    assert_eq!(present(&workflow), Presentation::Denied);
    assert_eq!(
        workflow.update(Message::Capture),
        Effect::Notify(Notice::Failed(WorkflowError::CameraUnavailable(
            "camera permission not granted".into()
        )))
    );
}

#[test]
fn language_follows_saved_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    config::save_to_path(&french, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("button-capture"), "Capturer");

    // CLI wins over the file
    let english = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(english.tr("button-capture"), "Capture");
}

#[test]
fn services_follow_config_overrides() {
    let mut config = Config::default();
    config.recognition.base_url = "http://192.168.1.20:8080/".to_string();
    config.recognition.bypass_header = Some(config::BypassHeaderConfig {
        name: "bad header".to_string(),
        value: "true".to_string(),
    });

    let (services, warnings) =
        nutrascan::app::services_from_config(&config).expect("services");
    assert_eq!(
        services.recognizer.endpoint(),
        "http://192.168.1.20:8080/api/capture"
    );
    assert_eq!(warnings, vec!["notification-config-invalid-header".to_string()]);
}
