use anyhow::Result;
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use voice_synth::infrastructure::config::{Config, LogFormat, RuntimeMode};

pub mod assertions;
pub mod aws_mocks;

use api_client::TestClient;

pub struct TestContext {
    pub client: TestClient,
    #[allow(dead_code)]
    pub config: Config,
    pub audio_dir: TempDir,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let audio_dir = tempfile::tempdir().expect("Failed to create audio temp dir");

            let config = Config {
                audio_bucket: "test-audio-bucket".to_string(),
                region: Some("eu-west-1".to_string()),
                aws_region: "us-east-1".to_string(),
                host: "127.0.0.1".to_string(),
                port: 0, // Will be assigned by the OS
                log_format: LogFormat::Pretty,
                temp_dir: audio_dir.path().to_path_buf(),
                runtime_mode: RuntimeMode::Http,
            };

            let app = create_app_with_mocked_aws(&config).expect("Failed to create app");

            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            // Wait for server to be ready
            tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

            Self {
                client: TestClient::new(&base_url),
                config,
                audio_dir,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Temp directory is removed via Drop on TempDir
        }
    }
}

fn create_app_with_mocked_aws(config: &Config) -> Result<Router> {
    use voice_synth::{
        controllers::voice::VoiceController,
        domain::voice::VoiceService,
        infrastructure::{
            http::create_router,
            repositories::{PollySpeechRepository, S3AudioStorageRepository},
        },
    };

    let polly_client = Arc::new(aws_mocks::create_mock_polly_client());
    let s3_client = Arc::new(aws_mocks::create_mock_s3_client());

    let speech_repo = Arc::new(PollySpeechRepository::new(polly_client));
    let storage_repo = Arc::new(S3AudioStorageRepository::new(
        s3_client,
        config.audio_bucket.clone(),
        config.region.clone(),
    ));
    let voice_service = Arc::new(VoiceService::new(
        speech_repo,
        storage_repo,
        config.audio_bucket.clone(),
        config.temp_dir.clone(),
    ));
    let voice_controller = Arc::new(VoiceController::new(voice_service));

    Ok(create_router(voice_controller))
}

/// A complete, valid invocation event
pub fn voice_event(content: &str, engine: &str) -> Value {
    json!({
        "pitch": 0,
        "speakingRate": 100,
        "volumeGainDb": 0,
        "voiceId": "Joanna",
        "langCode": "en-US",
        "engine": engine,
        "content": content,
        "contentType": "text"
    })
}
