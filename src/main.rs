use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voice_synth::controllers::voice::VoiceController;
use voice_synth::domain::voice::VoiceService;
use voice_synth::infrastructure::config::{Config, LogFormat, RuntimeMode};
use voice_synth::infrastructure::http::start_http_server;
use voice_synth::infrastructure::lambda::start_lambda_runtime;
use voice_synth::infrastructure::repositories::{PollySpeechRepository, S3AudioStorageRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        runtime_mode = ?config.runtime_mode,
        audio_bucket = %config.audio_bucket,
        region = ?config.region,
        "Starting voice synthesis function"
    );

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.aws_region.clone()))
        .load()
        .await;

    tracing::info!(
        region = ?aws_config.region(),
        "AWS configuration loaded"
    );

    let polly_client = Arc::new(aws_sdk_polly::Client::new(&aws_config));
    let s3_client = Arc::new(aws_sdk_s3::Client::new(&aws_config));
    let config = Arc::new(config);

    // Repositories -> service -> controller
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

    let runtime_mode = config.runtime_mode;
    match runtime_mode {
        RuntimeMode::Lambda => start_lambda_runtime(voice_controller)
            .await
            .map_err(|e| e as Box<dyn std::error::Error>)?,
        RuntimeMode::Http => start_http_server(config, voice_controller).await?,
    }

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voice_synth=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voice_synth=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
