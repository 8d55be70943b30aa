use super::speech_repository::{
    SpeechInput, SpeechRepository, SpeechRepositoryError, SynthesizedSpeech,
};
use async_trait::async_trait;
use aws_sdk_polly::{
    types::{Engine, LanguageCode, OutputFormat, TextType, VoiceId},
    Client as PollyClient,
};
use std::sync::Arc;

/// AWS Polly implementation of the speech repository
pub struct PollySpeechRepository {
    polly_client: Arc<PollyClient>,
}

impl PollySpeechRepository {
    pub fn new(polly_client: Arc<PollyClient>) -> Self {
        Self { polly_client }
    }
}

#[async_trait]
impl SpeechRepository for PollySpeechRepository {
    async fn synthesize(&self, input: &SpeechInput) -> Result<SynthesizedSpeech, SpeechRepositoryError> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            language_code = %input.language_code,
            voice_id = %input.voice_id,
            engine = %input.engine,
            output_format = "Mp3",
            ssml_length = input.ssml.len(),
            "Calling AWS Polly synthesize_speech"
        );

        let result = self
            .polly_client
            .synthesize_speech()
            .output_format(OutputFormat::Mp3)
            .text(&input.ssml)
            .text_type(TextType::Ssml)
            .language_code(LanguageCode::from(input.language_code.as_str()))
            .voice_id(VoiceId::from(input.voice_id.as_str()))
            .engine(Engine::from(input.engine.as_str()))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    error_display = %e,
                    language_code = %input.language_code,
                    voice_id = %input.voice_id,
                    engine = %input.engine,
                    "AWS Polly synthesize_speech failed"
                );
                SpeechRepositoryError::Provider(format!("{:?}", e))
            })?;

        let request_characters = result.request_characters();

        let audio_stream = result.audio_stream.collect().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to collect audio stream from Polly response");
            SpeechRepositoryError::AudioStream(e.to_string())
        })?;
        let audio = audio_stream.into_bytes().to_vec();

        tracing::info!(
            provider = "polly",
            latency_ms = start_time.elapsed().as_millis(),
            request_characters,
            audio_size_bytes = audio.len(),
            "TTS synthesis completed"
        );

        Ok(SynthesizedSpeech {
            audio,
            request_characters,
        })
    }

    async fn start_synthesis_task(
        &self,
        input: &SpeechInput,
        output_bucket: &str,
    ) -> Result<String, SpeechRepositoryError> {
        tracing::info!(
            language_code = %input.language_code,
            voice_id = %input.voice_id,
            engine = %input.engine,
            output_bucket,
            ssml_length = input.ssml.len(),
            "Calling AWS Polly start_speech_synthesis_task"
        );

        let result = self
            .polly_client
            .start_speech_synthesis_task()
            .output_s3_bucket_name(output_bucket)
            .output_format(OutputFormat::Mp3)
            .text(&input.ssml)
            .text_type(TextType::Ssml)
            .language_code(LanguageCode::from(input.language_code.as_str()))
            .voice_id(VoiceId::from(input.voice_id.as_str()))
            .engine(Engine::from(input.engine.as_str()))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    error_display = %e,
                    output_bucket,
                    "AWS Polly start_speech_synthesis_task failed"
                );
                SpeechRepositoryError::Provider(format!("{:?}", e))
            })?;

        let task_id = result
            .synthesis_task()
            .and_then(|task| task.task_id())
            .filter(|id| !id.is_empty())
            .ok_or(SpeechRepositoryError::MissingField("SynthesisTask.TaskId"))?;

        tracing::info!(task_id, "Speech synthesis task submitted");

        Ok(task_id.to_string())
    }
}
