use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    domain::voice::{VoiceRequest, VoiceResponse, VoiceServiceApi},
    error::{AppError, AppResult},
};

pub struct VoiceController {
    voice_service: Arc<dyn VoiceServiceApi>,
}

impl VoiceController {
    pub fn new(voice_service: Arc<dyn VoiceServiceApi>) -> Self {
        Self { voice_service }
    }

    /// Handle one raw invocation event, whatever transport delivered it
    pub async fn handle_event(&self, event: Value) -> AppResult<VoiceResponse> {
        let request: VoiceRequest = serde_json::from_value(event)
            .map_err(|e| AppError::InvalidRequest(e.to_string()))?;

        let outcome = self.voice_service.create_voice(request).await;
        tracing::info!(outcome = ?outcome, "Voice request handled");

        Ok(outcome.into())
    }

    /// POST /api/voice - Convert text to a published audio file or task
    ///
    /// The body is read as JSON whatever its declared content type.
    pub async fn synthesize(
        State(controller): State<Arc<VoiceController>>,
        body: Bytes,
    ) -> AppResult<Json<VoiceResponse>> {
        let event: Value = serde_json::from_slice(&body)
            .map_err(|e| AppError::InvalidRequest(e.to_string()))?;

        let response = controller.handle_event(event).await?;
        Ok(Json(response))
    }
}
