use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;
use tracing::Instrument;

use crate::controllers::voice::VoiceController;
use crate::domain::voice::VoiceResponse;

/// Serve invocations from the Lambda runtime API until the sandbox shuts down
pub async fn start_lambda_runtime(voice_controller: Arc<VoiceController>) -> Result<(), Error> {
    tracing::info!("Starting Lambda runtime");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let controller = voice_controller.clone();
        async move { handle_invocation(&controller, event).await }
    }))
    .await
}

/// A rejected event surfaces as a function error, the Lambda counterpart of a 500
pub async fn handle_invocation(
    controller: &VoiceController,
    event: LambdaEvent<Value>,
) -> Result<VoiceResponse, Error> {
    let (payload, context) = event.into_parts();
    let span = tracing::info_span!("invocation", request_id = %context.request_id);

    let response = controller.handle_event(payload).instrument(span).await?;
    Ok(response)
}
