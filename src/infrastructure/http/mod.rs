use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, voice::VoiceController};
use crate::infrastructure::config::Config;
use crate::infrastructure::request_id::request_id_middleware;

/// Build the application routes
pub fn create_router(voice_controller: Arc<VoiceController>) -> Router {
    let voice_routes = Router::new()
        .route("/api/voice", axum::routing::post(VoiceController::synthesize))
        .with_state(voice_controller);

    Router::new()
        .route("/health", get(health::health))
        .merge(voice_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    voice_controller: Arc<VoiceController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(voice_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
