use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{health, tts::TtsController};
use crate::domain::tts::TtsService;
use crate::infrastructure::config::Config;
use crate::infrastructure::middleware::{request_id_middleware, X_REQUEST_ID};

/// Build the application router with all routes and layers
pub fn create_router(
    tts_service: Arc<TtsService>,
    tts_controller: Arc<TtsController>,
    allowed_origins: &[String],
) -> Router {
    let health_routes = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(tts_service);

    let tts_routes = Router::new()
        .route("/generate-audio", post(TtsController::generate_audio))
        .route("/voices", get(TtsController::list_voices))
        .route("/validate-text", post(TtsController::validate_text))
        .with_state(tts_controller);

    Router::new()
        .merge(health_routes)
        .merge(tts_routes)
        .fallback(health::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(allowed_origins))
                .layer(middleware::from_fn(request_id_middleware)),
        )
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([
            header::CONTENT_DISPOSITION,
            header::HeaderName::from_static(X_REQUEST_ID),
            header::HeaderName::from_static("x-character-count"),
            header::HeaderName::from_static("x-chunk-count"),
        ])
        .allow_credentials(true)
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(config: Arc<Config>, app: Router) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
