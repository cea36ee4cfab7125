use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::tts::{voice::DEFAULT_LANGUAGE, TtsService, TtsServiceApi};
use crate::error::AppError;

pub const SERVICE_NAME: &str = "Script2Sound API";

/// GET / - Service banner
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": format!("{} is running", SERVICE_NAME),
        "version": env!("CARGO_PKG_VERSION"),
        "status": "healthy"
    }))
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// GET /health/ready - Verifies the synthesis engine answers a voice listing
pub async fn health_ready(State(tts_service): State<Arc<TtsService>>) -> impl IntoResponse {
    match tts_service.list_voices(DEFAULT_LANGUAGE).await {
        Ok(voices) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "tts_service": "connected",
                "available_voices": voices.len()
            })),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not_ready",
                    "tts_service": "unavailable"
                })),
            )
        }
    }
}

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::NotFound("Endpoint not found".to_string())
}
