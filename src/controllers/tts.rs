use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Extension, Json,
};
use std::sync::Arc;

use crate::{
    domain::tts::{
        dto::{GenerateAudioRequest, TextValidation, ValidateTextRequest, VoicesQuery},
        model::VoiceDescriptor,
        validate_voice,
        voice::DEFAULT_LANGUAGE,
        TtsService, TtsServiceApi,
    },
    error::{AppError, AppResult},
    infrastructure::middleware::RequestId,
};

const AUDIO_FILENAME: &str = "generated_audio.mp3";

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /generate-audio - Convert text to a single MP3
    pub async fn generate_audio(
        State(controller): State<Arc<TtsController>>,
        Extension(request_id): Extension<RequestId>,
        Json(request): Json<GenerateAudioRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        tracing::info!(
            request_id = %request_id.0,
            text_length = request.text.chars().count(),
            "Audio generation requested"
        );

        // Advisory only, synthesis goes ahead either way
        if !validate_voice(&request.voice_name) {
            tracing::warn!(
                request_id = %request_id.0,
                voice = %request.voice_name,
                "Voice is not in the known-good list"
            );
        }

        let result = controller.tts_service.synthesize(request.into()).await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("audio/mpeg"));
        headers.insert(
            header::CONTENT_DISPOSITION,
            header_value(&format!("attachment; filename={}", AUDIO_FILENAME))?,
        );
        headers.insert(
            header::CONTENT_LENGTH,
            header_value(&result.audio_data.len().to_string())?,
        );
        headers.insert(
            "X-Character-Count",
            header_value(&result.char_count.to_string())?,
        );
        headers.insert(
            "X-Chunk-Count",
            header_value(&result.chunk_count.to_string())?,
        );

        tracing::info!(
            request_id = %request_id.0,
            audio_size = result.audio_data.len(),
            "Audio generation completed successfully"
        );

        Ok((StatusCode::OK, headers, Body::from(result.audio_data)))
    }

    /// GET /voices - List selectable voices for a language
    pub async fn list_voices(
        State(controller): State<Arc<TtsController>>,
        Query(query): Query<VoicesQuery>,
    ) -> AppResult<Json<Vec<VoiceDescriptor>>> {
        let language_code = query
            .language_code
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let voices = controller.tts_service.list_voices(&language_code).await?;
        Ok(Json(voices))
    }

    /// POST /validate-text - Pre-flight length check and estimates
    pub async fn validate_text(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<ValidateTextRequest>,
    ) -> Json<TextValidation> {
        Json(controller.tts_service.validate_text(&request.text))
    }
}

fn header_value(value: &str) -> AppResult<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| AppError::Internal(format!("Invalid header value: {}", e)))
}
