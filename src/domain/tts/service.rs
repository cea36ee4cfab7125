use super::assembler::assemble;
use super::chunker::Chunker;
use super::dispatcher::{DispatchParams, SynthesisDispatcher};
use super::dto::TextValidation;
use super::error::TtsServiceError;
use super::model::{
    AudioConfig, SynthesisRequest, SynthesisResult, VoiceDescriptor, VoiceSelection, MAX_PITCH,
    MAX_SPEAKING_RATE, MIN_PITCH, MIN_SPEAKING_RATE,
};
use super::normalizer::normalize_text;
use super::voice::select_voices;
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub const DEFAULT_MAX_TEXT_CHARS: usize = 50_000;

/// Rough synthesis throughput used for time estimates
const SECONDS_PER_THOUSAND_CHARS: f64 = 2.0;

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    dispatcher: SynthesisDispatcher,
    chunker: Chunker,
    max_text_chars: usize,
}

impl TtsService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>, chunker: Chunker, max_text_chars: usize) -> Self {
        Self {
            dispatcher: SynthesisDispatcher::new(tts_repo.clone()),
            tts_repo,
            chunker,
            max_text_chars,
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize arbitrary-length text into a single MP3 buffer
    ///
    /// This operation:
    /// - Validates text length, speaking rate and pitch
    /// - Normalizes and chunks the text
    /// - Calls the engine once per chunk, in order
    /// - Concatenates the returned audio
    ///
    /// Validation failures never reach the engine. Any engine failure
    /// aborts the request without partial audio.
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResult, TtsServiceError>;

    /// List selectable voices for a language tag
    async fn list_voices(&self, language_code: &str) -> Result<Vec<VoiceDescriptor>, TtsServiceError>;

    /// Cheap pre-flight check of a text without contacting the engine
    fn validate_text(&self, text: &str) -> TextValidation;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResult, TtsServiceError> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            text_length = request.text.chars().count(),
            ssml = request.is_ssml,
            voice = %request.voice_name,
            language = %request.language_code,
            "TTS synthesis request"
        );

        // 1. Reject bad input before anything is sent
        self.validate_request(&request)?;

        // 2. Normalize
        let normalized = normalize_text(&request.text, request.is_ssml)?;
        let char_count = normalized.chars().count();

        tracing::info!(
            original_length = request.text.chars().count(),
            normalized_length = char_count,
            "Text normalized"
        );

        // 3. Chunk
        let chunks = self.chunker.chunk(&normalized);

        // 4. Dispatch sequentially
        let params = DispatchParams {
            is_ssml: request.is_ssml,
            voice: VoiceSelection {
                language_code: request.language_code,
                name: request.voice_name,
            },
            audio_config: AudioConfig::fixed(request.speaking_rate, request.pitch),
        };
        let segments = self.dispatcher.dispatch(&chunks, &params).await?;

        // 5. Assemble
        let chunk_count = chunks.len();
        let audio_data = assemble(segments);

        let duration = start_time.elapsed();
        tracing::info!(
            latency_ms = duration.as_millis(),
            characters_count = char_count,
            chunk_count = chunk_count,
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(SynthesisResult {
            audio_data,
            char_count,
            chunk_count,
        })
    }

    async fn list_voices(&self, language_code: &str) -> Result<Vec<VoiceDescriptor>, TtsServiceError> {
        tracing::info!(language = %language_code, "Fetching available voices");

        let voices = self
            .tts_repo
            .list_voices(language_code)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, language = %language_code, "Voice listing failed");
                TtsServiceError::Catalog(e)
            })?;

        let selected = select_voices(voices, language_code);
        tracing::info!(voice_count = selected.len(), "Found high-quality voices");

        Ok(selected)
    }

    fn validate_text(&self, text: &str) -> TextValidation {
        if text.trim().is_empty() {
            return TextValidation::rejected("Text cannot be empty");
        }

        let character_count = text.chars().count();
        if character_count > self.max_text_chars {
            return TextValidation::rejected(format!(
                "Text too long (max {} characters)",
                self.max_text_chars
            ));
        }

        let estimated = character_count as f64 / 1000.0 * SECONDS_PER_THOUSAND_CHARS;

        TextValidation {
            valid: true,
            error: None,
            character_count: Some(character_count),
            estimated_time_seconds: Some((estimated * 10.0).round() / 10.0),
            chunks_needed: Some(self.chunker.estimate_chunks(character_count)),
        }
    }
}

impl TtsService {
    fn validate_request(&self, request: &SynthesisRequest) -> Result<(), TtsServiceError> {
        if request.text.trim().is_empty() {
            return Err(TtsServiceError::Invalid("Text cannot be empty".to_string()));
        }

        let char_count = request.text.chars().count();
        if char_count > self.max_text_chars {
            return Err(TtsServiceError::TooLong(format!(
                "Text must be {} characters or less, got {}",
                self.max_text_chars, char_count
            )));
        }

        if !(MIN_SPEAKING_RATE..=MAX_SPEAKING_RATE).contains(&request.speaking_rate) {
            return Err(TtsServiceError::Invalid(format!(
                "speaking_rate must be between {} and {}, got {}",
                MIN_SPEAKING_RATE, MAX_SPEAKING_RATE, request.speaking_rate
            )));
        }

        if !(MIN_PITCH..=MAX_PITCH).contains(&request.pitch) {
            return Err(TtsServiceError::Invalid(format!(
                "pitch must be between {} and {}, got {}",
                MIN_PITCH, MAX_PITCH, request.pitch
            )));
        }

        Ok(())
    }
}
