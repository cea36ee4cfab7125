use super::error::TtsServiceError;
use super::model::{AudioConfig, AudioSegment, SynthesisInput, TextChunk, VoiceSelection};
use crate::infrastructure::repositories::TtsRepository;
use std::sync::Arc;

/// Voice and prosody settings shared by every chunk of one request
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchParams {
    pub is_ssml: bool,
    pub voice: VoiceSelection,
    pub audio_config: AudioConfig,
}

/// Sends chunks to the synthesis engine one at a time, in chunk order
pub struct SynthesisDispatcher {
    tts_repo: Arc<dyn TtsRepository>,
}

impl SynthesisDispatcher {
    pub fn new(tts_repo: Arc<dyn TtsRepository>) -> Self {
        Self { tts_repo }
    }

    /// Synthesize every chunk and return one segment per chunk.
    ///
    /// The first engine failure aborts the whole request; segments already
    /// produced are dropped with the error.
    pub async fn dispatch(
        &self,
        chunks: &[TextChunk],
        params: &DispatchParams,
    ) -> Result<Vec<AudioSegment>, TtsServiceError> {
        let mut segments = Vec::with_capacity(chunks.len());

        for chunk in chunks {
            tracing::info!(
                chunk_index = chunk.index,
                chunk_total = chunks.len(),
                chunk_size = chunk.char_count(),
                "Synthesizing chunk"
            );

            let input = SynthesisInput::for_chunk(&chunk.text, params.is_ssml);
            let audio = self
                .tts_repo
                .synthesize(&input, &params.voice, &params.audio_config)
                .await
                .map_err(|e| {
                    tracing::error!(
                        chunk_index = chunk.index,
                        chunk_total = chunks.len(),
                        error = %e,
                        "Chunk synthesis failed, aborting request"
                    );
                    TtsServiceError::Engine(e)
                })?;

            tracing::info!(
                chunk_index = chunk.index,
                audio_size = audio.len(),
                "Chunk synthesized"
            );

            segments.push(AudioSegment {
                index: chunk.index,
                audio,
            });
        }

        Ok(segments)
    }
}
