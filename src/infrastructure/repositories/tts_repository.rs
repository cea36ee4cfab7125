use crate::domain::tts::model::{AudioConfig, RemoteVoice, SynthesisInput, VoiceSelection};
use async_trait::async_trait;

/// Failure reported by a synthesis engine, carried to the caller unchanged
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("engine responded {status}: {message}")]
    Api { status: u16, message: String },
    #[error("invalid engine response: {0}")]
    InvalidResponse(String),
}

/// Repository for TTS synthesis operations.
/// Abstracts the remote synthesis engine behind a single-request interface.
///
/// Implementations only talk to the engine. Chunking, ordering and
/// assembly live in the domain layer so every provider shares them.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize one input with the given voice and audio settings
    ///
    /// Returns the raw encoded audio bytes for this input only
    ///
    /// # Errors
    /// Returns the engine's transport, quota or validation failure
    async fn synthesize(
        &self,
        input: &SynthesisInput,
        voice: &VoiceSelection,
        audio_config: &AudioConfig,
    ) -> Result<Vec<u8>, RepositoryError>;

    /// List the voices the engine offers for a language tag
    async fn list_voices(&self, language_code: &str) -> Result<Vec<RemoteVoice>, RepositoryError>;
}
