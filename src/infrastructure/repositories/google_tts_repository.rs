use super::tts_repository::{RepositoryError, TtsRepository};
use crate::domain::tts::model::{AudioConfig, RemoteVoice, SynthesisInput, VoiceSelection};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://texttospeech.googleapis.com";

/// How requests to Google Cloud TTS are authenticated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoogleCredentials {
    /// Sent as the `key` query parameter
    ApiKey(String),
    /// OAuth access token sent as a bearer token
    AccessToken(String),
}

/// Google Cloud Text-to-Speech implementation of TTS repository
pub struct GoogleTtsRepository {
    http_client: reqwest::Client,
    base_url: String,
    credentials: GoogleCredentials,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeBody<'a> {
    input: InputBody<'a>,
    voice: &'a VoiceSelection,
    audio_config: &'a AudioConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum InputBody<'a> {
    Text(&'a str),
    Ssml(&'a str),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: String,
}

#[derive(Debug, Deserialize)]
struct ListVoicesResponse {
    #[serde(default)]
    voices: Vec<GoogleVoice>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleVoice {
    name: String,
    #[serde(default)]
    language_codes: Vec<String>,
    #[serde(default)]
    ssml_gender: Option<String>,
    #[serde(default)]
    natural_sample_rate_hertz: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorEnvelope {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: String,
}

impl GoogleTtsRepository {
    pub fn new(
        base_url: impl Into<String>,
        credentials: GoogleCredentials,
        timeout: Duration,
    ) -> Result<Self, RepositoryError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RepositoryError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        })
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credentials {
            GoogleCredentials::ApiKey(key) => request.query(&[("key", key)]),
            GoogleCredentials::AccessToken(token) => request.bearer_auth(token),
        }
    }

    /// Turn a non-2xx response into an error carrying the engine's own message
    async fn error_from_response(response: reqwest::Response) -> RepositoryError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<GoogleErrorEnvelope>(&body)
            .map(|envelope| envelope.error.message)
            .unwrap_or(body);

        RepositoryError::Api { status, message }
    }
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(
        &self,
        input: &SynthesisInput,
        voice: &VoiceSelection,
        audio_config: &AudioConfig,
    ) -> Result<Vec<u8>, RepositoryError> {
        let content = input.content();
        let preview: String = content.chars().take(200).collect();
        let body = SynthesizeBody {
            input: match input {
                SynthesisInput::Text(text) => InputBody::Text(text),
                SynthesisInput::Ssml(ssml) => InputBody::Ssml(ssml),
            },
            voice,
            audio_config,
        };

        tracing::debug!(
            voice = %voice.name,
            language = %voice.language_code,
            ssml = input.is_ssml(),
            text_length = content.len(),
            text_preview = %preview,
            "Calling Google TTS text:synthesize"
        );

        let url = format!("{}/v1/text:synthesize", self.base_url);
        let response = self
            .authorize(self.http_client.post(&url))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, voice = %voice.name, "Google TTS request failed");
                RepositoryError::Transport(e.to_string())
            })?;

        if !response.status().is_success() {
            let err = Self::error_from_response(response).await;
            tracing::error!(error = %err, voice = %voice.name, "Google TTS rejected synthesis");
            return Err(err);
        }

        let payload: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| RepositoryError::InvalidResponse(e.to_string()))?;

        let audio = STANDARD
            .decode(payload.audio_content.as_bytes())
            .map_err(|e| RepositoryError::InvalidResponse(format!("audioContent is not base64: {}", e)))?;

        tracing::debug!(audio_size = audio.len(), "Google TTS audio decoded");

        Ok(audio)
    }

    async fn list_voices(&self, language_code: &str) -> Result<Vec<RemoteVoice>, RepositoryError> {
        let url = format!("{}/v1/voices", self.base_url);
        let response = self
            .authorize(self.http_client.get(&url))
            .query(&[("languageCode", language_code)])
            .send()
            .await
            .map_err(|e| RepositoryError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let payload: ListVoicesResponse = response
            .json()
            .await
            .map_err(|e| RepositoryError::InvalidResponse(e.to_string()))?;

        Ok(payload
            .voices
            .into_iter()
            .map(|voice| RemoteVoice {
                name: voice.name,
                language_codes: voice.language_codes,
                gender: voice
                    .ssml_gender
                    .unwrap_or_else(|| "SSML_VOICE_GENDER_UNSPECIFIED".to_string()),
                natural_sample_rate_hertz: voice.natural_sample_rate_hertz,
            })
            .collect())
    }
}
