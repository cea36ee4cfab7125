use super::model::SynthesisRequest;
use super::voice::{DEFAULT_LANGUAGE, DEFAULT_VOICE};
use serde::{Deserialize, Serialize};

/// Request for POST /generate-audio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateAudioRequest {
    pub text: String,
    #[serde(default = "default_voice_name")]
    pub voice_name: String,
    #[serde(default = "default_language_code")]
    pub language_code: String,
    #[serde(default = "default_speaking_rate")]
    pub speaking_rate: f32,
    #[serde(default)]
    pub pitch: f32,
    #[serde(default)]
    pub is_ssml: bool,
}

fn default_voice_name() -> String {
    DEFAULT_VOICE.to_string()
}

fn default_language_code() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_speaking_rate() -> f32 {
    1.0
}

impl From<GenerateAudioRequest> for SynthesisRequest {
    fn from(request: GenerateAudioRequest) -> Self {
        SynthesisRequest {
            text: request.text,
            is_ssml: request.is_ssml,
            voice_name: request.voice_name,
            language_code: request.language_code,
            speaking_rate: request.speaking_rate,
            pitch: request.pitch,
        }
    }
}

/// Query for GET /voices
#[derive(Debug, Deserialize)]
pub struct VoicesQuery {
    pub language_code: Option<String>,
}

/// Request for POST /validate-text
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateTextRequest {
    #[serde(default)]
    pub text: String,
}

/// Response for POST /validate-text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextValidation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks_needed: Option<usize>,
}

impl TextValidation {
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
            character_count: None,
            estimated_time_seconds: None,
            chunks_needed: None,
        }
    }
}
