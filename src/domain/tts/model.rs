use serde::{Deserialize, Serialize};

/// Fixed audio output parameters. Concatenating MP3 frames from separate
/// requests yields a valid stream only while these stay constant.
pub const AUDIO_ENCODING: AudioEncoding = AudioEncoding::Mp3;
pub const OUTPUT_SAMPLE_RATE_HERTZ: u32 = 24000;
pub const EFFECTS_PROFILE_ID: &str = "headphone-class-device";

pub const MIN_SPEAKING_RATE: f32 = 0.25;
pub const MAX_SPEAKING_RATE: f32 = 4.0;
pub const MIN_PITCH: f32 = -20.0;
pub const MAX_PITCH: f32 = 20.0;

/// Prolog a chunk must start with to be sent as SSML
pub const SSML_PROLOG: &str = "<?xml";

/// A synthesis request as accepted by the pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    pub text: String,
    pub is_ssml: bool,
    pub voice_name: String,
    pub language_code: String,
    pub speaking_rate: f32,
    pub pitch: f32,
}

/// One piece of normalized text, submitted as a single engine call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub index: usize,
    pub text: String,
}

impl TextChunk {
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Encoded audio returned by the engine for one chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSegment {
    pub index: usize,
    pub audio: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct SynthesisResult {
    pub audio_data: Vec<u8>,
    pub char_count: usize,
    pub chunk_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SynthesisInput {
    Text(String),
    Ssml(String),
}

impl SynthesisInput {
    /// SSML is only used when the caller flagged markup and the chunk
    /// literally opens with an XML prolog.
    pub fn for_chunk(chunk: &str, is_ssml: bool) -> Self {
        if is_ssml && chunk.trim_start().starts_with(SSML_PROLOG) {
            SynthesisInput::Ssml(chunk.to_string())
        } else {
            SynthesisInput::Text(chunk.to_string())
        }
    }

    pub fn content(&self) -> &str {
        match self {
            SynthesisInput::Text(text) | SynthesisInput::Ssml(text) => text,
        }
    }

    pub fn is_ssml(&self) -> bool {
        matches!(self, SynthesisInput::Ssml(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSelection {
    pub language_code: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioEncoding {
    Mp3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioConfig {
    pub audio_encoding: AudioEncoding,
    pub speaking_rate: f32,
    pub pitch: f32,
    pub sample_rate_hertz: u32,
    pub effects_profile_id: Vec<String>,
}

impl AudioConfig {
    /// Audio settings used for every chunk; only rate and pitch vary
    pub fn fixed(speaking_rate: f32, pitch: f32) -> Self {
        Self {
            audio_encoding: AUDIO_ENCODING,
            speaking_rate,
            pitch,
            sample_rate_hertz: OUTPUT_SAMPLE_RATE_HERTZ,
            effects_profile_id: vec![EFFECTS_PROFILE_ID.to_string()],
        }
    }
}

/// Voice as reported by the engine's voice directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteVoice {
    pub name: String,
    pub language_codes: Vec<String>,
    pub gender: String,
    pub natural_sample_rate_hertz: Option<u32>,
}

/// Voice as exposed to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceDescriptor {
    pub name: String,
    pub language_code: String,
    pub gender: String,
    pub natural_sample_rate: u32,
}
