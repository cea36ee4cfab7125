use super::model::{RemoteVoice, VoiceDescriptor, OUTPUT_SAMPLE_RATE_HERTZ};

pub const DEFAULT_VOICE: &str = "en-US-Neural2-D";
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Only voices of this tier are offered to callers
pub const VOICE_TIER: &str = "Neural2";
pub const MAX_LISTED_VOICES: usize = 15;

/// Voices known to work with the service defaults
const KNOWN_VOICES: &[&str] = &[
    "en-US-Neural2-A",
    "en-US-Neural2-C",
    "en-US-Neural2-D",
    "en-US-Neural2-E",
    "en-US-Neural2-F",
    "en-US-Neural2-G",
    "en-US-Neural2-H",
    "en-US-Neural2-I",
    "en-US-Neural2-J",
];

/// Check a voice against the known-good list.
///
/// Advisory only: a `false` is worth a warning, never a rejection.
pub fn validate_voice(voice_name: &str) -> bool {
    KNOWN_VOICES.contains(&voice_name)
}

/// Keep the listed tier, cap the count and project to the public shape
pub fn select_voices(voices: Vec<RemoteVoice>, language_code: &str) -> Vec<VoiceDescriptor> {
    voices
        .into_iter()
        .filter(|voice| voice.name.contains(VOICE_TIER))
        .take(MAX_LISTED_VOICES)
        .map(|voice| VoiceDescriptor {
            language_code: voice
                .language_codes
                .into_iter()
                .next()
                .unwrap_or_else(|| language_code.to_string()),
            natural_sample_rate: voice
                .natural_sample_rate_hertz
                .filter(|rate| *rate > 0)
                .unwrap_or(OUTPUT_SAMPLE_RATE_HERTZ),
            name: voice.name,
            gender: voice.gender,
        })
        .collect()
}
