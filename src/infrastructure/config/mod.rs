use crate::domain::tts::chunker::DEFAULT_MAX_CHUNK_CHARS;
use crate::domain::tts::service::DEFAULT_MAX_TEXT_CHARS;
use crate::infrastructure::repositories::google_tts_repository::{GoogleCredentials, DEFAULT_BASE_URL};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    pub allowed_origins: Vec<String>,
    // Google Cloud TTS
    pub google_tts_base_url: String,
    pub google_credentials: GoogleCredentials,
    pub tts_request_timeout_secs: u64,
    // Pipeline limits
    pub max_chunk_chars: usize,
    pub max_text_chars: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("either GOOGLE_TTS_API_KEY or GOOGLE_TTS_ACCESS_TOKEN must be set")]
    MissingCredentials,
    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let google_credentials = match (
            env::var("GOOGLE_TTS_API_KEY").ok().filter(|v| !v.is_empty()),
            env::var("GOOGLE_TTS_ACCESS_TOKEN").ok().filter(|v| !v.is_empty()),
        ) {
            (Some(key), _) => GoogleCredentials::ApiKey(key),
            (None, Some(token)) => GoogleCredentials::AccessToken(token),
            (None, None) => return Err(ConfigError::MissingCredentials),
        };

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT", 8000)?,
            environment: match env::var("ENVIRONMENT").unwrap_or_default().as_str() {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").unwrap_or_default().as_str() {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            allowed_origins: parse_origins(
                &env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".to_string()),
            ),
            google_tts_base_url: env::var("GOOGLE_TTS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            google_credentials,
            tts_request_timeout_secs: parse_var("TTS_REQUEST_TIMEOUT_SECS", 60)?,
            max_chunk_chars: parse_var("TTS_MAX_CHUNK_CHARS", DEFAULT_MAX_CHUNK_CHARS)?,
            max_text_chars: parse_var("TTS_MAX_TEXT_CHARS", DEFAULT_MAX_TEXT_CHARS)?,
        };

        if config.max_chunk_chars == 0 {
            return Err(ConfigError::Invalid {
                name: "TTS_MAX_CHUNK_CHARS",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

fn parse_var<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

/// Comma-separated origin list; blanks are ignored
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
