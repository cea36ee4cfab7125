use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use script2sound_backend::controllers::tts::TtsController;
use script2sound_backend::domain::tts::{Chunker, TtsService};
use script2sound_backend::infrastructure::config::{Config, LogFormat};
use script2sound_backend::infrastructure::http::{create_router, start_http_server};
use script2sound_backend::infrastructure::repositories::{GoogleCredentials, GoogleTtsRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Script2Sound Backend on {}:{}",
        config.host,
        config.port
    );

    // Create the Google TTS client once; every request shares it
    let auth_method = match &config.google_credentials {
        GoogleCredentials::ApiKey(_) => "api_key",
        GoogleCredentials::AccessToken(_) => "access_token",
    };
    tracing::info!(
        base_url = %config.google_tts_base_url,
        auth_method = auth_method,
        timeout_secs = config.tts_request_timeout_secs,
        "Initializing Google TTS client"
    );

    let tts_repo = Arc::new(GoogleTtsRepository::new(
        config.google_tts_base_url.clone(),
        config.google_credentials.clone(),
        Duration::from_secs(config.tts_request_timeout_secs),
    )?);
    tracing::info!("Google TTS client initialized successfully");

    // === DEPENDENCY INJECTION SETUP ===
    tracing::info!(
        max_chunk_chars = config.max_chunk_chars,
        max_text_chars = config.max_text_chars,
        "Instantiating services..."
    );
    let tts_service = Arc::new(TtsService::new(
        tts_repo,
        Chunker::new(config.max_chunk_chars),
        config.max_text_chars,
    ));

    tracing::info!("Instantiating controllers...");
    let tts_controller = Arc::new(TtsController::new(tts_service.clone()));

    tracing::info!(origins = ?config.allowed_origins, "CORS origins configured");
    let app = create_router(tts_service, tts_controller, &config.allowed_origins);

    start_http_server(Arc::new(config), app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let default_filter = if config.is_development() {
        "script2sound_backend=debug,tower_http=debug"
    } else {
        "script2sound_backend=info,tower_http=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
