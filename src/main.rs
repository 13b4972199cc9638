//! Lingo Gate - HTTP front door for translation and language detection
//!
//! Endpoints:
//! - POST /translate        (text -> target language via the provider)
//! - POST /getLanguageCode  (text -> detected two-letter code)

use anyhow::Result;
use std::process::ExitCode;
use lingo_gate::{api, Config};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file if it exists
    if std::path::Path::new(".env").exists() {
        dotenvy::dotenv()?;
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Lingo Gate starting...");

    let config = Config::load()?;
    info!("Configuration loaded");
    info!("Translation provider: {}", config.translation.provider_url);

    let state = api::AppState::from_config(&config)?;

    if let Err(e) = api::serve(&config, state).await {
        error!("{:#}", e);
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
