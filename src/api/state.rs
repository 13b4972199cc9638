//! Shared state for API handlers

use std::sync::Arc;

use crate::config::Config;
use crate::services::{DetectorService, TranslatorService};

/// Read-only services shared by every request
#[derive(Clone, Debug)]
pub struct AppState {
    pub translator: Arc<TranslatorService>,
    pub detector: Arc<DetectorService>,
}

impl AppState {
    pub fn new(translator: TranslatorService, detector: DetectorService) -> Self {
        Self {
            translator: Arc::new(translator),
            detector: Arc::new(detector),
        }
    }

    /// Build state from configuration
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(
            TranslatorService::new(&config.translation)?,
            DetectorService::new(),
        ))
    }
}
