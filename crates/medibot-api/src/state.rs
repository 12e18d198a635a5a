//! Application state shared across all route handlers.
//!
//! AppState is passed to handlers via axum's State extractor. Nothing in it
//! is mutable after startup.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use medibot_chat::ResponseComposer;
use medibot_core::MedibotConfig;

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<MedibotConfig>,
    /// Response engine.
    pub composer: Arc<ResponseComposer>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
    /// Wall-clock start time reported by the banner.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create a new AppState with an explicit composer.
    pub fn new(config: MedibotConfig, composer: ResponseComposer) -> Self {
        Self {
            config: Arc::new(config),
            composer: Arc::new(composer),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Create a new AppState with a composer built from `config.chat`.
    pub fn from_config(config: MedibotConfig) -> Self {
        let composer = ResponseComposer::from_config(&config.chat);
        Self::new(config, composer)
    }
}
