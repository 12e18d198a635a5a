//! Medibot application binary - composition root.
//!
//! 1. Parse CLI arguments
//! 2. Load configuration from TOML and apply overrides
//! 3. Either answer one `--ask` message on stdout, or
//! 4. Start the axum REST API server

mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use medibot_api::{start_server, AppState};
use medibot_chat::ResponseComposer;
use medibot_core::{MedibotConfig, SessionContext};

use crate::cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config is read before tracing starts so the file can set the log level.
    let config_path = args.resolve_config_path();
    let (mut config, load_error) = if config_path.exists() {
        match MedibotConfig::load(&config_path) {
            Ok(config) => (config, None),
            Err(e) => (MedibotConfig::default(), Some(e)),
        }
    } else {
        (MedibotConfig::default(), None)
    };
    args.apply(&mut config);

    // Tracing. RUST_LOG wins over --log-level, which wins over the config file.
    let log_level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    tracing::info!("Starting Medibot v{}", env!("CARGO_PKG_VERSION"));
    match load_error {
        Some(e) => tracing::warn!(
            path = %config_path.display(),
            error = %e,
            "Failed to load config, using defaults"
        ),
        None if config_path.exists() => {
            tracing::info!(path = %config_path.display(), "Configuration loaded")
        }
        None => tracing::info!(path = %config_path.display(), "No config file, using defaults"),
    }

    if args.write_config {
        config.save(&config_path)?;
        return Ok(());
    }

    if let Some(message) = args.ask.as_deref() {
        config.chat.thinking_delay = false;
        let composer = ResponseComposer::from_config(&config.chat);
        let context = SessionContext::new(args.user.as_str(), args.service);
        println!("{}", composer.compose(message, &context).await);
        return Ok(());
    }

    tracing::info!(
        thinking_delay = config.chat.thinking_delay,
        rate_limit_per_sec = config.server.rate_limit_per_sec,
        "Response engine ready"
    );

    let state = AppState::from_config(config);
    start_server(state).await?;

    Ok(())
}
