//! CLI argument definitions for the Medibot application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

use medibot_core::{Category, MedibotConfig};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "MEDIBOT_CONFIG";
/// Environment variable overriding the server port.
pub const PORT_ENV: &str = "MEDIBOT_PORT";

/// Medibot - a keyword-routed healthcare assistant served over HTTP.
#[derive(Parser, Debug)]
#[command(name = "medibot", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// API server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Interface to bind.
    #[arg(long = "host")]
    pub host: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Answer immediately, without the simulated thinking pause.
    #[arg(long = "no-delay")]
    pub no_delay: bool,

    /// Write the effective configuration to the config path and exit.
    #[arg(long = "write-config")]
    pub write_config: bool,

    /// Answer a single message on stdout instead of starting the server.
    #[arg(short = 'a', long = "ask", value_name = "MESSAGE")]
    pub ask: Option<String>,

    /// User name for --ask.
    #[arg(short = 'u', long = "user", default_value = "")]
    pub user: String,

    /// Preselected service for --ask (health, insurance, appointments,
    /// general, emergency, chat).
    #[arg(short = 's', long = "service")]
    pub service: Option<Category>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > MEDIBOT_CONFIG env var > ~/.medibot/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var(CONFIG_ENV) {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the API server port.
    ///
    /// Priority: --port flag > MEDIBOT_PORT env var > config file value.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        self.pick_port(std::env::var(PORT_ENV).ok(), config_port)
    }

    fn pick_port(&self, env_port: Option<String>, config_port: u16) -> u16 {
        if let Some(p) = self.port {
            return p;
        }
        if let Some(p) = env_port.and_then(|v| v.parse::<u16>().ok()) {
            return p;
        }
        config_port
    }

    /// Resolve the log level: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }

    /// Apply the server and chat overrides to a loaded configuration.
    ///
    /// The log level is resolved separately by [`resolve_log_level`](Self::resolve_log_level)
    /// so that a saved config keeps the file's own level.
    pub fn apply(&self, config: &mut MedibotConfig) {
        config.server.port = self.resolve_port(config.server.port);
        if let Some(ref host) = self.host {
            config.server.host = host.clone();
        }
        if self.no_delay {
            config.chat.thinking_delay = false;
        }
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".medibot").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".medibot").join("config.toml");
    }
    PathBuf::from("config.toml")
}
