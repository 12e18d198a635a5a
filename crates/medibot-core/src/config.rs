use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{MedibotError, Result};

/// Top-level configuration for the Medibot application.
///
/// Loaded from `~/.medibot/config.toml` by default. Every section is optional
/// in the file; missing sections and fields fall back to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MedibotConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

impl MedibotConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: MedibotConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| MedibotError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Browser origins allowed by CORS.
    pub cors_origins: Vec<String>,
    /// Requests per second accepted on `/api/*`.
    pub rate_limit_per_sec: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:3001".to_string(),
                "http://localhost:3002".to_string(),
            ],
            rate_limit_per_sec: 50,
        }
    }
}

/// Response engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Whether to pause before answering, imitating live inference.
    pub thinking_delay: bool,
    /// Lower bound of the thinking pause in milliseconds.
    pub delay_min_ms: u64,
    /// Upper bound of the thinking pause in milliseconds.
    pub delay_max_ms: u64,
    /// Maximum characters of the user's message echoed back in a response.
    pub echo_max_chars: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            thinking_delay: true,
            delay_min_ms: 1500,
            delay_max_ms: 2500,
            echo_max_chars: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = MedibotConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.cors_origins.len(), 3);
        assert_eq!(config.server.rate_limit_per_sec, 50);
        assert!(config.chat.thinking_delay);
        assert_eq!(config.chat.delay_min_ms, 1500);
        assert_eq!(config.chat.delay_max_ms, 2500);
        assert_eq!(config.chat.echo_max_chars, 100);
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
log_level = "debug"

[server]
host = "0.0.0.0"
port = 8503
cors_origins = ["https://chat.example.org"]
rate_limit_per_sec = 10

[chat]
thinking_delay = false
delay_min_ms = 10
delay_max_ms = 20
echo_max_chars = 40
"#;
        let file = create_temp_config(content);
        let config = MedibotConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8503);
        assert_eq!(config.server.cors_origins, vec!["https://chat.example.org"]);
        assert_eq!(config.server.rate_limit_per_sec, 10);
        assert!(!config.chat.thinking_delay);
        assert_eq!(config.chat.delay_min_ms, 10);
        assert_eq!(config.chat.delay_max_ms, 20);
        assert_eq!(config.chat.echo_max_chars, 40);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let content = r#"
[chat]
thinking_delay = false
"#;
        let file = create_temp_config(content);
        let config = MedibotConfig::load(file.path()).unwrap();
        assert!(!config.chat.thinking_delay);
        // Remaining fields use defaults
        assert_eq!(config.chat.delay_min_ms, 1500);
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_config_empty_toml_uses_all_defaults() {
        let file = create_temp_config("");
        let config = MedibotConfig::load(file.path()).unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.chat.echo_max_chars, 100);
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = create_temp_config("this is {{ not valid TOML");
        let result = MedibotConfig::load(file.path());
        assert!(matches!(result, Err(MedibotError::Config(_))));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = MedibotConfig::load(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(MedibotError::Io(_))));
    }

    #[test]
    fn test_save_creates_parent_dirs_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");

        let mut config = MedibotConfig::default();
        config.server.port = 9123;
        config.chat.echo_max_chars = 64;
        config.save(&path).unwrap();

        assert!(path.exists());
        let reloaded = MedibotConfig::load(&path).unwrap();
        assert_eq!(reloaded.server.port, 9123);
        assert_eq!(reloaded.chat.echo_max_chars, 64);
        assert_eq!(reloaded.server.cors_origins, config.server.cors_origins);
    }
}
