//! Application configuration management
//!
//! Sources are layered with the `config` crate: built-in defaults, then an
//! optional `config.json` in the platform config directory, then
//! `URLPLAYER__<SECTION>__<KEY>` environment variables.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use super::models::{DownloadFormat, VideoQuality};

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "URLPLAYER";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Main application configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub player: PlayerConfig,
    pub download: DownloadConfig,
    pub advanced: AdvancedConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    /// Origin the frontend is served from; sent to the embed player
    pub public_origin: String,
}

/// Player behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub autoplay: bool,
}

/// Instruction file defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadConfig {
    pub output_directory: String,
    pub default_quality: VideoQuality,
    pub default_format: DownloadFormat,
}

/// Advanced configuration options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedConfig {
    pub log_level: String, // "error", "warn", "info", "debug", "trace"
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            player: PlayerConfig::default(),
            download: DownloadConfig::default(),
            advanced: AdvancedConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5000".to_string(),
            public_origin: "http://localhost:5000".to_string(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { autoplay: true }
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            output_directory: "downloads".to_string(),
            default_quality: VideoQuality::High,
            default_format: DownloadFormat::Mp4,
        }
    }
}

impl Default for AdvancedConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the platform config directory and environment
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path, ENV_PREFIX)
    }

    /// Load configuration layered over defaults from `path` (optional) and
    /// environment variables starting with `env_prefix`
    pub fn load_from(path: &Path, env_prefix: &str) -> Result<Self> {
        let defaults = serde_json::to_string(&Self::default())
            .with_context(|| "Failed to serialize defaults")?;

        let settings = config::Config::builder()
            .add_source(config::File::from_str(&defaults, config::FileFormat::Json))
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Json)
                    .required(false),
            )
            .add_source(config::Environment::with_prefix(env_prefix).separator("__"))
            .build()
            .with_context(|| format!("Failed to read configuration from {:?}", path))?;

        let config: AppConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to parse configuration")?;

        tracing::debug!("Loaded configuration (file: {:?})", path);
        Ok(config)
    }

    /// Save configuration to the platform config directory
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration as pretty JSON to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = self.export()?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        tracing::info!("Saved configuration to: {:?}", path);
        Ok(())
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "urlplayer", "url-player")
            .with_context(|| "Failed to get project directories")?;

        Ok(project_dirs.config_dir().join("config.json"))
    }

    /// Export configuration as JSON string
    pub fn export(&self) -> Result<String> {
        serde_json::to_string_pretty(self).with_context(|| "Failed to export configuration")
    }

    /// Bind address parsed as a socket address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.server
            .bind_address
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.server.bind_address))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;

        if self.server.public_origin.trim().is_empty() {
            anyhow::bail!("Public origin must not be empty");
        }

        if self.download.output_directory.trim().is_empty() {
            anyhow::bail!("Output directory must not be empty");
        }

        if !LOG_LEVELS.contains(&self.advanced.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log level: must be 'error', 'warn', 'info', 'debug', or 'trace'"
            );
        }

        Ok(())
    }
}
