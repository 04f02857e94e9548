//! URL Player - Core Library
//!
//! Resolves pasted YouTube links into video ids, builds privacy-enhanced
//! embed URLs, and produces download-instruction files. Also hosts the small
//! placeholder HTTP API used by the web frontend.

pub mod api;
pub mod commands;
pub mod core;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{
    config::AppConfig,
    embed::{build as build_embed_url, EmbedUrlBuilder},
    instructions::VideoDownloader,
    models::{
        AppError, AppResult, DownloadFormat, DownloadRequest, EmbedOptions, SearchResultItem,
        VideoQuality, VideoReference,
    },
    resolver::resolve,
    sink::{DirectorySink, InstructionSink, MemorySink},
};

use std::sync::Arc;

/// Application state shared between request handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub embed: EmbedUrlBuilder,
    pub downloader: VideoDownloader,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let embed = EmbedUrlBuilder::new(&config.server.public_origin);

        Self {
            config: Arc::new(config),
            embed,
            downloader: VideoDownloader::new(),
        }
    }

    /// A fresh player session using the configured origin and autoplay
    pub fn player_session(&self) -> commands::PlayerSession {
        commands::PlayerSession::new(self.embed.clone(), self.config.player.autoplay)
    }
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Load configuration, falling back to defaults when it is missing or invalid
pub fn load_config_or_default() -> AppConfig {
    match AppConfig::load() {
        Ok(cfg) => {
            if let Err(err) = cfg.validate() {
                tracing::warn!(
                    "Invalid configuration detected ({}), falling back to defaults",
                    err
                );
                AppConfig::default()
            } else {
                cfg
            }
        }
        Err(err) => {
            tracing::warn!(
                "Failed to load configuration: {:#}. Using defaults",
                err
            );
            AppConfig::default()
        }
    }
}

/// Initialize logging with the given default level
pub fn init(log_level: &str) -> anyhow::Result<()> {
    utils::logging::init_tracing(log_level);
    tracing::info!("📚 {} v{} initialized", NAME, VERSION);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        assert!(init("info").is_ok());
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "url-player");
    }

    #[test]
    fn test_state_player_session_uses_config() {
        let mut config = AppConfig::default();
        config.server.public_origin = "https://app.example/".to_string();
        config.player.autoplay = false;

        let state = AppState::new(config);
        assert_eq!(state.embed.origin(), "https://app.example");

        let mut session = state.player_session();
        let video = session.load_url("https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert!(video.embed_url.contains("autoplay=0"));
        assert!(video.embed_url.contains("origin=https%3A%2F%2Fapp.example"));
    }
}
