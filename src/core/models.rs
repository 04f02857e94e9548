//! Core data models for the URL player

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed width of a platform video identifier
pub const VIDEO_ID_LEN: usize = 11;

/// Title shown when a video is loaded without one
pub const DEFAULT_VIDEO_TITLE: &str = "YouTube Video";

/// A validated 11-character video identifier

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideoReference(String);

impl VideoReference {
    /// Wraps a candidate the resolver has already length-checked.
    pub(crate) fn from_candidate(candidate: &str) -> Self {
        Self(candidate.to_string())
    }

    /// Accepts a bare identifier with no URL around it.
    ///
    /// Stricter than the resolver: every character must be in `[A-Za-z0-9_-]`.
    pub fn from_bare_id(id: &str) -> AppResult<Self> {
        let valid = id.chars().count() == VIDEO_ID_LEN
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if valid {
            Ok(Self(id.to_string()))
        } else {
            Err(AppError::NotAVideoReference(id.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical watch-page URL for this video
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl fmt::Display for VideoReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for VideoReference {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_bare_id(&value)
    }
}

impl From<VideoReference> for String {
    fn from(reference: VideoReference) -> Self {
        reference.0
    }
}

impl AsRef<str> for VideoReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Per-call embed options; the privacy flags are fixed by the builder

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedOptions {
    pub autoplay: bool,

    pub origin: String,
}

impl EmbedOptions {
    pub fn new(autoplay: bool, origin: impl Into<String>) -> Self {
        Self {
            autoplay,
            origin: origin.into(),
        }
    }
}

/// Inert display record for the sidebar list

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub id: String,

    pub title: String,

    pub channel: String,

    pub views: String,

    pub time: String,

    pub thumbnail: String,
}

/// Requested quality for download instructions

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoQuality {
    #[default]
    High,

    Medium,

    Low,
}

impl VideoQuality {
    pub const ALL: [VideoQuality; 3] = [Self::High, Self::Medium, Self::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn resolution_label(&self) -> &'static str {
        match self {
            Self::High => "1080p",
            Self::Medium => "720p",
            Self::Low => "480p",
        }
    }
}

impl FromStr for VideoQuality {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(AppError::Config(format!("Unknown quality: {}", other))),
        }
    }
}

impl fmt::Display for VideoQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested container for download instructions

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadFormat {
    #[default]
    Mp4,

    Mp3,

    Webm,
}

impl DownloadFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp4 => "mp4",
            Self::Mp3 => "mp3",
            Self::Webm => "webm",
        }
    }

    pub fn is_audio(&self) -> bool {
        matches!(self, Self::Mp3)
    }
}

impl FromStr for DownloadFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mp4" => Ok(Self::Mp4),
            "mp3" => Ok(Self::Mp3),
            "webm" => Ok(Self::Webm),
            other => Err(AppError::Config(format!("Unknown format: {}", other))),
        }
    }
}

impl fmt::Display for DownloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to produce an instructions file

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub video_id: VideoReference,

    pub title: String,

    pub quality: VideoQuality,

    pub format: DownloadFormat,
}

/// Progress status enumeration

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadStatus {
    Preparing,

    Downloading,

    Completed,

    Error,
}

/// Progress update emitted while an instructions file is produced

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadProgress {
    pub progress: u8,

    pub status: DownloadStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DownloadProgress {
    pub fn new(progress: u8, status: DownloadStatus) -> Self {
        Self {
            progress,
            status,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            progress: 0,
            status: DownloadStatus::Error,
            error: Some(message.into()),
        }
    }
}

/// Placeholder metadata returned by the video-info endpoint

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub title: String,

    pub duration: String,

    pub quality: Vec<VideoQuality>,

    pub message: String,
}

impl Default for VideoInfo {
    fn default() -> Self {
        Self {
            title: DEFAULT_VIDEO_TITLE.to_string(),
            duration: "00:00".to_string(),
            quality: VideoQuality::ALL.to_vec(),
            message: "Video info requires YouTube Data API access".to_string(),
        }
    }
}

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not a video reference: {0}")]
    NotAVideoReference(String),

    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("Direct video download is not supported")]
    DownloadNotSupported,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
