//! Destinations for generated instruction files
//!
//! A sink accepts file contents plus a suggested filename. This keeps text
//! generation free of any file-save side effect.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{debug, info};

use crate::core::models::{AppError, AppResult};

#[async_trait]
pub trait InstructionSink: Send + Sync {
    /// Store `contents` under `filename`, returning where it ended up.
    async fn save(&self, filename: &str, contents: Bytes) -> AppResult<PathBuf>;
}

/// Writes files into a directory, creating it on first use
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl InstructionSink for DirectorySink {
    async fn save(&self, filename: &str, contents: Bytes) -> AppResult<PathBuf> {
        tokio::fs::create_dir_all(&self.root).await?;

        let path = self.root.join(filename);
        tokio::fs::write(&path, &contents).await?;

        info!("💾 Saved {} bytes to {:?}", contents.len(), path);
        Ok(path)
    }
}

/// Keeps files in memory; used for dry runs and tests
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Mutex<HashMap<String, Bytes>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, filename: &str) -> Option<Bytes> {
        self.files
            .lock()
            .ok()
            .and_then(|files| files.get(filename).cloned())
    }

    pub fn filenames(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .files
            .lock()
            .map(|files| files.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }
}

#[async_trait]
impl InstructionSink for MemorySink {
    async fn save(&self, filename: &str, contents: Bytes) -> AppResult<PathBuf> {
        let mut files = self
            .files
            .lock()
            .map_err(|_| AppError::Io(std::io::Error::other("sink lock poisoned")))?;

        debug!("Stored {} in memory ({} bytes)", filename, contents.len());
        files.insert(filename.to_string(), contents);
        Ok(PathBuf::from(filename))
    }
}
