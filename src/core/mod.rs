//! Core business logic module
//!
//! Video reference resolution, embed URL construction, and the instruction
//! file generator, along with their data models and configuration.

pub mod catalog;
pub mod config;
pub mod embed;
pub mod instructions;
pub mod models;
pub mod resolver;
pub mod sink;


#[cfg(test)]
mod integration_tests;

// Re-export commonly used types
pub use config::AppConfig;
pub use models::{AppError, AppResult, VideoReference};
