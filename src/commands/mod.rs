//! Command handlers
//!
//! Entry points invoked by the frontend, the HTTP API and the CLI.

pub mod download;
pub mod player;

// Re-export all command functions for easy access
pub use download::*;
pub use player::*;
