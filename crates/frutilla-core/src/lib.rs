//! Frutilla Core - Shared audio data model and configuration for the Frutilla frontend

pub mod audio_file;
pub mod config;
pub mod types;

pub use types::*;
