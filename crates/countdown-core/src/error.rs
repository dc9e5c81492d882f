//! Core error types for countdown-core.
//!
//! The timer itself has no failure modes: rejected operations simply return
//! `None`. Errors only arise from configuration I/O and audio output.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for countdown-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Audio output errors
    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// The configuration directory could not be created
    #[error("Cannot create configuration directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Audio output errors. Never surfaced to the timer; the alert player
/// logs and swallows them.
#[derive(Error, Debug)]
pub enum AudioError {
    /// No usable output device or stream
    #[error("Audio device not available: {0}")]
    DeviceUnavailable(String),

    /// The synthesized buffer could not be produced
    #[error("Tone synthesis failed: {0}")]
    Synthesis(String),

    /// The fallback clip could not be opened or decoded
    #[error("Cannot play clip {path}: {message}")]
    Clip { path: PathBuf, message: String },

    /// Playback thread could not be started
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
