//! Error types for DEVCON.

use std::io;

/// Errors produced outside the dispatch path: configuration, registration,
/// and failures signalled by command handlers.
#[derive(Debug, thiserror::Error)]
pub enum DevconError {
    #[error("config error: {0}")]
    Config(String),

    #[error("unsupported parameter type: {0}")]
    UnsupportedType(String),

    #[error("command error: {0}")]
    Command(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, DevconError>;
