use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read storage file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write storage file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("storage file {path} is not a JSON object: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("value for key '{key}' could not be encoded: {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },

    #[error("value for key '{key}' has an unexpected shape: {source}")]
    Decode {
        key: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("unknown theme '{0}'")]
    UnknownTheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("background task stopped without reporting a result")]
    Disconnected,

    #[error("failed to spawn worker thread: {0}")]
    Spawn(String),
}
