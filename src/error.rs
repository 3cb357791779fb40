use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BannerError {
    #[error("Failed to read config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
