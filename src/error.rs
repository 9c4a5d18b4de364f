//! Crate-level error type and `Result` alias.
//! Converts underlying I/O, configuration, and serialization errors, and
//! provides a semantic variant for unreadable pipeline inputs.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{role} file {path:?} is not readable: {source}")]
    Unreadable {
        role: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
}
