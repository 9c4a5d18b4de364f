//! Runtime configuration for the reconstruction engine.
//!
//! The configuration is an untyped key/value mapping loaded from a JSON file;
//! its schema belongs to the engine, not to this driver. The driver only
//! overlays the `max_events` cap taken from the command line. The mapping is
//! built fresh on every invocation so overrides never leak between runs.
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{path:?} must contain a JSON object at the top level")]
    NotAnObject { path: PathBuf },
}

/// Key/value mapping forwarded verbatim to the conversion routine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config(Map<String, Value>);

impl Config {
    /// Load a configuration mapping from a JSON file.
    ///
    /// The top level must be a JSON object; anything else is rejected so a
    /// malformed file never reaches the engine half-parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(ConfigError::NotAnObject {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Set (or overwrite) the `max_events` cap.
    pub fn set_max_events(&mut self, max_events: u64) {
        self.0.insert("max_events".to_string(), Value::from(max_events));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
