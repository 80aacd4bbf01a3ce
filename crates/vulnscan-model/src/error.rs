//! Error types for report profile loading.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profile {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {field} '{value}': delimiter must be a single ASCII character")]
    InvalidDelimiter { field: &'static str, value: String },

    #[error("invalid profile: {message}")]
    Invalid { message: String },
}

pub type Result<T> = std::result::Result<T, ProfileError>;
