//! Error types for output generation.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to flush {path}: {source}")]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("record with columns '{found}' written to {path}, which expects '{expected}'")]
    ColumnMismatch {
        path: PathBuf,
        expected: &'static str,
        found: &'static str,
    },

    #[error(transparent)]
    Profile(#[from] vulnscan_model::ProfileError),
}

pub type Result<T> = std::result::Result<T, OutputError>;
