use std::path::PathBuf;
use thiserror::Error;

use crate::client::ClientError;

#[derive(Debug, Error)]
pub enum RemediationError {
    #[error("inventory not found: {path}")]
    InventoryNotFound { path: PathBuf },

    #[error("failed to read inventory {path}: {source}")]
    InventoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse inventory {path}: {source}")]
    InventoryParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid environment variables for {function} on line {line}: {source}")]
    InvalidVariables {
        function: String,
        line: u64,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid KMS key ARN '{0}'")]
    InvalidKeyArn(String),

    #[error("failed to update {function}: {source}")]
    UpdateFailed {
        function: String,
        #[source]
        source: ClientError,
    },
}

pub type Result<T> = std::result::Result<T, RemediationError>;
