//! Error types for scanner export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a scanner export.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file not found.
    #[error("scan export not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tabular section could not be parsed.
    #[error("failed to parse scan export {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Report profile carries an unusable dialect.
    #[error(transparent)]
    Profile(#[from] vulnscan_model::ProfileError),
}

impl IngestError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/scan.csv"),
        };
        assert_eq!(err.to_string(), "scan export not found: /path/to/scan.csv");
    }

    #[test]
    fn test_open_maps_not_found() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IngestError::open("scan.csv", source);
        assert!(matches!(err, IngestError::FileNotFound { .. }));

        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = IngestError::open("scan.csv", source);
        assert!(matches!(err, IngestError::FileRead { .. }));
    }
}
