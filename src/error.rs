// ABOUTME: Defines all error types for the territory library using thiserror.
// ABOUTME: Registry operations are infallible; only grant file I/O can fail.

use std::path::PathBuf;

/// Top-level error type for the territory library.
#[derive(Debug, thiserror::Error)]
pub enum TerritoryError {
    #[error("Grants error: {0}")]
    Grants(#[from] GrantsError),
}

/// Errors from reading or writing grant files.
#[derive(Debug, thiserror::Error)]
pub enum GrantsError {
    #[error("Failed to access grant file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid grant file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize grants: {0}")]
    Serialize(#[from] serde_json::Error),
}
