pub mod json_store;
pub mod schema;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("stats file {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("stats file {path} has unsupported schema version {found} (expected {expected})")]
    UnsupportedVersion {
        path: PathBuf,
        found: u32,
        expected: u32,
    },
    #[error("failed to encode profile: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    /// The file exists and was read, but its contents cannot become a profile.
    pub fn is_unreadable_content(&self) -> bool {
        matches!(
            self,
            StoreError::Malformed { .. } | StoreError::UnsupportedVersion { .. }
        )
    }
}
