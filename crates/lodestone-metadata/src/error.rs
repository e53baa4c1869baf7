use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = MetadataError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("invalid spec version: {0:?}")]
    InvalidVersion(String),
    #[error("{kind} {record} has no obfuscated name to join on")]
    MissingJoinKey { kind: &'static str, record: String },
    #[error("failed to parse metadata document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read metadata from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write metadata to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
