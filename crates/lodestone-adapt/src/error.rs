use std::fmt;

use lodestone_metadata::MetadataError;
use lodestone_remap::RemapError;
use thiserror::Error;

pub type Result<T, E = AdaptError> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    Obfuscated,
    Official,
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Obfuscated => f.write_str("obfuscated"),
            Identity::Official => f.write_str("official"),
        }
    }
}

#[derive(Debug, Error)]
pub enum AdaptError {
    /// A name record lacks a half the algorithm cannot proceed without; the input is malformed.
    #[error("missing {identity} {component} on {record}")]
    MissingIdentity {
        identity: Identity,
        component: &'static str,
        record: String,
    },
    #[error(transparent)]
    Remap(#[from] RemapError),
    #[error(transparent)]
    Metadata(#[from] MetadataError),
}
