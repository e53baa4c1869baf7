use thiserror::Error;

pub type Result<T, E = RemapError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemapError {
    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),
    #[error("invalid signature: {0}")]
    InvalidSignature(String),
}
