use serde::Serialize;
use thiserror::Error;

use a7p_codec::CodecError;
use a7p_crypto::GuardError;
use a7p_store::StoreError;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("integrity error: {0}")]
    Checksum(#[from] GuardError),

    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Transport-neutral classification of an [`SdkError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidName,
    NotFound,
    TooShort,
    Mismatch,
    MalformedBinary,
    MalformedText,
    SchemaViolation,
    Io,
    Internal,
}

impl SdkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Store(StoreError::InvalidName { .. }) => ErrorKind::InvalidName,
            Self::Store(StoreError::NotFound(_)) => ErrorKind::NotFound,
            Self::Store(StoreError::Io(_)) => ErrorKind::Io,
            Self::Checksum(GuardError::TooShort { .. }) => ErrorKind::TooShort,
            Self::Checksum(GuardError::Mismatch { .. }) => ErrorKind::Mismatch,
            Self::Codec(CodecError::MalformedBinary { .. }) => ErrorKind::MalformedBinary,
            Self::Codec(CodecError::MalformedText { .. }) => ErrorKind::MalformedText,
            Self::Codec(CodecError::SchemaViolation { .. }) => ErrorKind::SchemaViolation,
            Self::Codec(CodecError::Serialization(_)) => ErrorKind::Internal,
        }
    }
}

pub type SdkResult<T> = Result<T, SdkError>;
