use thiserror::Error;

/// Errors from encoding or decoding a profile.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The bytes are not a valid wire encoding of the message.
    #[error("malformed {message} binary: {reason}")]
    MalformedBinary { message: &'static str, reason: String },

    /// The text is not syntactically valid.
    #[error("malformed {message} text: {reason}")]
    MalformedText { message: &'static str, reason: String },

    /// The text parses but names unknown fields or carries values of the
    /// wrong type.
    #[error("{message} text does not match schema: {reason}")]
    SchemaViolation { message: &'static str, reason: String },

    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type CodecResult<T> = Result<T, CodecError>;
