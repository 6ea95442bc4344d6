use a7p_types::SchemaMessage;

use crate::error::{CodecError, CodecResult};

/// Protobuf wire codec for schema messages.
pub struct BinaryCodec;

impl BinaryCodec {
    /// Encode a message. Output is deterministic for a given message.
    pub fn encode<M: SchemaMessage>(message: &M) -> Vec<u8> {
        <M as prost::Message>::encode_to_vec(message)
    }

    /// Decode a message. Fails on truncation, invalid tags or wire types;
    /// never returns a partially decoded message.
    pub fn decode<M: SchemaMessage>(bytes: &[u8]) -> CodecResult<M> {
        <M as prost::Message>::decode(bytes).map_err(|e| {
            tracing::debug!(
                message = M::NAME,
                len = bytes.len(),
                error = %e,
                "binary decode failed"
            );
            CodecError::MalformedBinary {
                message: M::NAME,
                reason: e.to_string(),
            }
        })
    }
}
