use md5::{Digest, Md5};

/// A fixed-width, text-encoded content digest.
///
/// Implementations must be deterministic and always return exactly
/// [`WIDTH`](Self::WIDTH) ASCII bytes.
pub trait ContentDigest {
    /// Encoded length in bytes.
    const WIDTH: usize;

    /// Digest of `data` in its text encoding.
    fn digest(&self, data: &[u8]) -> String;
}

/// Lowercase hex MD5, the digest used by the `.a7p` format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Md5Hex;

impl ContentDigest for Md5Hex {
    const WIDTH: usize = 32;

    fn digest(&self, data: &[u8]) -> String {
        hex::encode(Md5::digest(data))
    }
}
