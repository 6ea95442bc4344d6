use crate::digest::{ContentDigest, Md5Hex};

/// Prepends and validates a content digest on a byte blob.
///
/// A guarded blob is `digest(content) ++ content` with no other header.
pub struct ChecksumGuard<D: ContentDigest = Md5Hex> {
    digest: D,
}

impl ChecksumGuard<Md5Hex> {
    /// Guard used by `.a7p` files.
    pub const A7P: Self = Self { digest: Md5Hex };
}

impl<D: ContentDigest> ChecksumGuard<D> {
    /// Digest of `content` as it would appear in the prefix.
    pub fn digest_of(&self, content: &[u8]) -> String {
        self.digest.digest(content)
    }

    /// Prefix `content` with its digest.
    pub fn wrap(&self, content: &[u8]) -> Vec<u8> {
        let digest = self.digest_of(content);
        let mut blob = Vec::with_capacity(digest.len() + content.len());
        blob.extend_from_slice(digest.as_bytes());
        blob.extend_from_slice(content);
        blob
    }

    /// Validate the digest prefix of `blob` and return the content after it.
    ///
    /// A blob no longer than the prefix is rejected even when it is exactly
    /// a digest of empty content.
    pub fn unwrap<'a>(&self, blob: &'a [u8]) -> GuardResult<&'a [u8]> {
        if blob.len() <= D::WIDTH {
            return Err(GuardError::TooShort {
                len: blob.len(),
                width: D::WIDTH,
            });
        }
        let (prefix, content) = blob.split_at(D::WIDTH);
        let expected = self.digest.digest(content);
        if prefix != expected.as_bytes() {
            let found = String::from_utf8_lossy(prefix).into_owned();
            tracing::debug!(%expected, %found, "checksum prefix does not match content");
            return Err(GuardError::Mismatch { expected, found });
        }
        Ok(content)
    }

    /// Returns `true` if `blob` passes [`unwrap`](Self::unwrap).
    pub fn verify(&self, blob: &[u8]) -> bool {
        self.unwrap(blob).is_ok()
    }
}

impl Default for ChecksumGuard<Md5Hex> {
    fn default() -> Self {
        Self::A7P
    }
}

/// Errors from checksum validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GuardError {
    #[error("data too short for a checksum: {len} bytes, prefix is {width}")]
    TooShort { len: usize, width: usize },

    #[error("checksum mismatch: expected {expected}, got {found}")]
    Mismatch { expected: String, found: String },
}

pub type GuardResult<T> = Result<T, GuardError>;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn wrap_layout() {
        let blob = ChecksumGuard::A7P.wrap(b"abc");
        assert_eq!(&blob[..32], b"900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(&blob[32..], b"abc");
    }

    #[test]
    fn unwrap_returns_content() {
        let blob = ChecksumGuard::A7P.wrap(b"profile");
        assert_eq!(ChecksumGuard::A7P.unwrap(&blob).unwrap(), b"profile");
        assert!(ChecksumGuard::A7P.verify(&blob));
    }

    #[test]
    fn exactly_prefix_len_is_too_short() {
        let blob = ChecksumGuard::A7P.wrap(b"");
        assert_eq!(blob.len(), 32);
        let err = ChecksumGuard::A7P.unwrap(&blob).unwrap_err();
        assert_eq!(err, GuardError::TooShort { len: 32, width: 32 });
    }

    #[test]
    fn corrupted_prefix_is_mismatch() {
        let mut blob = ChecksumGuard::A7P.wrap(b"profile");
        blob[0] = if blob[0] == b'0' { b'1' } else { b'0' };
        let err = ChecksumGuard::A7P.unwrap(&blob).unwrap_err();
        assert!(matches!(err, GuardError::Mismatch { .. }));
    }

    #[test]
    fn uppercase_prefix_rejected() {
        let content = b"profile";
        let mut blob = ChecksumGuard::A7P.digest_of(content).to_uppercase().into_bytes();
        blob.extend_from_slice(content);
        assert!(!ChecksumGuard::A7P.verify(&blob));
    }

    #[test]
    fn mismatch_reports_both_digests() {
        let mut blob = b"ffffffffffffffffffffffffffffffff".to_vec();
        blob.extend_from_slice(b"abc");
        match ChecksumGuard::A7P.unwrap(&blob).unwrap_err() {
            GuardError::Mismatch { expected, found } => {
                assert_eq!(expected, "900150983cd24fb0d6963f7d28e17f72");
                assert_eq!(found, "ffffffffffffffffffffffffffffffff");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn wrap_then_unwrap_is_identity(content in proptest::collection::vec(any::<u8>(), 1..512)) {
            let blob = ChecksumGuard::A7P.wrap(&content);
            prop_assert_eq!(ChecksumGuard::A7P.unwrap(&blob).unwrap(), content.as_slice());
        }

        #[test]
        fn any_content_byte_flip_is_detected(
            content in proptest::collection::vec(any::<u8>(), 1..256),
            at in any::<proptest::sample::Index>(),
            flip in 1u8..=255,
        ) {
            let mut blob = ChecksumGuard::A7P.wrap(&content);
            let i = 32 + at.index(content.len());
            blob[i] ^= flip;
            let result = ChecksumGuard::A7P.unwrap(&blob);
            let is_mismatch = matches!(result, Err(GuardError::Mismatch { .. }));
            prop_assert!(is_mismatch);
        }

        #[test]
        fn short_blobs_rejected(blob in proptest::collection::vec(any::<u8>(), 0..=32)) {
            let result = ChecksumGuard::A7P.unwrap(&blob);
            let is_too_short = matches!(result, Err(GuardError::TooShort { .. }));
            prop_assert!(is_too_short);
        }
    }
}
