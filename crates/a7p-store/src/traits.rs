use crate::error::StoreResult;
use crate::names::FileName;

/// Flat, name-addressed storage of raw profile files.
///
/// All implementations must satisfy these invariants:
/// - Contents are opaque bytes; the store never validates them.
/// - `write` replaces any existing file of that name in full.
/// - `read` and `delete` return `StoreError::NotFound` for a missing name.
/// - `list` returns only names carrying the profile extension, without
///   reading their contents, sorted.
pub trait BlobStore: Send + Sync {
    /// Read a whole file.
    fn read(&self, name: &FileName) -> StoreResult<Vec<u8>>;

    /// Create or overwrite a file.
    fn write(&self, name: &FileName, data: &[u8]) -> StoreResult<()>;

    /// Remove a file.
    fn delete(&self, name: &FileName) -> StoreResult<()>;

    /// Names of all profile files.
    ///
    /// Names are returned as found. A listed name may still fail
    /// [`validate_filename`](crate::validate_filename), for instance one
    /// containing `..`.
    fn list(&self) -> StoreResult<Vec<String>>;

    /// Check whether a file exists.
    fn exists(&self, name: &FileName) -> StoreResult<bool>;
}
