use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::names::{has_profile_extension, FileName};
use crate::traits::BlobStore;

/// In-memory, `BTreeMap`-based blob store.
///
/// Intended for tests and embedding. Contents are cloned on read and write.
pub struct InMemoryBlobStore {
    files: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryBlobStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            files: RwLock::new(BTreeMap::new()),
        }
    }

    /// Place a file under any name, bypassing the filename policy.
    ///
    /// Mirrors files that already sit in a served directory, such as
    /// `notes.txt` or a name containing `..`.
    pub fn insert_raw(&self, name: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.files
            .write()
            .expect("lock poisoned")
            .insert(name.into(), data.into());
    }

    /// Number of files of any name.
    pub fn len(&self) -> usize {
        self.files.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.files.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BlobStore for InMemoryBlobStore {
    fn read(&self, name: &FileName) -> StoreResult<Vec<u8>> {
        let map = self.files.read().expect("lock poisoned");
        map.get(name.as_str())
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    fn write(&self, name: &FileName, data: &[u8]) -> StoreResult<()> {
        let mut map = self.files.write().expect("lock poisoned");
        map.insert(name.to_string(), data.to_vec());
        Ok(())
    }

    fn delete(&self, name: &FileName) -> StoreResult<()> {
        let mut map = self.files.write().expect("lock poisoned");
        map.remove(name.as_str())
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    fn list(&self) -> StoreResult<Vec<String>> {
        let map = self.files.read().expect("lock poisoned");
        Ok(map
            .keys()
            .filter(|name| has_profile_extension(name))
            .cloned()
            .collect())
    }

    fn exists(&self, name: &FileName) -> StoreResult<bool> {
        let map = self.files.read().expect("lock poisoned");
        Ok(map.contains_key(name.as_str()))
    }
}

impl std::fmt::Debug for InMemoryBlobStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryBlobStore")
            .field("file_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::validate_filename;

    fn name(s: &str) -> FileName {
        validate_filename(s).unwrap()
    }

    #[test]
    fn write_read_delete() {
        let store = InMemoryBlobStore::new();
        assert!(store.is_empty());

        store.write(&name("a.a7p"), b"data").unwrap();
        assert_eq!(store.read(&name("a.a7p")).unwrap(), b"data");
        assert!(store.exists(&name("a.a7p")).unwrap());

        store.delete(&name("a.a7p")).unwrap();
        assert!(matches!(store.read(&name("a.a7p")), Err(StoreError::NotFound(_))));
        assert!(matches!(store.delete(&name("a.a7p")), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn list_is_sorted_and_filtered() {
        let store = InMemoryBlobStore::new();
        store.insert_raw("c.a7p", b"x".to_vec());
        store.insert_raw("b.txt", b"x".to_vec());
        store.insert_raw("a.a7p", b"x".to_vec());
        assert_eq!(store.len(), 3);
        assert_eq!(store.list().unwrap(), vec!["a.a7p", "c.a7p"]);
    }

    #[test]
    fn debug_shows_count() {
        let store = InMemoryBlobStore::new();
        store.insert_raw("a.a7p", Vec::new());
        assert!(format!("{store:?}").contains("file_count: 1"));
    }
}
