use std::path::PathBuf;

use serde_json::Value;

use a7p_codec::{BinaryCodec, TextCodec};
use a7p_crypto::ChecksumGuard;
use a7p_store::{validate_filename, BlobStore, DirectoryStore, FileName};
use a7p_types::Payload;

use crate::error::SdkResult;
use crate::verify::{FileStatus, VerifyEntry, VerifyReport};

/// Load/store/delete/list over one profile directory.
///
/// Every flow validates the filename before touching storage and stops at
/// the first failing stage, returning that stage's error unchanged. The
/// service holds no mutable state; it is safe to share across threads.
pub struct ProfileService<S: BlobStore = DirectoryStore> {
    store: S,
    guard: ChecksumGuard,
}

impl ProfileService<DirectoryStore> {
    /// Serve profiles from an existing directory.
    pub fn open_dir(dir: impl Into<PathBuf>) -> SdkResult<Self> {
        Ok(Self::new(DirectoryStore::open(dir)?))
    }
}

impl<S: BlobStore> ProfileService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            guard: ChecksumGuard::A7P,
        }
    }

    /// The underlying storage backend.
    pub fn backend(&self) -> &S {
        &self.store
    }

    // ---- List ----

    /// Names of profile files, sorted. Contents are not inspected, so a
    /// listed file may still fail to load.
    pub fn list(&self) -> SdkResult<Vec<String>> {
        Ok(self.store.list()?)
    }

    // ---- Load ----

    /// Load a profile file as compact JSON text.
    pub fn load(&self, name: &str) -> SdkResult<String> {
        let payload = self.load_payload(name)?;
        Ok(TextCodec::to_text(&payload)?)
    }

    /// Load and decode a profile file.
    pub fn load_payload(&self, name: &str) -> SdkResult<Payload> {
        let name = validate_filename(name)?;
        self.read_payload(&name)
    }

    fn read_payload(&self, name: &FileName) -> SdkResult<Payload> {
        let blob = self.store.read(name)?;
        tracing::debug!(file = %name, bytes = blob.len(), "read profile file");
        let content = self.guard.unwrap(&blob)?;
        let payload = BinaryCodec::decode::<Payload>(content)?;
        tracing::debug!(file = %name, "profile decoded");
        Ok(payload)
    }

    // ---- Store ----

    /// Parse JSON text and store it, replacing any existing file.
    pub fn store(&self, name: &str, text: &str) -> SdkResult<()> {
        let name = validate_filename(name)?;
        let payload = TextCodec::from_text::<Payload>(text)?;
        self.write_payload(&name, &payload)
    }

    /// Like [`store`](Self::store) for an already parsed JSON tree.
    pub fn store_value(&self, name: &str, value: Value) -> SdkResult<()> {
        let name = validate_filename(name)?;
        let payload = TextCodec::from_value::<Payload>(value)?;
        self.write_payload(&name, &payload)
    }

    /// Encode and store a payload, replacing any existing file.
    pub fn store_payload(&self, name: &str, payload: &Payload) -> SdkResult<()> {
        let name = validate_filename(name)?;
        self.write_payload(&name, payload)
    }

    fn write_payload(&self, name: &FileName, payload: &Payload) -> SdkResult<()> {
        let content = BinaryCodec::encode(payload);
        let blob = self.guard.wrap(&content);
        // Plain overwrite: a crash here leaves a file that fails the
        // checksum on the next load.
        self.store.write(name, &blob)?;
        tracing::info!(file = %name, bytes = blob.len(), "profile stored");
        Ok(())
    }

    // ---- Delete ----

    pub fn delete(&self, name: &str) -> SdkResult<()> {
        let name = validate_filename(name)?;
        self.store.delete(&name)?;
        tracing::info!(file = %name, "profile deleted");
        Ok(())
    }

    // ---- Verify ----

    /// Run every listed file through the filename policy, checksum guard and
    /// binary decoder, recording each outcome instead of stopping at the
    /// first failure.
    pub fn verify(&self) -> SdkResult<VerifyReport> {
        let mut entries = Vec::new();
        for name in self.list()? {
            let status = match validate_filename(&name)
                .map_err(Into::into)
                .and_then(|valid| self.read_payload(&valid))
            {
                Ok(_) => FileStatus::Ok,
                Err(e) => {
                    tracing::warn!(file = %name, error = %e, "profile failed verification");
                    FileStatus::Failed {
                        kind: e.kind(),
                        reason: e.to_string(),
                    }
                }
            };
            entries.push(VerifyEntry { name, status });
        }
        Ok(VerifyReport { entries })
    }
}
