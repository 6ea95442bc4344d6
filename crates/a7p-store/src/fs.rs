use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{StoreError, StoreResult};
use crate::names::{has_profile_extension, FileName};
use crate::traits::BlobStore;

/// Profile files in a single local directory.
///
/// Sub-directories are never created or entered.
#[derive(Clone, Debug)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Like [`new`](Self::new), but fails unless `root` is an existing
    /// directory.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        let meta = fs::metadata(&root)?;
        if !meta.is_dir() {
            return Err(StoreError::Io(std::io::Error::new(
                ErrorKind::InvalidInput,
                format!("{} is not a directory", root.display()),
            )));
        }
        Ok(Self { root })
    }

    fn path_of(&self, name: &FileName) -> PathBuf {
        self.root.join(name.as_str())
    }
}

fn map_not_found(name: &FileName, e: std::io::Error) -> StoreError {
    if e.kind() == ErrorKind::NotFound {
        StoreError::NotFound(name.to_string())
    } else {
        StoreError::Io(e)
    }
}

impl BlobStore for DirectoryStore {
    fn read(&self, name: &FileName) -> StoreResult<Vec<u8>> {
        fs::read(self.path_of(name)).map_err(|e| map_not_found(name, e))
    }

    fn write(&self, name: &FileName, data: &[u8]) -> StoreResult<()> {
        let path = self.path_of(name);
        tracing::debug!(path = %path.display(), bytes = data.len(), "writing profile file");
        fs::write(&path, data)?;
        Ok(())
    }

    fn delete(&self, name: &FileName) -> StoreResult<()> {
        fs::remove_file(self.path_of(name)).map_err(|e| map_not_found(name, e))
    }

    fn list(&self) -> StoreResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) if has_profile_extension(&name) => names.push(name),
                Ok(_) => {}
                Err(raw) => {
                    tracing::warn!("skipping non UTF-8 file name {:?}", raw);
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn exists(&self, name: &FileName) -> StoreResult<bool> {
        Ok(self.path_of(name).is_file())
    }
}
