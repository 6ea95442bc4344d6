//! Profile file storage for A7P.
//!
//! Files live flat in one configured directory and are addressed by a
//! [`FileName`] that has passed [`validate_filename`]. Nothing in this crate
//! touches the filesystem with an unvalidated name.
//!
//! # Storage Backends
//!
//! All backends implement the [`BlobStore`] trait:
//!
//! - [`DirectoryStore`] -- one directory on the local filesystem
//! - [`InMemoryBlobStore`] -- `BTreeMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. Blobs are opaque: the store never interprets file contents.
//! 2. Writes replace the whole file. There is no temp-file-and-rename, so a
//!    crash mid-write can leave a truncated file behind.
//! 3. No locking: concurrent writes to one name race and the last one wins.
//! 4. All I/O errors are propagated, never silently ignored.

pub mod error;
pub mod fs;
pub mod memory;
pub mod names;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use fs::DirectoryStore;
pub use memory::InMemoryBlobStore;
pub use names::{validate_filename, FileName};
pub use traits::BlobStore;
