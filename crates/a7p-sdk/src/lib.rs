//! High-level API for A7P profile files.
//!
//! [`ProfileService`] composes the filename policy, storage, checksum guard
//! and codecs into the load/store/delete/list flows. This is the main entry
//! point for the server and the CLI.

pub mod error;
pub mod service;
pub mod verify;

pub use error::{ErrorKind, SdkError, SdkResult};
pub use service::ProfileService;
pub use verify::{FileStatus, VerifyEntry, VerifyReport};

// Re-export key types
pub use a7p_store::{BlobStore, DirectoryStore, FileName, InMemoryBlobStore};
pub use a7p_types::{Payload, Profile};
