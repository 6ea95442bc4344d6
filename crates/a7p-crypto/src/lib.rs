//! Checksum guard for A7P profile files.
//!
//! Every `.a7p` file starts with the lowercase hex MD5 digest of the bytes
//! that follow it. [`ChecksumGuard`] prepends that digest on write and
//! validates and strips it on read.
//!
//! The digest is an integrity fence against truncation and accidental
//! corruption. It is unkeyed and MD5 is not collision resistant, so it is not
//! a signature and says nothing about who wrote a file. The algorithm is part
//! of the on-disk format: swapping it makes every existing file unreadable.

pub mod digest;
pub mod guard;

pub use digest::{ContentDigest, Md5Hex};
pub use guard::{ChecksumGuard, GuardError, GuardResult};
