//! Filename policy for profile files.
//!
//! A valid name:
//! - Must not contain `..` anywhere (checked as a plain substring, so
//!   `..a7p.a7p` and `a..b.a7p` are rejected too)
//! - Must end with `.a7p`
//! - Must not contain a path separator (`/` or `\`)
//!
//! Every filesystem operation takes a [`FileName`], and the only way to get
//! one is through [`validate_filename`].

use std::fmt;
use std::str::FromStr;

use a7p_types::PROFILE_EXTENSION;

use crate::error::{StoreError, StoreResult};

const SEPARATORS: &[char] = &['/', '\\'];

/// A filename that passed [`validate_filename`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileName(String);

impl FileName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for FileName {
    type Err = StoreError;

    fn from_str(s: &str) -> StoreResult<Self> {
        validate_filename(s)
    }
}

/// Validate an untrusted filename, returning it unchanged if it is allowed.
///
/// # Examples
///
/// ```
/// use a7p_store::validate_filename;
///
/// assert!(validate_filename("a.a7p").is_ok());
/// assert!(validate_filename("../a.a7p").is_err());
/// assert!(validate_filename("a.txt").is_err());
/// ```
pub fn validate_filename(name: &str) -> StoreResult<FileName> {
    // Must not contain `..` (parent traversal).
    if name.contains("..") {
        return Err(invalid(name, "must not contain '..'"));
    }

    if !name.ends_with(PROFILE_EXTENSION) {
        return Err(invalid(name, &format!("must end with '{PROFILE_EXTENSION}'")));
    }

    // `Path::join` replaces the base on an absolute path, so separators are
    // refused outright.
    if name.contains(SEPARATORS) {
        return Err(invalid(name, "must not contain a path separator"));
    }

    Ok(FileName(name.to_string()))
}

/// Returns `true` if a directory entry name carries the profile extension.
pub fn has_profile_extension(name: &str) -> bool {
    name.ends_with(PROFILE_EXTENSION)
}

fn invalid(name: &str, reason: &str) -> StoreError {
    StoreError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
