use serde::Serialize;

use crate::error::ErrorKind;

/// Outcome of checking one file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    Ok,
    Failed { kind: ErrorKind, reason: String },
}

#[derive(Clone, Debug, Serialize)]
pub struct VerifyEntry {
    pub name: String,
    #[serde(flatten)]
    pub status: FileStatus,
}

/// Integrity report over every listed profile file.
#[derive(Clone, Debug, Default, Serialize)]
pub struct VerifyReport {
    pub entries: Vec<VerifyEntry>,
}

impl VerifyReport {
    pub fn ok_count(&self) -> usize {
        self.entries.iter().filter(|e| e.status == FileStatus::Ok).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &VerifyEntry> {
        self.entries.iter().filter(|e| e.status != FileStatus::Ok)
    }

    pub fn all_ok(&self) -> bool {
        self.failed().next().is_none()
    }
}
