//! Types produced by a scan

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A regular file visited during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
}

impl FileEntry {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the file, or an empty path for a bare file name.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    pub fn file_name(&self) -> &OsStr {
        self.path.file_name().unwrap_or_else(|| self.path.as_os_str())
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// A file below the size threshold, with its decoded text.
#[derive(Debug, Clone, Serialize)]
pub struct SmallFile {
    pub path: PathBuf,
    /// Size on disk in bytes, as reported by file metadata.
    pub size: u64,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

/// Counts collected over one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub visited: usize,
    pub printed: usize,
    pub printed_bytes: u64,
    pub skipped: usize,
    pub failed: usize,
}
