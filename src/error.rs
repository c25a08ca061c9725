//! Error type for directory scanning

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot access '{}': No such file or directory", .0.display())]
    RootNotFound(PathBuf),

    #[error("cannot stat '{}': {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' is not valid UTF-8 text: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("invalid ignore pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("skipping unreadable entry: {0}")]
    Walk(#[from] ignore::Error),

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl ScanError {
    /// Whether this error concerns a single file and may be skipped with `--keep-going`.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            ScanError::Metadata { .. } | ScanError::Read { .. } | ScanError::Decode { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
