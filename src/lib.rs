//! Crumbs - print every small file in a directory tree

pub mod error;
pub mod output;
pub mod scan;
pub mod size;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, ScanError};
pub use output::{JsonFormatter, OutputConfig, PlainFormatter, SEPARATOR_WIDTH};
pub use scan::{
    DEFAULT_MAX_SIZE, FileEntry, ScanConfig, ScanOutput, ScanSummary, SmallFile, SmallFileWalker,
};
pub use size::{format_size, parse_size};
