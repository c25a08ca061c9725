//! Directory scanning logic
//!
//! `SmallFileWalker` visits every regular file under a root in a stable
//! order, stats it, and hands files below the size threshold to a
//! `ScanOutput` sink as it goes. Only one file is open at a time.

mod config;
mod entry;
mod filter;
mod walker;

// Re-export public types
pub use config::{DEFAULT_MAX_SIZE, ScanConfig};
pub use entry::{FileEntry, ScanSummary, SmallFile};
pub use filter::{NameFilter, is_below_threshold};
pub use walker::{FileEntries, ScanOutput, SmallFileWalker, read_small_file};
