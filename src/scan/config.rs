//! Configuration types for directory scanning

/// Files strictly smaller than this many bytes are printed.
pub const DEFAULT_MAX_SIZE: u64 = 150;

/// Configuration for scan behavior.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Size threshold in bytes; a file is printed when `size < max_size`.
    pub max_size: u64,
    pub max_depth: Option<usize>,
    pub ignore_patterns: Vec<String>,
    /// Skip hidden entries and honor .gitignore/.ignore files.
    pub respect_ignore_files: bool,
    /// Report per-file read failures as warnings instead of aborting.
    pub keep_going: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            max_depth: None,
            ignore_patterns: Vec::new(),
            respect_ignore_files: false,
            keep_going: false,
        }
    }
}
