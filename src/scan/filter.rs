//! Name and size filtering for scanned entries

use std::path::Path;

use glob::Pattern;

use crate::error::{Result, ScanError};

/// Entry filter built from `--ignore` glob patterns, matched against file names.
#[derive(Debug, Clone, Default)]
pub struct NameFilter {
    patterns: Vec<(String, Pattern)>,
}

impl NameFilter {
    /// Compile the given patterns. Fails on the first invalid one.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|raw| {
                Pattern::new(raw)
                    .map(|p| (raw.clone(), p))
                    .map_err(|source| ScanError::Pattern {
                        pattern: raw.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Check if a path should be skipped based on its file name.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let name = match path.file_name() {
            Some(n) => n.to_string_lossy(),
            None => return false,
        };

        self.patterns
            .iter()
            .any(|(raw, pattern)| name == raw.as_str() || pattern.matches(&name))
    }
}

/// Strict comparison: a file exactly at the threshold is not small.
pub fn is_below_threshold(size: u64, max_size: u64) -> bool {
    size < max_size
}
