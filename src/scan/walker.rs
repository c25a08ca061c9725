//! SmallFileWalker - walks a tree and streams files below the size threshold

use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use ignore::{Walk, WalkBuilder};

use crate::error::{Result, ScanError};

use super::config::ScanConfig;
use super::entry::{FileEntry, ScanSummary, SmallFile};
use super::filter::{NameFilter, is_below_threshold};

/// Callback for streaming output - receives each small file as it is found.
pub trait ScanOutput {
    fn output_file(&mut self, file: &SmallFile) -> io::Result<()>;

    /// Report a non-fatal problem. Goes to stderr unless overridden.
    fn warn(&mut self, message: &str) -> io::Result<()> {
        eprintln!("crumbs: warning: {}", message);
        Ok(())
    }

    fn finish(&mut self, summary: &ScanSummary) -> io::Result<()>;
}

/// Lazy sequence of regular files under a root, in file-name order per directory.
pub struct FileEntries {
    inner: Walk,
}

impl Iterator for FileEntries {
    type Item = Result<FileEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(ScanError::Walk(e))),
            };
            let Some(file_type) = entry.file_type() else {
                continue;
            };

            if file_type.is_file() {
                return Some(Ok(FileEntry::new(entry.into_path())));
            }
            if !file_type.is_symlink() {
                continue;
            }

            // Links count when they resolve to a regular file; broken links drop out
            match fs::metadata(entry.path()) {
                Ok(meta) if meta.is_file() => {
                    return Some(Ok(FileEntry::new(entry.into_path())));
                }
                Ok(_) => continue,
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(source) => {
                    return Some(Err(ScanError::Metadata {
                        path: entry.into_path(),
                        source,
                    }));
                }
            }
        }
    }
}

/// Walks a directory tree one file at a time, reading only files below
/// the configured threshold.
pub struct SmallFileWalker {
    config: ScanConfig,
    names: NameFilter,
}

impl SmallFileWalker {
    pub fn new(config: ScanConfig) -> Result<Self> {
        let names = NameFilter::new(&config.ignore_patterns)?;
        Ok(Self { config, names })
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Every regular file reachable from `root`, including files directly in it.
    pub fn entries(&self, root: &Path) -> Result<FileEntries> {
        match fs::symlink_metadata(root) {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ScanError::RootNotFound(root.to_path_buf()));
            }
            Err(source) => {
                return Err(ScanError::Metadata {
                    path: root.to_path_buf(),
                    source,
                });
            }
        }

        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(self.config.respect_ignore_files)
            .require_git(false)
            .follow_links(false)
            .max_depth(self.config.max_depth)
            .sort_by_file_name(|a, b| a.cmp(b));

        if !self.names.is_empty() {
            let names = self.names.clone();
            builder.filter_entry(move |entry| entry.depth() == 0 || !names.is_ignored(entry.path()));
        }

        Ok(FileEntries {
            inner: builder.build(),
        })
    }

    /// Walk and stream each small file to `output`. Returns the scan counts.
    pub fn walk_streaming<O: ScanOutput + ?Sized>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> Result<ScanSummary> {
        let mut summary = ScanSummary::default();

        for item in self.entries(root)? {
            let outcome = match item {
                Ok(entry) => {
                    summary.visited += 1;
                    read_small_file(&entry, self.config.max_size)
                }
                // Unreadable directories are skipped, not fatal
                Err(err @ ScanError::Walk(_)) => {
                    output.warn(&err.to_string())?;
                    continue;
                }
                Err(err) => Err(err),
            };

            match outcome {
                Ok(Some(file)) => {
                    summary.printed += 1;
                    summary.printed_bytes += file.size;
                    output.output_file(&file)?;
                }
                Ok(None) => summary.skipped += 1,
                Err(err) if self.config.keep_going && err.is_per_file() => {
                    summary.failed += 1;
                    output.warn(&err.to_string())?;
                }
                Err(err) => return Err(err),
            }
        }

        output.finish(&summary)?;
        Ok(summary)
    }

    /// Walk and collect every small file in memory.
    pub fn collect(&self, root: &Path) -> Result<Vec<SmallFile>> {
        let mut collector = Collector::default();
        self.walk_streaming(root, &mut collector)?;
        Ok(collector.files)
    }
}

#[derive(Default)]
struct Collector {
    files: Vec<SmallFile>,
}

impl ScanOutput for Collector {
    fn output_file(&mut self, file: &SmallFile) -> io::Result<()> {
        self.files.push(file.clone());
        Ok(())
    }

    fn finish(&mut self, _summary: &ScanSummary) -> io::Result<()> {
        Ok(())
    }
}

/// Stat a file and, if it is below `max_size`, read and decode it.
///
/// Returns `Ok(None)` for files at or above the threshold; those are never opened.
pub fn read_small_file(entry: &FileEntry, max_size: u64) -> Result<Option<SmallFile>> {
    let path = entry.path();
    let metadata = fs::metadata(path).map_err(|source| ScanError::Metadata {
        path: path.to_path_buf(),
        source,
    })?;

    let size = metadata.len();
    if !is_below_threshold(size, max_size) {
        return Ok(None);
    }

    let bytes = fs::read(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| ScanError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Some(SmallFile {
        path: path.to_path_buf(),
        size,
        content: normalize_newlines(text),
        modified: metadata.modified().ok().map(DateTime::<Utc>::from),
    }))
}

/// Translate CRLF and lone CR line endings to LF.
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
