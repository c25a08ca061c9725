//! JSON output formatting

use std::io::{self, Write};

use crate::scan::{ScanOutput, ScanSummary, SmallFile};

/// Buffers matches and writes them as one pretty-printed JSON array on finish.
pub struct JsonFormatter<W: Write = io::Stdout> {
    files: Vec<SmallFile>,
    out: W,
}

impl JsonFormatter<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for JsonFormatter<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> JsonFormatter<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            files: Vec::new(),
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ScanOutput for JsonFormatter<W> {
    fn output_file(&mut self, file: &SmallFile) -> io::Result<()> {
        self.files.push(file.clone());
        Ok(())
    }

    fn finish(&mut self, _summary: &ScanSummary) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, &self.files)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
