//! Plain text output formatter
//!
//! Writes one block per small file as soon as it is found:
//!
//! ```text
//! <path> (<size> bytes):
//! <content>
//! --------------------
//! ```

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::scan::{ScanOutput, ScanSummary, SmallFile};
use crate::size::format_size;

use super::config::OutputConfig;

/// Number of dashes in the line closing each block.
pub const SEPARATOR_WIDTH: usize = 20;

/// Streaming output formatter - outputs directly to stdout without buffering.
pub struct PlainFormatter<W: WriteColor = StandardStream> {
    config: OutputConfig,
    out: W,
}

impl PlainFormatter<StandardStream> {
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::with_writer(config, StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> PlainFormatter<W> {
    pub fn with_writer(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_header(&mut self, file: &SmallFile) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(self.out, "{}", file.path.display())?;
        self.out.reset()?;
        write!(self.out, " ")?;
        self.out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(self.out, "({} bytes)", file.size)?;
        self.out.reset()?;
        writeln!(self.out, ":")
    }
}

impl<W: WriteColor> ScanOutput for PlainFormatter<W> {
    fn output_file(&mut self, file: &SmallFile) -> io::Result<()> {
        self.write_header(file)?;
        writeln!(self.out, "{}", file.content)?;
        writeln!(self.out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        Ok(())
    }

    fn finish(&mut self, summary: &ScanSummary) -> io::Result<()> {
        if self.config.summary {
            write!(
                self.out,
                "{} files printed ({}), {} skipped",
                summary.printed,
                format_size(summary.printed_bytes),
                summary.skipped
            )?;
            if summary.failed > 0 {
                write!(self.out, ", {} failed", summary.failed)?;
            }
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}
