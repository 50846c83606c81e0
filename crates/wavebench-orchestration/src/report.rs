//! Incremental report file writer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use wavebench_core::{RunResult, REPORT_HEADER};

/// Writes the header on creation, then one flushed line per result.
pub struct ReportWriter<W: Write> {
    inner: W,
    lines: usize,
}

impl ReportWriter<BufWriter<File>> {
    /// Create (truncating) the report file at `path` and write the header.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> ReportWriter<W> {
    /// Wrap a writer and write the header line.
    pub fn new(mut inner: W) -> io::Result<Self> {
        writeln!(inner, "{REPORT_HEADER}")?;
        inner.flush()?;
        Ok(Self { inner, lines: 0 })
    }

    /// Append one result line and flush it.
    pub fn append(&mut self, result: &RunResult) -> io::Result<()> {
        writeln!(self.inner, "{}", result.report_line())?;
        self.inner.flush()?;
        self.lines += 1;
        Ok(())
    }

    /// Result lines written so far, header excluded.
    #[must_use]
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
