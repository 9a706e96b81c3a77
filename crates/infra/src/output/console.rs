use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use letter_stats_ports::LineSink;
use letter_stats_shared_kernel::{InfrastructureError, Result};

/// Writes report lines to standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(io::stdout().lock(), "{line}")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        io::stdout().flush()?;
        Ok(())
    }
}

/// Writes report lines to any `Write` implementor.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<BufWriter<File>> {
    /// Create (or truncate) `path` and write into it.
    ///
    /// # Errors
    ///
    /// `InfrastructureError::Output` when the file cannot be created.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| InfrastructureError::Output {
            message: format!("cannot create '{}'", path.display()),
            source: Some(Box::new(e)),
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
