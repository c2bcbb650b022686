//! CSV sink for decision records
//!
//! Each decision becomes one line under [`CSV_HEADER`]. The log is buffered;
//! call [`DecisionLog::flush`] after each game so an interrupted experiment
//! keeps the games it finished.

use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    decision::{Decision, CSV_HEADER},
    PmctsError, Result,
};

/// A decision log file
pub struct DecisionLog {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl DecisionLog {
    /// Opens `path` for writing, truncating it unless `append` is set
    pub fn create<P: AsRef<Path>>(path: P, append: bool) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut options = OpenOptions::new();
        options.create(true);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }

        let file = options.open(&path).map_err(|source| PmctsError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Ok(DecisionLog {
            path,
            writer: BufWriter::new(file),
        })
    }

    /// Returns the path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the column header line
    pub fn write_header(&mut self) -> Result<()> {
        self.write_line(CSV_HEADER)
    }

    /// Writes one decision as a CSV line
    pub fn write_decision(&mut self, decision: &Decision) -> Result<()> {
        self.write_line(&decision.to_csv())
    }

    /// Writes a raw line followed by a newline
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line).map_err(|source| self.io_error(source))
    }

    /// Flushes buffered lines to disk
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: std::io::Error) -> PmctsError {
        PmctsError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}
