//! Output sink for generated binaries.
//!
//! The file is created (or truncated) when the sink is opened, before any
//! buffer exists. One buffer is written and flushed, then the handle is
//! dropped. A failed write leaves whatever reached the file in place; there
//! is no cleanup.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::fill::FillBuffer;

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to open {0}: {1}")]
    Open(PathBuf, std::io::Error),
    #[error("failed to write {0}: {1}")]
    Write(PathBuf, std::io::Error),
}

/// An open, truncated output file awaiting exactly one buffer.
#[derive(Debug)]
pub struct OutputSink {
    file: File,
    path: PathBuf,
}

impl OutputSink {
    /// Open `path` for writing, creating it or truncating existing content.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, OutputError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|e| OutputError::Open(path.clone(), e))?;
        tracing::debug!(path = %path.display(), "output opened");
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the whole buffer, flush, and close. Returns bytes written.
    pub fn write(mut self, buffer: &FillBuffer) -> Result<u64, OutputError> {
        self.file
            .write_all(buffer.as_bytes())
            .map_err(|e| OutputError::Write(self.path.clone(), e))?;
        self.file
            .flush()
            .map_err(|e| OutputError::Write(self.path.clone(), e))?;

        let written = buffer.len() as u64;
        tracing::info!(
            path = %self.path.display(),
            bytes = written,
            order = %buffer.order(),
            "binary written"
        );
        Ok(written)
    }
}
