//! File writer implementation

use crate::core::{LoggerError, Record, Result, Writer};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends formatted records to a file.
///
/// The file is created if missing and never truncated. Every record is
/// flushed as soon as it is written.
pub struct FileWriter {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl FileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_closed(&self) -> bool {
        self.writer.is_none()
    }
}

impl Writer for FileWriter {
    fn write(&mut self, _record: &Record, data: &[u8]) -> Result<usize> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("file", "writer is closed"))?;

        writer.write_all(data)?;
        writer.flush()?;
        Ok(data.len())
    }

    fn close(&mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileWriter {
    fn drop(&mut self) {
        if let Some(ref mut writer) = self.writer {
            let _ = writer.flush();
        }
    }
}
