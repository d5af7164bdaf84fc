//! crates/logging-sink/src/file.rs
//! Log file sink: emptied when opened, appended to per line.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use crate::sink::{ColorMode, MessageSink};

/// Log file opened for appending.
///
/// Opening creates the file or empties an existing one, so every
/// configuration starts a fresh log. Each line is then appended after the
/// ones already written.
#[derive(Debug)]
pub struct FileSink {
    sink: MessageSink<File>,
    path: PathBuf,
}

impl FileSink {
    /// Creates `path`, or empties it when it exists, and opens it for appending.
    ///
    /// # Errors
    ///
    /// Returns the I/O error reported while opening or truncating the file.
    pub fn create(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.set_len(0)?;
        Ok(Self {
            sink: MessageSink::new(file, ColorMode::Never),
            path,
        })
    }

    /// Appends `text` exactly as given and flushes it to the file.
    ///
    /// # Errors
    ///
    /// Returns the I/O error reported by the write or the flush.
    pub fn append(&mut self, text: &str) -> io::Result<()> {
        self.sink.write(text, None)?;
        self.sink.flush()
    }

    /// Path the sink was opened with.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
