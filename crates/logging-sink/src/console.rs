//! crates/logging-sink/src/console.rs
//! Colored console sink with best-effort delivery.

use std::fmt;
use std::io::{self, Write};

use crate::color::Color;
use crate::sink::{ColorMode, MessageSink};

/// Console destination for finished log lines.
///
/// Lines arrive with their terminator already attached and are written
/// verbatim. A failed write is
/// followed by a single `"\n"` probe so a partially written line does not run
/// into the next one; the outcome of the probe is ignored.
pub struct ConsoleSink {
    sink: MessageSink<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    /// Creates a sink writing colored text to the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()), ColorMode::Always)
    }

    /// Creates a sink over an arbitrary writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>, color_mode: ColorMode) -> Self {
        Self {
            sink: MessageSink::new(writer, color_mode),
        }
    }

    /// Writes `text`, wrapped in `color` when the sink renders colors.
    pub fn emit(&mut self, text: &str, color: Option<Color>) {
        let written = self
            .sink
            .write(text, color)
            .and_then(|()| self.sink.flush());
        if written.is_err() {
            let _ = self.sink.get_mut().write_all(b"\n");
        }
    }

    /// Returns the sink's [`ColorMode`].
    #[must_use]
    pub const fn color_mode(&self) -> ColorMode {
        self.sink.color_mode()
    }
}

impl fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("color_mode", &self.sink.color_mode())
            .finish_non_exhaustive()
    }
}
