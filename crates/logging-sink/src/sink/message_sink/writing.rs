use super::{ColorMode, MessageSink};
use crate::color::{Color, wrap};
use std::io::{self, Write};

impl<W> MessageSink<W>
where
    W: Write,
{
    /// Writes `text` as given.
    ///
    /// `color` is applied only when the sink's [`ColorMode`] is
    /// [`ColorMode::Always`]. The escape sequence brackets the text together
    /// with the terminator it carries.
    pub(crate) fn write(&mut self, text: &str, color: Option<Color>) -> io::Result<()> {
        match (self.color_mode, color) {
            (ColorMode::Always, Some(color)) => {
                self.writer.write_all(wrap(text, Some(color), None).as_bytes())
            }
            _ => self.writer.write_all(text.as_bytes()),
        }
    }

    /// Flushes the underlying writer.
    pub(crate) fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
