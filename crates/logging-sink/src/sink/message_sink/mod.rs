use std::fmt;

mod constructors;
mod writing;

/// Whether a sink honors the color passed with each line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ColorMode {
    /// Wrap text in ANSI escape sequences when a color is supplied.
    Always,
    /// Ignore colors and write plain text. Files and pipes use this mode.
    #[default]
    Never,
}

/// Writes finished log lines into an [`std::io::Write`] target.
///
/// Lines already carry their terminator, so the sink writes them verbatim,
/// wrapped in the line's color escape sequence when the [`ColorMode`] allows.
pub(crate) struct MessageSink<W> {
    writer: W,
    color_mode: ColorMode,
}

impl<W> MessageSink<W> {
    /// Returns the current [`ColorMode`].
    pub(crate) const fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Mutably borrows the underlying writer.
    pub(crate) fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }
}

impl<W> fmt::Debug for MessageSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink")
            .field("writer", &self.writer)
            .field("color_mode", &self.color_mode)
            .finish()
    }
}
