use super::{ColorMode, MessageSink};

impl<W> MessageSink<W> {
    /// Creates a sink over `writer` rendering colors per `color_mode`.
    #[must_use]
    pub(crate) const fn new(writer: W, color_mode: ColorMode) -> Self {
        Self { writer, color_mode }
    }
}
