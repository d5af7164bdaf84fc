mod message_sink;

pub use message_sink::ColorMode;
pub(crate) use message_sink::MessageSink;
