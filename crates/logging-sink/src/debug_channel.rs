//! crates/logging-sink/src/debug_channel.rs
//! Host debug channel abstraction.

/// Destination for text sent to the host debug channel.
///
/// Delivery is best-effort and infallible from the caller's point of view.
pub trait DebugChannel: Send + Sync {
    /// Sends `text` to the channel.
    fn output(&self, text: &str);
}

/// [`DebugChannel`] backed by [`platform::debug_output::output_debug_string`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HostDebugChannel;

impl DebugChannel for HostDebugChannel {
    fn output(&self, text: &str) {
        platform::debug_output::output_debug_string(text);
    }
}
