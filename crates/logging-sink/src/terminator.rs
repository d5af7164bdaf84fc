//! crates/logging-sink/src/terminator.rs
//! Host line terminator appended to every finished log line.

/// The host's native line terminator.
#[cfg(windows)]
pub const LINE_TERMINATOR: &str = "\r\n";
/// The host's native line terminator.
#[cfg(not(windows))]
pub const LINE_TERMINATOR: &str = "\n";
