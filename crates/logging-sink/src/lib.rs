#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the destinations a rendered log line can be pushed
//! to: the colored console, an append-only log file, and the host debug
//! channel. The sinks know nothing about severities or thresholds; they accept
//! finished text plus an optional [`Color`] and are driven by the `logging`
//! crate's dispatcher.
//!
//! # Design
//!
//! An internal `MessageSink` wraps an [`std::io::Write`] implementor and
//! knows how to wrap finished lines in ANSI color sequences ([`ColorMode`]).
//! [`ConsoleSink`] and [`FileSink`] build on it: the console variant swallows
//! write failures after emitting a single newline probe, and the file variant
//! empties its target when created and appends every later line. [`DebugChannel`]
//! abstracts the host debug channel so tests can observe what would have been
//! sent there.
//!
//! # Invariants
//!
//! - [`wrap`] with no foreground color returns its input unchanged.
//! - [`FileSink::create`] empties the file; every later write lands after the
//!   lines already written.
//! - Lines are written verbatim; they carry their own [`LINE_TERMINATOR`].
//! - [`ConsoleSink::emit`] never returns an error.
//!
//! # Examples
//!
//! Render a colored line into a shared buffer:
//!
//! ```
//! use logging_sink::{Color, ColorMode, ConsoleSink};
//! use std::io::{self, Write};
//! use std::sync::{Arc, Mutex};
//!
//! #[derive(Clone, Default)]
//! struct Buffer(Arc<Mutex<Vec<u8>>>);
//!
//! impl Write for Buffer {
//!     fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
//!         self.0.lock().unwrap().extend_from_slice(buf);
//!         Ok(buf.len())
//!     }
//!
//!     fn flush(&mut self) -> io::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let buffer = Buffer::default();
//! let mut console = ConsoleSink::new(Box::new(buffer.clone()), ColorMode::Always);
//! console.emit("disk full\n", Some(Color::Red));
//!
//! assert_eq!(buffer.0.lock().unwrap().as_slice(), b"\x1b[31mdisk full\n\x1b[0m");
//! ```
//!
//! # See also
//!
//! - `logging` for the event builder and the context that drives these sinks.
//! - `platform` for the host calls behind [`HostDebugChannel`].

mod color;
mod console;
mod debug_channel;
mod file;
mod naming;
mod sink;
mod terminator;

pub use color::{Color, wrap};
pub use console::ConsoleSink;
pub use debug_channel::{DebugChannel, HostDebugChannel};
pub use file::FileSink;
pub use naming::{DUMP_EXTENSION, LOG_EXTENSION, dated_file_name, local_date};
pub use sink::ColorMode;
pub use terminator::LINE_TERMINATOR;
