#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is a severity-gated diagnostic logger. Call sites open a
//! [`LogEvent`] from a [`LogContext`], append text and values to it, and the
//! finished line is pushed to every active sink: the host debug channel, the
//! colored console, a log file emptied on configuration and appended to per
//! line, and a user callback.
//!
//! # Design
//!
//! - [`Severity`] is both the level of an event and the threshold of a
//!   context. An event is emitted iff its severity is at or below the
//!   threshold; [`Severity::None`] events never are.
//! - [`SinkFlags`] is a bitfield of independent sinks. Every active sink
//!   receives the same rendered line.
//! - [`LogContext`] keeps its configuration behind one mutex.
//!   [`configure`](LogContext::configure) replaces it wholesale and each
//!   finished event reads one [`Snapshot`]. The process-wide context returned
//!   by [`global`] backs the macros; [`init_logger`] configures it.
//! - [`LogEvent`] writes its header (`[Err]12:34:56 `) on creation and
//!   dispatches exactly once, when [`finish`](LogEvent::finish) is called or
//!   when it goes out of scope.
//! - [`LogValue`] is the closed set of values an event can render.
//!
//! # Invariants
//!
//! - Sink failures never reach the caller. A failed file append is reported
//!   on the debug channel; a failed console write is followed by a newline.
//! - The callback runs outside every lock, so it may log again.
//! - Configuring [`SinkFlags::FILE`] without a prefix drops the file sink.
//!
//! # Examples
//!
//! ```
//! use logging::{LogContext, LoggerConfig, Severity, SinkFlags, log_error, log_debug};
//! use std::sync::{Arc, Mutex};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let context = LogContext::new();
//! context.configure(
//!     LoggerConfig::new(Severity::Info, SinkFlags::CALLBACK)
//!         .with_callback(move |line| sink.lock().unwrap().push(line.to_owned())),
//! );
//!
//! log_error!(&context => "disk {} full", "C:");
//! log_debug!(&context => "not shown");
//!
//! let seen = seen.lock().unwrap();
//! # if cfg!(feature = "logger") {
//! assert_eq!(seen.len(), 1);
//! assert!(seen[0].starts_with("[Err]"));
//! assert!(seen[0].contains("disk C: full"));
//! # }
//! ```
//!
//! # See also
//!
//! - `logging-sink` for the console, file, and debug-channel writers.
//! - `status` for rendering OS status codes into event text.

mod color;
mod config;
mod context;
mod dump;
mod error;
mod event;
mod location;
mod macros;
mod severity;
mod sink_flags;
#[cfg(feature = "tracing")]
mod tracing_bridge;
mod value;

pub use color::color_for;
pub use config::{FILE_PREFIX_VAR, LEVEL_VAR, LogCallback, LoggerConfig, SINKS_VAR};
pub use context::{FILE_WRITE_FAILURE, LogContext, Snapshot, global, init_console, init_logger};
pub use dump::{DUMP_FAILURE, dump_bytes};
pub use error::{ConfigError, ParseSeverityError, ParseSinkFlagsError};
pub use event::{EventState, LogEvent};
pub use location::{Line, LogLocation, format_location};
#[doc(hidden)]
pub use location::trim_function_path as __trim_function_path;
pub use severity::Severity;
pub use sink_flags::{Sink, SinkFlags, SinkIter};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{DiagLayer, init_tracing};
pub use value::LogValue;
