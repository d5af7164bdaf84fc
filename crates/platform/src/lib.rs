//! crates/platform/src/lib.rs
//!
//! # Overview
//!
//! `platform` isolates every host call that the diagnostic pipeline depends
//! on but does not define: the debug-output channel, console preparation and
//! attachment, the OS message-catalog primitive, the system locale query, and
//! the thread's last-error slot. Higher crates deny `unsafe_code`; this crate
//! is the single place where foreign functions are invoked.
//!
//! # Hosts
//!
//! - Windows: `OutputDebugStringW`, `SetConsoleOutputCP`/`SetConsoleMode`,
//!   `AllocConsole`, `FormatMessageW`, `LoadLibraryW`/`FreeLibrary`,
//!   `GetLocaleInfoEx`, `GetLastError`/`SetLastError`.
//! - Unix: `syslog(3)` at debug priority for the debug channel, `errno` for
//!   the last-error slot, and the C library's error strings as the only
//!   message catalog. Catalog libraries cannot be loaded.
//!
//! Every operation is best-effort. Failures are reported through
//! [`PlatformError`] or `None` and never panic.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod console;
pub mod debug_output;
mod error;
pub mod last_error;
pub mod message;

pub use error::PlatformError;
