//! crates/logging/src/dump.rs
//! Raw byte dumps next to the log files.

use std::fs;
use std::io;
use std::path::PathBuf;

use logging_sink::{DUMP_EXTENSION, dated_file_name, local_date};

use crate::context::LogContext;
use crate::severity::Severity;

/// Message logged when a dump cannot be written.
pub const DUMP_FAILURE: &str = "Failed to dump data";

/// Writes `bytes` to `<prefix><dd>_<mm>.bin`, replacing an existing dump
/// from the same day. Returns the path written.
///
/// On failure an [`Severity::Error`] event is logged through `context` before
/// the error is returned.
pub fn dump_bytes(context: &LogContext, prefix: &str, bytes: &[u8]) -> io::Result<PathBuf> {
    let path = dated_file_name(prefix, local_date(), DUMP_EXTENSION);
    match fs::write(&path, bytes) {
        Ok(()) => Ok(path),
        Err(error) => {
            context
                .begin(Severity::Error)
                .append(crate::here!())
                .append(" ")
                .append(DUMP_FAILURE)
                .append(": ")
                .append(path.as_path())
                .append(" (")
                .append(error.to_string())
                .append(")");
            Err(error)
        }
    }
}
