//! crates/cli/src/error.rs
//! Failures surfaced by the front-end and their exit codes.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit code for a successful invocation.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for usage and parse failures.
pub const EXIT_USAGE: i32 = 1;
/// Exit code for I/O failures.
pub const EXIT_IO: i32 = 2;

/// Error produced while running a subcommand.
#[derive(Debug, Error)]
pub enum CliError {
    /// The command line could not be parsed.
    #[error("{0}")]
    Usage(#[from] clap::Error),

    /// Logger configuration from the environment was invalid.
    #[error(transparent)]
    Config(#[from] logging::ConfigError),

    /// An input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A dump file could not be written.
    #[error("failed to dump data: {0}")]
    Dump(#[source] io::Error),

    /// Writing to standard output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) | Self::Config(_) => EXIT_USAGE,
            Self::Read { .. } | Self::Dump(_) | Self::Output(_) => EXIT_IO,
        }
    }
}
