#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/cli/src/lib.rs
//!
//! # Overview
//!
//! `cli` implements the `diaglog` command-line front-end. It exposes three
//! subcommands on top of the workspace libraries:
//!
//! - `decode <CODE>... [--locale ID] [--verbose]` renders status codes through
//!   [`status::StatusDecoder`], one `<hex> <message>` line per code.
//! - `emit [--level L] [--threshold T] [--sinks S] [--file-prefix P] <TEXT>...`
//!   configures the process-wide [`logging::LogContext`] and logs one event.
//! - `dump --prefix P <FILE>` copies a file's bytes through
//!   [`logging::dump_bytes`] and prints the dump path.
//!
//! # Design
//!
//! [`run`] accepts an argument iterator together with handles for standard
//! output and error so tests can drive the front-end in-process. Parsing uses
//! the `clap` builder API ([`clap_command`]); the parsed [`Invocation`] is
//! handed to [`execute`]. `emit` and `dump` start from
//! [`logging::LoggerConfig::from_env`] so the `DIAGLOG_*` variables provide
//! defaults that command-line flags override.
//!
//! # Invariants
//!
//! - `run` never panics; failures surface as non-zero exit codes.
//! - Exit status is `0` on success, `1` for usage or parse errors, and `2`
//!   for I/O failures.
//! - `--help` and `--version` print to standard output and exit with `0`.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = cli::run(["diaglog", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(status, 0);
//! assert!(String::from_utf8(stdout).unwrap().starts_with("diaglog "));
//! assert!(stderr.is_empty());
//! ```
//!
//! # See also
//!
//! - `src/bin/diaglog.rs` for the binary that wires [`run`] into `main`.

mod command;
mod error;
mod execute;

use std::ffi::OsString;
use std::io::Write;

pub use command::{
    DecodeArgs, DumpArgs, EmitArgs, Invocation, PROGRAM_NAME, clap_command, parse_args,
};
pub use error::{CliError, EXIT_IO, EXIT_SUCCESS, EXIT_USAGE};
pub use execute::{decode, dump, emit, execute};

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Runs the CLI using the provided argument iterator and output handles.
///
/// Returns the process exit code that should be used by the caller.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    #[cfg(feature = "tracing")]
    logging::init_tracing(logging::global());

    let result = parse_args(arguments)
        .map_err(CliError::from)
        .and_then(|invocation| execute(invocation, stdout));

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(CliError::Usage(error)) if !error.use_stderr() => {
            if write!(stdout, "{}", error.render()).is_err() {
                return EXIT_IO;
            }
            EXIT_SUCCESS
        }
        Err(CliError::Usage(error)) => {
            let _ = write!(stderr, "{}", error.render());
            EXIT_USAGE
        }
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            error.exit_code()
        }
    }
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(u8::try_from(clamped).unwrap_or(u8::MAX))
}
