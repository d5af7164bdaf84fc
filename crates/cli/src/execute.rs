//! crates/cli/src/execute.rs
//! Subcommand handlers.

use std::fs;
use std::io::Write;

use logging::{LogContext, LoggerConfig, dump_bytes};
use status::{CatalogId, MessageHost, StatusDecoder};

use crate::command::{DecodeArgs, DumpArgs, EmitArgs, Invocation};
use crate::error::CliError;

/// Runs `invocation` against the process-wide log context and the OS decoder.
pub fn execute<Out: Write>(invocation: Invocation, stdout: &mut Out) -> Result<(), CliError> {
    match invocation {
        Invocation::Decode(args) => decode(&StatusDecoder::new(), &args, stdout),
        Invocation::Emit(args) => emit(logging::global(), LoggerConfig::from_env()?, args, stdout),
        Invocation::Dump(args) => {
            let context = logging::global();
            context.configure(LoggerConfig::from_env()?);
            dump(context, &args, stdout)
        }
    }
}

/// Writes one `"<hex> <message>"` line per code.
///
/// With `verbose`, the catalog the message came from is appended in brackets.
pub fn decode<H, Out>(
    decoder: &StatusDecoder<H>,
    args: &DecodeArgs,
    stdout: &mut Out,
) -> Result<(), CliError>
where
    H: MessageHost,
    Out: Write,
{
    for &code in &args.codes {
        let decoded = decoder.decode(code, args.locale);
        if args.verbose {
            let catalog = decoded.catalog.map_or("system", CatalogId::name);
            writeln!(stdout, "{code:x} {} [{catalog}]", decoded.message)?;
        } else {
            writeln!(stdout, "{code:x} {}", decoded.message)?;
        }
    }
    Ok(())
}

/// Applies `args` over `base`, configures `context`, and logs one event.
///
/// With `--file-prefix` given and no explicit `--sinks`, the file sink is
/// added to the environment's sinks.
pub fn emit<Out: Write>(
    context: &LogContext,
    base: LoggerConfig,
    args: EmitArgs,
    stdout: &mut Out,
) -> Result<(), CliError> {
    let mut config = base;
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    } else if config.threshold == logging::Severity::None {
        config.threshold = logging::Severity::All;
    }
    if let Some(prefix) = args.file_prefix {
        config.file_prefix = prefix;
        if args.sinks.is_none() {
            config.sinks |= logging::SinkFlags::FILE;
        }
    }
    if let Some(sinks) = args.sinks {
        config.sinks = sinks;
    } else if config.sinks.is_empty() {
        config.sinks = logging::SinkFlags::CONSOLE;
    }
    context.configure(config);

    let mut event = context.begin(args.level);
    event.append(args.text);
    if !event.finish() {
        #[cfg(feature = "tracing")]
        tracing::debug!(level = %args.level, "event suppressed by threshold");
    }
    stdout.flush()?;
    Ok(())
}

/// Copies the file named in `args` through [`dump_bytes`] and prints the dump path.
pub fn dump<Out: Write>(
    context: &LogContext,
    args: &DumpArgs,
    stdout: &mut Out,
) -> Result<(), CliError> {
    let bytes = fs::read(&args.input).map_err(|source| CliError::Read {
        path: args.input.clone(),
        source,
    })?;
    let path = dump_bytes(context, &args.prefix, &bytes).map_err(CliError::Dump)?;
    #[cfg(feature = "tracing")]
    tracing::info!(path = %path.display(), bytes = bytes.len(), "dump written");
    writeln!(stdout, "{}", path.display())?;
    Ok(())
}
