//! crates/cli/src/command.rs
//! `clap` command definition and conversion into [`Invocation`].

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, builder::OsStringValueParser, value_parser};
use logging::{Severity, SinkFlags};
use status::{ParseStatusCodeError, StatusCode};

/// Program name used in usage and help output.
pub const PROGRAM_NAME: &str = "diaglog";

/// Parsed `decode` request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodeArgs {
    /// Codes in command-line order.
    pub codes: Vec<StatusCode>,
    /// Language identifier; `None` uses the system default.
    pub locale: Option<u32>,
    /// Also report the catalog each message came from.
    pub verbose: bool,
}

/// Parsed `emit` request. Unset fields fall back to the environment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmitArgs {
    /// Severity of the emitted event.
    pub level: Severity,
    /// Context threshold.
    pub threshold: Option<Severity>,
    /// Active sinks.
    pub sinks: Option<SinkFlags>,
    /// Log file prefix.
    pub file_prefix: Option<String>,
    /// Event text; words are joined with single spaces.
    pub text: String,
}

/// Parsed `dump` request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DumpArgs {
    /// Prefix of the dump file name.
    pub prefix: String,
    /// File whose bytes are dumped.
    pub input: PathBuf,
}

/// Subcommand selected on the command line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Invocation {
    /// Render status codes as text.
    Decode(DecodeArgs),
    /// Configure the default context and log one event.
    Emit(EmitArgs),
    /// Copy a file's bytes into a dated dump file.
    Dump(DumpArgs),
}

fn parse_code(text: &str) -> Result<StatusCode, ParseStatusCodeError> {
    text.parse()
}

fn parse_locale(text: &str) -> Result<u32, ParseStatusCodeError> {
    parse_code(text).map(StatusCode::value)
}

/// Builds the `clap` command used for parsing.
pub fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .about("Emit diagnostic log lines and decode OS status codes.")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("decode")
                .about("Print '<hex> <message>' for each status code.")
                .arg(
                    Arg::new("code")
                        .value_name("CODE")
                        .help("Decimal, 0x-prefixed hex, or negative 32-bit code.")
                        .required(true)
                        .num_args(1..)
                        .allow_negative_numbers(true)
                        .value_parser(parse_code)
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("locale")
                        .long("locale")
                        .value_name("ID")
                        .help("Language identifier used for rendering.")
                        .value_parser(parse_locale),
                )
                .arg(
                    Arg::new("verbose")
                        .long("verbose")
                        .short('v')
                        .help("Report the message catalog for each code.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("emit")
                .about("Configure the default log context and emit one event.")
                .arg(
                    Arg::new("level")
                        .long("level")
                        .short('l')
                        .value_name("SEVERITY")
                        .help("Severity of the event.")
                        .default_value("info")
                        .value_parser(value_parser!(Severity)),
                )
                .arg(
                    Arg::new("threshold")
                        .long("threshold")
                        .value_name("SEVERITY")
                        .help("Most verbose severity that is emitted.")
                        .value_parser(value_parser!(Severity)),
                )
                .arg(
                    Arg::new("sinks")
                        .long("sinks")
                        .short('s')
                        .value_name("LIST")
                        .help("Comma-separated sinks: debug, console, file, callback, none, all.")
                        .value_parser(value_parser!(SinkFlags)),
                )
                .arg(
                    Arg::new("file-prefix")
                        .long("file-prefix")
                        .value_name("PREFIX")
                        .help("Log file prefix; the file is PREFIX<dd>_<mm>.log."),
                )
                .arg(
                    Arg::new("text")
                        .value_name("TEXT")
                        .required(true)
                        .num_args(1..)
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(
            Command::new("dump")
                .about("Copy FILE into a dated '<prefix><dd>_<mm>.bin' dump file.")
                .arg(
                    Arg::new("prefix")
                        .long("prefix")
                        .value_name("PREFIX")
                        .required(true),
                )
                .arg(
                    Arg::new("file")
                        .value_name("FILE")
                        .required(true)
                        .value_parser(OsStringValueParser::new()),
                ),
        )
}

/// Parses `arguments` (program name first) into an [`Invocation`].
pub fn parse_args<I, S>(arguments: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let mut matches = clap_command().try_get_matches_from(arguments)?;
    let Some((name, mut sub)) = matches.remove_subcommand() else {
        return Err(clap_command().error(
            clap::error::ErrorKind::MissingSubcommand,
            "a subcommand is required",
        ));
    };

    Ok(match name.as_str() {
        "decode" => Invocation::Decode(decode_args(&mut sub)),
        "emit" => Invocation::Emit(emit_args(&mut sub)),
        "dump" => Invocation::Dump(dump_args(&mut sub)),
        other => {
            return Err(clap_command().error(
                clap::error::ErrorKind::InvalidSubcommand,
                format!("unrecognised subcommand '{other}'"),
            ));
        }
    })
}

fn decode_args(matches: &mut ArgMatches) -> DecodeArgs {
    DecodeArgs {
        codes: matches
            .remove_many::<StatusCode>("code")
            .map(Iterator::collect)
            .unwrap_or_default(),
        locale: matches.remove_one::<u32>("locale"),
        verbose: matches.get_flag("verbose"),
    }
}

fn emit_args(matches: &mut ArgMatches) -> EmitArgs {
    let text: Vec<String> = matches
        .remove_many::<String>("text")
        .map(Iterator::collect)
        .unwrap_or_default();
    EmitArgs {
        level: matches
            .remove_one::<Severity>("level")
            .unwrap_or(Severity::Info),
        threshold: matches.remove_one::<Severity>("threshold"),
        sinks: matches.remove_one::<SinkFlags>("sinks"),
        file_prefix: matches.remove_one::<String>("file-prefix"),
        text: text.join(" "),
    }
}

fn dump_args(matches: &mut ArgMatches) -> DumpArgs {
    DumpArgs {
        prefix: matches.remove_one::<String>("prefix").unwrap_or_default(),
        input: matches
            .remove_one::<OsString>("file")
            .map(PathBuf::from)
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn command_definition_is_consistent() {
        clap_command().debug_assert();
    }

    #[test]
    fn decode_accepts_every_code_spelling() {
        let parsed = parse_args(["diaglog", "decode", "5", "0x80070005", "-2147024891"]).unwrap();
        let Invocation::Decode(args) = parsed else {
            panic!("expected decode");
        };
        assert_eq!(
            args.codes,
            vec![
                StatusCode::new(5),
                StatusCode::new(0x8007_0005),
                StatusCode::new(0x8007_0005),
            ]
        );
        assert_eq!(args.locale, None);
        assert!(!args.verbose);
    }

    #[test]
    fn decode_locale_accepts_hex() {
        let parsed = parse_args(["diaglog", "decode", "--locale", "0x409", "-v", "2"]).unwrap();
        assert_eq!(
            parsed,
            Invocation::Decode(DecodeArgs {
                codes: vec![StatusCode::new(2)],
                locale: Some(0x409),
                verbose: true,
            })
        );
    }

    #[test]
    fn decode_rejects_garbage_codes() {
        let error = parse_args(["diaglog", "decode", "0xZZ"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn emit_collects_text_and_overrides() {
        let parsed = parse_args([
            "diaglog",
            "emit",
            "--level",
            "warning",
            "--threshold",
            "debug",
            "--sinks",
            "console,file",
            "--file-prefix",
            "run_",
            "disk",
            "almost",
            "full",
        ])
        .unwrap();
        assert_eq!(
            parsed,
            Invocation::Emit(EmitArgs {
                level: Severity::Warning,
                threshold: Some(Severity::Debug),
                sinks: Some(SinkFlags::CONSOLE | SinkFlags::FILE),
                file_prefix: Some("run_".to_owned()),
                text: "disk almost full".to_owned(),
            })
        );
    }

    #[test]
    fn emit_defaults_to_info_and_environment() {
        let Invocation::Emit(args) = parse_args(["diaglog", "emit", "hello"]).unwrap() else {
            panic!("expected emit");
        };
        assert_eq!(args.level, Severity::Info);
        assert_eq!(args.threshold, None);
        assert_eq!(args.sinks, None);
        assert_eq!(args.file_prefix, None);
    }

    #[test]
    fn emit_rejects_unknown_sink() {
        let error = parse_args(["diaglog", "emit", "--sinks", "printer", "x"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ValueValidation);
        assert!(error.to_string().contains("printer"));
    }

    #[test]
    fn dump_requires_prefix() {
        let error = parse_args(["diaglog", "dump", "input.bin"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);

        let parsed = parse_args(["diaglog", "dump", "--prefix", "crash_", "input.bin"]).unwrap();
        assert_eq!(
            parsed,
            Invocation::Dump(DumpArgs {
                prefix: "crash_".to_owned(),
                input: PathBuf::from("input.bin"),
            })
        );
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        assert!(parse_args(["diaglog"]).is_err());
    }
}
