use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn diaglog() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_diaglog"));
    command
        .env_remove("DIAGLOG_LEVEL")
        .env_remove("DIAGLOG_SINKS")
        .env_remove("DIAGLOG_FILE_PREFIX");
    command
}

#[test]
fn help_lists_subcommands() {
    diaglog()
        .arg("--help")
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("decode"))
        .stdout(predicate::str::contains("emit"))
        .stdout(predicate::str::contains("dump"));
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    diaglog()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));
}

#[cfg(unix)]
#[test]
fn decode_renders_errno_text() {
    diaglog()
        .args(["decode", "2", "0x7FFFFFFF"])
        .assert()
        .success()
        .stdout("2 No such file or directory\n7fffffff \n");
}

#[test]
fn decode_rejects_malformed_codes() {
    diaglog()
        .args(["decode", "twelve"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("twelve"));
}

#[test]
fn emit_writes_a_tagged_console_line() {
    diaglog()
        .args(["emit", "--level", "error", "--sinks", "console"])
        .args(["disk", "full"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Err]"))
        .stdout(predicate::str::contains("disk full"));
}

#[test]
fn emit_above_threshold_prints_nothing() {
    diaglog()
        .args(["emit", "--level", "debug", "--threshold", "warning"])
        .args(["--sinks", "console", "x"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn emit_starts_a_fresh_dated_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let prefix = dir.path().join("service_");
    let prefix = prefix.to_str().unwrap();

    for text in ["first", "second"] {
        diaglog()
            .args(["emit", "--level", "info", "--sinks", "file"])
            .args(["--file-prefix", prefix, text])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    let logs: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "log"))
        .collect();
    assert_eq!(logs.len(), 1);
    let contents = fs::read_to_string(&logs[0]).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(
        lines[0].starts_with("[Inf]") && lines[0].ends_with("second")
    );
}

#[test]
fn emit_reads_the_environment() {
    diaglog()
        .env("DIAGLOG_LEVEL", "error")
        .env("DIAGLOG_SINKS", "console")
        .args(["emit", "--level", "info", "suppressed"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    diaglog()
        .env("DIAGLOG_LEVEL", "loud")
        .args(["emit", "text"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("DIAGLOG_LEVEL"));
}

#[test]
fn dump_copies_the_input_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("payload.raw");
    fs::write(&input, b"\x00\x01binary\xff").unwrap();
    let prefix = dir.path().join("crash_");

    let output = diaglog()
        .args(["dump", "--prefix"])
        .arg(&prefix)
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let printed = String::from_utf8(output.stdout).unwrap();
    let dumped = std::path::PathBuf::from(printed.trim_end());
    assert_eq!(dumped.extension().and_then(|ext| ext.to_str()), Some("bin"));
    assert_eq!(fs::read(dumped).unwrap(), b"\x00\x01binary\xff");
}

#[test]
fn dump_of_a_missing_file_fails_with_io_status() {
    let dir = tempfile::tempdir().unwrap();
    diaglog()
        .args(["dump", "--prefix"])
        .arg(dir.path().join("crash_"))
        .arg(dir.path().join("absent.raw"))
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("diaglog: failed to read "));
}
