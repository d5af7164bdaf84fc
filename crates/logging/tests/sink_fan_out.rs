//! End-to-end dispatch through every sink.

use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use logging::{FILE_WRITE_FAILURE, LogContext, LoggerConfig, Severity, SinkFlags};
use logging_sink::LINE_TERMINATOR;
use test_support::{
    CallbackSpy, FailingWriter, MemoryDebugChannel, SharedBuffer, files_with_stem, prefix_in,
    tempdir,
};

fn console_context(threshold: Severity) -> (LogContext, SharedBuffer) {
    let console = SharedBuffer::new();
    let context = LogContext::new().with_console_writer(console.clone());
    context.configure(LoggerConfig::new(threshold, SinkFlags::CONSOLE));
    (context, console)
}

#[test]
fn console_error_is_tagged_timestamped_and_red() {
    let (context, console) = console_context(Severity::Info);

    let mut event = context.begin(Severity::Error);
    event.append("disk full");
    event.finish();

    let output = console.text();
    let body = output
        .strip_prefix("\x1b[31m[Err]")
        .expect("red error prefix");
    let body = body.strip_suffix("\x1b[0m").expect("reset suffix");
    assert_eq!(
        body.len(),
        "hh:mm:ss disk full".len() + LINE_TERMINATOR.len()
    );
    assert!(body.ends_with(&format!(" disk full{LINE_TERMINATOR}")));
}

#[test]
fn console_debug_is_filtered_under_info() {
    let (context, console) = console_context(Severity::Info);
    context.begin(Severity::Debug).append("verbose detail");
    assert!(console.is_empty());
}

#[test]
fn each_severity_gets_its_color() {
    let (context, console) = console_context(Severity::Debug);
    for (severity, escape) in [
        (Severity::Warning, "\x1b[33m[Wrn]"),
        (Severity::Info, "\x1b[32m[Inf]"),
        (Severity::Debug, "\x1b[36m[Dbg]"),
    ] {
        context.begin(severity).append("x");
        assert!(console.text().contains(escape), "{severity}");
    }
}

#[test]
fn all_threshold_emits_uncolored_all_events() {
    let (context, console) = console_context(Severity::All);
    context.begin(Severity::All).append("everything");
    let output = console.text();
    assert!(!output.contains('\x1b'));
    assert!(output.contains(" everything"));
}

#[test]
fn failing_console_never_reaches_the_caller() {
    let spy = CallbackSpy::new();
    let context = LogContext::new().with_console_writer(FailingWriter);
    context.configure(
        LoggerConfig::new(Severity::Info, SinkFlags::CONSOLE | SinkFlags::CALLBACK)
            .with_callback(spy.callback()),
    );

    let mut event = context.begin(Severity::Error);
    event.append("still delivered");
    assert!(event.finish());
    assert_eq!(spy.count(), 1);
}

#[test]
fn file_sink_appends_one_line_per_event() {
    let dir = tempdir();
    let prefix = prefix_in(dir.path(), "service_");
    let context = LogContext::new();
    context.configure(
        LoggerConfig::new(Severity::Info, SinkFlags::FILE).with_file_prefix(&prefix),
    );

    let path = context.snapshot().file_path.expect("file path resolved");
    assert_eq!(files_with_stem(dir.path(), "service_"), [path.clone()]);
    let name = path.file_name().and_then(|n| n.to_str());
    let name = name.expect("utf-8 name");
    assert_eq!(name.len(), "service_dd_mm.log".len());
    assert!(name.ends_with(".log"));

    fs::write(&path, "earlier\n").expect("seed");
    context.begin(Severity::Warning).append("first");
    context.begin(Severity::Error).append("second");
    context.begin(Severity::Debug).append("filtered");

    let contents = fs::read_to_string(&path).expect("read log");
    assert!(contents.starts_with("earlier\n"));
    let lines: Vec<_> = contents.lines().skip(1).collect();
    assert_eq!(lines.len(), 2);
    assert!(
        lines[0].starts_with("[Wrn]") && lines[0].ends_with(" first")
    );
    assert!(
        lines[1].starts_with("[Err]") && lines[1].ends_with(" second")
    );
    assert!(contents.ends_with(LINE_TERMINATOR));
}

#[test]
fn reconfiguring_starts_a_fresh_log_file() {
    let dir = tempdir();
    let prefix = prefix_in(dir.path(), "restart_");
    let config = || LoggerConfig::new(Severity::Info, SinkFlags::FILE).with_file_prefix(&prefix);

    let context = LogContext::new();
    context.configure(config());
    let path = context.snapshot().file_path.expect("file path");
    fs::write(&path, "stale line from previous run\n").expect("seed");

    context.configure(config());
    context.begin(Severity::Info).append("fresh");

    let contents = fs::read_to_string(&path).expect("read");
    assert!(!contents.contains("stale"));
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.starts_with("[Inf]"));
    assert!(contents.ends_with(&format!(" fresh{LINE_TERMINATOR}")));
}

#[test]
fn concurrent_events_land_as_whole_lines() {
    const THREADS: usize = 8;
    const EVENTS: usize = 200;

    let dir = tempdir();
    let prefix = prefix_in(dir.path(), "threads_");
    let context = LogContext::new();
    context.configure(
        LoggerConfig::new(Severity::Info, SinkFlags::FILE).with_file_prefix(&prefix),
    );

    let padding = "x".repeat(480);
    std::thread::scope(|scope| {
        for thread in 0..THREADS {
            let context = &context;
            let padding = padding.as_str();
            scope.spawn(move || {
                for event in 0..EVENTS {
                    let mut line = context.begin(Severity::Info);
                    line.append(format!("t{thread} e{event} {padding} end"));
                    line.finish();
                }
            });
        }
    });

    let path = context.snapshot().file_path.expect("file path");
    let contents = fs::read_to_string(path).expect("read");
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), THREADS * EVENTS);
    for line in &lines {
        assert!(line.starts_with("[Inf]"), "torn line start: {line:.40}");
        assert!(line.ends_with(&format!("{padding} end")), "torn line end");
    }
    for thread in 0..THREADS {
        let marker = format!(" t{thread} e");
        assert_eq!(
            lines.iter().filter(|line| line.contains(&marker)).count(),
            EVENTS
        );
    }
}

#[test]
fn unwritable_file_reports_on_debug_channel() {
    let dir = tempdir();
    let prefix = prefix_in(&dir.path().join("no_such_dir"), "x_");
    let channel = MemoryDebugChannel::new();
    let context = LogContext::new().with_debug_channel(channel.clone());
    context.configure(
        LoggerConfig::new(Severity::Info, SinkFlags::FILE).with_file_prefix(prefix),
    );

    context.begin(Severity::Error).append("lost");
    assert_eq!(channel.messages(), [FILE_WRITE_FAILURE]);
}

#[test]
fn debug_channel_receives_raw_text() {
    let channel = MemoryDebugChannel::new();
    let context = LogContext::new().with_debug_channel(channel.clone());
    context.configure(LoggerConfig::new(Severity::Debug, SinkFlags::DEBUG_CHANNEL));

    context.begin(Severity::Info).append("plain");
    let messages = channel.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("[Inf]"));
    assert!(messages[0].ends_with(&format!(" plain{LINE_TERMINATOR}")));
    assert!(!messages[0].contains('\x1b'));
}

#[test]
fn every_active_sink_receives_the_same_line() {
    let dir = tempdir();
    let channel = MemoryDebugChannel::new();
    let console = SharedBuffer::new();
    let spy = CallbackSpy::new();
    let context = LogContext::new()
        .with_console_writer(console.clone())
        .with_debug_channel(channel.clone());
    context.configure(
        LoggerConfig::new(Severity::Info, SinkFlags::ALL)
            .with_file_prefix(prefix_in(dir.path(), "all_"))
            .with_callback(spy.callback()),
    );

    context.begin(Severity::Info).append("shared");

    let line = spy.lines().pop().expect("callback line");
    assert_eq!(channel.messages(), [line.clone()]);
    assert_eq!(console.text(), format!("\x1b[32m{line}\x1b[0m"));
    let path = context.snapshot().file_path.expect("file path");
    assert_eq!(fs::read_to_string(path).expect("read"), line);
}

#[test]
fn events_above_threshold_reach_no_sink() {
    let spy = CallbackSpy::new();
    let channel = MemoryDebugChannel::new();
    let context = LogContext::new().with_debug_channel(channel.clone());
    let sinks = SinkFlags::CALLBACK | SinkFlags::DEBUG_CHANNEL;
    let config = LoggerConfig::new(Severity::Error, sinks).with_callback(spy.callback());
    context.configure(config);

    for severity in [
        Severity::Warning,
        Severity::Info,
        Severity::Debug,
        Severity::All,
        Severity::None,
    ] {
        context.begin(severity).append("dropped");
    }
    assert_eq!(spy.count(), 0);
    assert!(channel.messages().is_empty());
}

#[test]
fn callback_panic_propagates_to_the_call_site() {
    let context = LogContext::new();
    context.configure(
        LoggerConfig::new(Severity::Info, SinkFlags::CALLBACK)
            .with_callback(|_| panic!("callback rejected line")),
    );

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut event = context.begin(Severity::Error);
        event.append("boom");
        event.finish();
    }));
    assert!(result.is_err());
}

#[test]
fn callback_may_log_through_the_same_context() {
    let context = Arc::new(LogContext::new());
    let spy = CallbackSpy::new();
    let record = spy.callback();
    let reentered = Arc::new(AtomicBool::new(false));

    let inner = Arc::downgrade(&context);
    let flag = Arc::clone(&reentered);
    context.configure(
        LoggerConfig::new(Severity::Info, SinkFlags::CALLBACK).with_callback(move |line| {
            record(line);
            if !flag.swap(true, Ordering::SeqCst) {
                if let Some(context) = inner.upgrade() {
                    context.begin(Severity::Info).append("nested");
                }
            }
        }),
    );

    context.begin(Severity::Info).append("outer");
    let lines = spy.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains(" outer"));
    assert!(lines[1].contains(" nested"));
}
