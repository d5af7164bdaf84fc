//! crates/logging/src/context.rs
//!
//! Shared logger state and the sink fan-out.
//!
//! A [`LogContext`] owns the threshold, the active sinks, the open log file,
//! and the callback behind a single mutex. [`configure`](LogContext::configure)
//! replaces the whole state; every finished event takes one
//! [`Snapshot`] and dispatches from it. Only the file append runs under the
//! lock. Console and debug-channel writes and the callback run outside it.

use std::fmt;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use logging_sink::{
    ColorMode, ConsoleSink, DebugChannel, FileSink, HostDebugChannel, LOG_EXTENSION,
    dated_file_name, local_date,
};

use crate::color::color_for;
use crate::config::{LogCallback, LoggerConfig};
use crate::event::LogEvent;
use crate::severity::Severity;
use crate::sink_flags::{Sink, SinkFlags};

/// Sent to the debug channel when a line cannot be appended to the log file.
pub const FILE_WRITE_FAILURE: &str = "failed to write log line to file";

#[derive(Default)]
struct State {
    threshold: Severity,
    sinks: SinkFlags,
    file_path: Option<PathBuf>,
    file: Option<FileSink>,
    callback: Option<LogCallback>,
}

/// Read-only view of a context's configuration.
#[derive(Clone, Default)]
pub struct Snapshot {
    /// Most verbose severity that is still emitted.
    pub threshold: Severity,
    /// Active sinks after configuration was normalized.
    pub sinks: SinkFlags,
    /// Resolved log file path when [`SinkFlags::FILE`] is active.
    pub file_path: Option<PathBuf>,
    /// Registered callback when [`SinkFlags::CALLBACK`] is active.
    pub callback: Option<LogCallback>,
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("threshold", &self.threshold)
            .field("sinks", &self.sinks)
            .field("file_path", &self.file_path)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

/// Logger state shared by every event created from it.
///
/// A new context is silent: threshold [`Severity::None`] and no sinks.
///
/// # Examples
///
/// ```
/// use logging::{LogContext, LoggerConfig, Severity, SinkFlags};
/// use std::sync::{Arc, Mutex};
///
/// let lines = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&lines);
///
/// let context = LogContext::new();
/// context.configure(
///     LoggerConfig::new(Severity::Warning, SinkFlags::CALLBACK)
///         .with_callback(move |line| sink.lock().unwrap().push(line.to_owned())),
/// );
///
/// let mut event = context.begin(Severity::Error);
/// event.append("disk full");
/// event.finish();
///
/// // Dropping the event finishes it as well.
/// context.begin(Severity::Info).append("ignored");
///
/// let lines = lines.lock().unwrap();
/// assert_eq!(lines.len(), 1);
/// assert!(lines[0].starts_with("[Err]"));
/// assert!(lines[0].contains(" disk full"));
/// ```
pub struct LogContext {
    state: Mutex<State>,
    console: Mutex<ConsoleSink>,
    debug_channel: Box<dyn DebugChannel>,
}

impl LogContext {
    /// Creates a silent context writing to stdout and the host debug channel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
            console: Mutex::new(ConsoleSink::stdout()),
            debug_channel: Box::new(HostDebugChannel),
        }
    }

    /// Redirects the console sink into `writer`. Colors are still rendered.
    pub fn with_console_writer<W>(self, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            console: Mutex::new(ConsoleSink::new(Box::new(writer), ColorMode::Always)),
            ..self
        }
    }

    /// Replaces the debug channel.
    pub fn with_debug_channel<C>(self, channel: C) -> Self
    where
        C: DebugChannel + 'static,
    {
        Self {
            debug_channel: Box::new(channel),
            ..self
        }
    }

    /// Replaces the whole configuration.
    ///
    /// [`SinkFlags::FILE`] is cleared when the prefix is empty. Otherwise the
    /// file `<prefix><dd>_<mm>.log` is created, or emptied when it already
    /// exists, and each later line is appended to it. When opening
    /// fails the sink stays active and every write reports
    /// [`FILE_WRITE_FAILURE`] on the debug channel. Requesting the console
    /// prepares it for UTF-8 and escape sequences, ignoring failures.
    pub fn configure(&self, config: LoggerConfig) {
        let LoggerConfig {
            threshold,
            mut sinks,
            file_prefix,
            callback,
        } = config;

        if file_prefix.is_empty() {
            sinks.set(SinkFlags::FILE, false);
        }

        let (file_path, file) = if sinks.contains(SinkFlags::FILE) {
            let path = dated_file_name(&file_prefix, local_date(), LOG_EXTENSION);
            let file = FileSink::create(&path).ok();
            (Some(path), file)
        } else {
            (None, None)
        };

        let callback = callback.filter(|_| sinks.contains(SinkFlags::CALLBACK));

        if sinks.contains(SinkFlags::CONSOLE) {
            let _ = platform::console::prepare_utf8_console();
        }

        *self.lock_state() = State {
            threshold,
            sinks,
            file_path,
            file,
            callback,
        };
    }

    /// Copies the current configuration.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let state = self.lock_state();
        Snapshot {
            threshold: state.threshold,
            sinks: state.sinks,
            file_path: state.file_path.clone(),
            callback: state.callback.clone(),
        }
    }

    /// Current threshold.
    #[must_use]
    pub fn threshold(&self) -> Severity {
        self.lock_state().threshold
    }

    /// Current sinks.
    #[must_use]
    pub fn sinks(&self) -> SinkFlags {
        self.lock_state().sinks
    }

    /// Reports whether an event at `severity` would pass the threshold.
    #[must_use]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.threshold().permits(severity)
    }

    /// Starts an event at `severity`. The header is written immediately.
    pub fn begin(&self, severity: Severity) -> LogEvent<'_> {
        LogEvent::new(self, severity)
    }

    /// Gates a finished line and fans it out. Returns whether it was emitted.
    pub(crate) fn dispatch(&self, severity: Severity, text: &str) -> bool {
        let snapshot = self.snapshot();
        if !snapshot.threshold.permits(severity) {
            return false;
        }

        for sink in snapshot.sinks {
            match sink {
                Sink::DebugChannel => self.debug_channel.output(text),
                Sink::Console => self.lock_console().emit(text, color_for(severity)),
                Sink::File => self.append_to_file(text),
                Sink::Callback => {
                    if let Some(callback) = &snapshot.callback {
                        invoke_callback(callback, text);
                    }
                }
            }
        }
        true
    }

    fn append_to_file(&self, text: &str) {
        let written = {
            let mut state = self.lock_state();
            state
                .file
                .as_mut()
                .is_some_and(|file| file.append(text).is_ok())
        };
        if !written {
            self.debug_channel.output(FILE_WRITE_FAILURE);
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_console(&self) -> MutexGuard<'_, ConsoleSink> {
        self.console.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LogContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogContext")
            .field("config", &self.snapshot())
            .finish_non_exhaustive()
    }
}

/// Runs the callback. A panic raised while this thread is already unwinding
/// would abort the process, so in that case it is caught and dropped.
fn invoke_callback(callback: &LogCallback, text: &str) {
    if std::thread::panicking() {
        let _ = panic::catch_unwind(AssertUnwindSafe(|| callback(text)));
    } else {
        callback(text);
    }
}

static GLOBAL: OnceLock<LogContext> = OnceLock::new();

/// Process-wide context used by the logging macros when no context is named.
///
/// Created silent on first use.
pub fn global() -> &'static LogContext {
    GLOBAL.get_or_init(LogContext::new)
}

/// Configures the [`global`] context.
///
/// `callback` is only kept when `sinks` contains [`SinkFlags::CALLBACK`].
pub fn init_logger<F>(threshold: Severity, sinks: SinkFlags, file_prefix: &str, callback: Option<F>)
where
    F: Fn(&str) + Send + Sync + 'static,
{
    let mut config = LoggerConfig::new(threshold, sinks).with_file_prefix(file_prefix);
    if let Some(callback) = callback {
        config = config.with_callback(callback);
    }
    global().configure(config);
}

/// Allocates or attaches a console when the process has none.
///
/// Returns `true` when a new console was created. Hosts without the concept
/// report `false`.
pub fn init_console() -> bool {
    platform::console::attach_console().unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Default)]
    struct Channel(Arc<Mutex<Vec<String>>>);

    impl DebugChannel for Channel {
        fn output(&self, text: &str) {
            self.0.lock().unwrap().push(text.to_owned());
        }
    }

    #[test]
    fn new_context_is_silent() {
        let context = LogContext::new();
        let snapshot = context.snapshot();
        assert_eq!(snapshot.threshold, Severity::None);
        assert!(snapshot.sinks.is_empty());
        assert!(snapshot.file_path.is_none());
        assert!(snapshot.callback.is_none());
    }

    #[test]
    fn file_sink_requires_prefix() {
        let context = LogContext::new();
        context.configure(LoggerConfig::new(
            Severity::Info,
            SinkFlags::FILE | SinkFlags::DEBUG_CHANNEL,
        ));
        assert_eq!(context.sinks(), SinkFlags::DEBUG_CHANNEL);
        assert!(context.snapshot().file_path.is_none());
    }

    #[test]
    fn callback_dropped_without_callback_sink() {
        let context = LogContext::new();
        context.configure(
            LoggerConfig::new(Severity::Info, SinkFlags::NONE).with_callback(|_| {}),
        );
        assert!(context.snapshot().callback.is_none());
    }

    #[test]
    fn configure_overwrites_previous_state() {
        let context = LogContext::new();
        context.configure(
            LoggerConfig::new(Severity::Debug, SinkFlags::CALLBACK).with_callback(|_| {}),
        );
        context.configure(LoggerConfig::new(Severity::Error, SinkFlags::DEBUG_CHANNEL));

        let snapshot = context.snapshot();
        assert_eq!(snapshot.threshold, Severity::Error);
        assert_eq!(snapshot.sinks, SinkFlags::DEBUG_CHANNEL);
        assert!(snapshot.callback.is_none());
    }

    #[test]
    fn dispatch_reports_gating() {
        let channel = Channel::default();
        let context = LogContext::new().with_debug_channel(channel.clone());
        context.configure(
            LoggerConfig::new(Severity::Warning, SinkFlags::DEBUG_CHANNEL),
        );

        assert!(context.dispatch(Severity::Error, "kept\n"));
        assert!(!context.dispatch(Severity::Info, "dropped\n"));
        assert_eq!(*channel.0.lock().unwrap(), ["kept\n"]);
    }

    #[test]
    fn unopened_file_reports_to_debug_channel() {
        let dir = tempfile::tempdir().expect("tempdir");
        let prefix = dir.path().join("missing").join("app_");
        let channel = Channel::default();
        let context = LogContext::new().with_debug_channel(channel.clone());
        context.configure(
            LoggerConfig::new(Severity::Info, SinkFlags::FILE)
                .with_file_prefix(prefix.to_string_lossy()),
        );

        assert!(context.sinks().contains(SinkFlags::FILE));
        context.dispatch(Severity::Info, "line\n");
        assert_eq!(*channel.0.lock().unwrap(), [FILE_WRITE_FAILURE]);
    }

    #[test]
    fn callback_panic_is_contained_while_unwinding() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let callback: LogCallback = Arc::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            panic!("callback failure");
        });

        struct InvokeOnDrop(LogCallback);
        impl Drop for InvokeOnDrop {
            fn drop(&mut self) {
                invoke_callback(&self.0, "line\n");
            }
        }

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _guard = InvokeOnDrop(Arc::clone(&callback));
            panic!("outer failure");
        }));

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
