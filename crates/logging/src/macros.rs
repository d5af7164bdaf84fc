//! crates/logging/src/macros.rs
//! Call-site macros for the four event severities.
//!
//! The `log_*!` macros take `format!`-style arguments. The `logstream_*!`
//! macros take a comma-separated list of values, each appended in turn. Both
//! prefix the event with the call site and a space, and both accept an
//! optional leading `context =>` to log through a specific
//! [`LogContext`](crate::LogContext) instead of [`global`](crate::global).
//!
//! With the `logger` feature disabled every macro compiles to `false` and no
//! event is built.

#[cfg(feature = "logger")]
#[doc(hidden)]
#[macro_export]
macro_rules! __log_format {
    ($context:expr, $severity:expr, $($arg:tt)+) => {{
        let context: &$crate::LogContext = $context;
        let mut event = context.begin($severity);
        event.append($crate::here!());
        event.append(" ");
        event.append(::std::format_args!($($arg)+));
        event.finish()
    }};
}

#[cfg(feature = "logger")]
#[doc(hidden)]
#[macro_export]
macro_rules! __log_stream {
    ($context:expr, $severity:expr, $($value:expr),+ $(,)?) => {{
        let context: &$crate::LogContext = $context;
        let mut event = context.begin($severity);
        event.append($crate::here!());
        event.append(" ");
        $( event.append($value); )+
        event.finish()
    }};
}

// Without `logger` the arguments are type-checked but never evaluated.

#[cfg(not(feature = "logger"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __log_format {
    ($context:expr, $severity:expr, $($arg:tt)+) => {{
        if false {
            let _: &$crate::LogContext = $context;
            let _: $crate::Severity = $severity;
            let _ = ::std::format_args!($($arg)+);
        }
        false
    }};
}

#[cfg(not(feature = "logger"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __log_stream {
    ($context:expr, $severity:expr, $($value:expr),+ $(,)?) => {{
        if false {
            let _: &$crate::LogContext = $context;
            let _: $crate::Severity = $severity;
            $( let _ = &$value; )+
        }
        false
    }};
}

/// Logs a formatted [`Severity::Error`](crate::Severity::Error) event.
///
/// Evaluates to `true` when the event passed the threshold.
///
/// ```
/// use logging::{LogContext, LoggerConfig, Severity, SinkFlags, log_error};
///
/// let context = LogContext::new();
/// context.configure(LoggerConfig::new(Severity::Error, SinkFlags::NONE));
/// let passed = log_error!(&context => "open failed: {}", 2);
/// assert_eq!(passed, cfg!(feature = "logger"));
/// ```
#[macro_export]
macro_rules! log_error {
    ($context:expr => $($arg:tt)+) => {
        $crate::__log_format!($context, $crate::Severity::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log_format!($crate::global(), $crate::Severity::Error, $($arg)+)
    };
}

/// Logs a formatted [`Severity::Warning`](crate::Severity::Warning) event.
#[macro_export]
macro_rules! log_warning {
    ($context:expr => $($arg:tt)+) => {
        $crate::__log_format!($context, $crate::Severity::Warning, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log_format!($crate::global(), $crate::Severity::Warning, $($arg)+)
    };
}

/// Logs a formatted [`Severity::Info`](crate::Severity::Info) event.
#[macro_export]
macro_rules! log_info {
    ($context:expr => $($arg:tt)+) => {
        $crate::__log_format!($context, $crate::Severity::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log_format!($crate::global(), $crate::Severity::Info, $($arg)+)
    };
}

/// Logs a formatted [`Severity::Debug`](crate::Severity::Debug) event.
#[macro_export]
macro_rules! log_debug {
    ($context:expr => $($arg:tt)+) => {
        $crate::__log_format!($context, $crate::Severity::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log_format!($crate::global(), $crate::Severity::Debug, $($arg)+)
    };
}

/// Logs an error event built from a list of values.
///
/// ```
/// use logging::{LogContext, LoggerConfig, Severity, SinkFlags, logstream_error};
///
/// let context = LogContext::new();
/// context.configure(LoggerConfig::new(Severity::Debug, SinkFlags::NONE));
/// let bytes: &[u8] = b"\x01\x02";
/// logstream_error!(&context => "read ", bytes.len(), " bytes, ok=", false);
/// ```
#[macro_export]
macro_rules! logstream_error {
    ($context:expr => $($value:expr),+ $(,)?) => {
        $crate::__log_stream!($context, $crate::Severity::Error, $($value),+)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::__log_stream!($crate::global(), $crate::Severity::Error, $($value),+)
    };
}

/// Logs a warning event built from a list of values.
#[macro_export]
macro_rules! logstream_warning {
    ($context:expr => $($value:expr),+ $(,)?) => {
        $crate::__log_stream!($context, $crate::Severity::Warning, $($value),+)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::__log_stream!($crate::global(), $crate::Severity::Warning, $($value),+)
    };
}

/// Logs an info event built from a list of values.
#[macro_export]
macro_rules! logstream_info {
    ($context:expr => $($value:expr),+ $(,)?) => {
        $crate::__log_stream!($context, $crate::Severity::Info, $($value),+)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::__log_stream!($crate::global(), $crate::Severity::Info, $($value),+)
    };
}

/// Logs a debug event built from a list of values.
#[macro_export]
macro_rules! logstream_debug {
    ($context:expr => $($value:expr),+ $(,)?) => {
        $crate::__log_stream!($context, $crate::Severity::Debug, $($value),+)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::__log_stream!($crate::global(), $crate::Severity::Debug, $($value),+)
    };
}
