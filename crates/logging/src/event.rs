//! crates/logging/src/event.rs
//! Per-statement event builder.

use std::fmt;

use logging_sink::LINE_TERMINATOR;
use time::OffsetDateTime;
use time::macros::format_description;

use crate::context::LogContext;
use crate::severity::Severity;
use crate::value::LogValue;

/// Lifecycle of a [`LogEvent`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EventState {
    /// Accepting appended content.
    Building,
    /// Terminated and being gated or dispatched.
    Finalizing,
    /// Handed to the sinks, or discarded by the threshold.
    Dispatched,
}

/// Text of one log statement, dispatched exactly once.
///
/// The event is created by [`LogContext::begin`], which writes the header
/// `<tag><HH:MM:SS> `. Content is added with [`append`](Self::append) or
/// through [`fmt::Write`]. The event is finished either by
/// [`finish`](Self::finish) or when it is dropped, on every exit path of the
/// enclosing scope.
pub struct LogEvent<'a> {
    context: &'a LogContext,
    severity: Severity,
    timestamp: OffsetDateTime,
    text: String,
    state: EventState,
}

impl<'a> LogEvent<'a> {
    pub(crate) fn new(context: &'a LogContext, severity: Severity) -> Self {
        let timestamp = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        let mut text = String::with_capacity(64);
        text.push_str(severity.tag());
        push_clock(&mut text, timestamp);
        text.push(' ');

        Self {
            context,
            severity,
            timestamp,
            text,
            state: EventState::Building,
        }
    }

    /// Appends the textual form of `value`.
    pub fn append<'v>(&mut self, value: impl Into<LogValue<'v>>) -> &mut Self {
        use fmt::Write as _;

        if self.state == EventState::Building {
            let _ = write!(self.text, "{}", value.into());
        }
        self
    }

    /// Severity the event was created with.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Creation time.
    #[must_use]
    pub const fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    /// Text accumulated so far, header included.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> EventState {
        self.state
    }

    /// Terminates the line and dispatches it. Returns whether any sink was
    /// eligible, that is whether the event passed the threshold.
    pub fn finish(mut self) -> bool {
        self.finalize()
    }

    fn finalize(&mut self) -> bool {
        if self.state != EventState::Building {
            return false;
        }

        self.state = EventState::Finalizing;
        self.text.push_str(LINE_TERMINATOR);
        let emitted = self.context.dispatch(self.severity, &self.text);
        self.state = EventState::Dispatched;
        emitted
    }
}

impl fmt::Write for LogEvent<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }
}

impl Drop for LogEvent<'_> {
    fn drop(&mut self) {
        self.finalize();
    }
}

impl fmt::Debug for LogEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogEvent")
            .field("severity", &self.severity)
            .field("timestamp", &self.timestamp)
            .field("text", &self.text)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

fn push_clock(text: &mut String, timestamp: OffsetDateTime) {
    match timestamp.format(format_description!("[hour]:[minute]:[second]")) {
        Ok(clock) => text.push_str(&clock),
        Err(_) => {
            use fmt::Write as _;
            let (hour, minute, second) = timestamp.to_hms();
            let _ = write!(text, "{hour:02}:{minute:02}:{second:02}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LoggerConfig, SinkFlags};
    use std::fmt::Write as _;
    use std::sync::{Arc, Mutex};

    fn recording_context(threshold: Severity) -> (LogContext, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&lines);
        let context = LogContext::new();
        context.configure(
            LoggerConfig::new(threshold, SinkFlags::CALLBACK)
                .with_callback(move |line| sink.lock().unwrap().push(line.to_owned())),
        );
        (context, lines)
    }

    fn assert_header(text: &str, tag: &str) {
        let rest = text.strip_prefix(tag).expect("tag prefix");
        let clock = &rest[..8];
        assert_eq!(clock.len(), 8);
        assert!(clock.chars().enumerate().all(|(index, c)| if index == 2 || index == 5 {
            c == ':'
        } else {
            c.is_ascii_digit()
        }));
        assert_eq!(&rest[8..9], " ");
    }

    #[test]
    fn header_carries_tag_and_clock() {
        let context = LogContext::new();
        let event = context.begin(Severity::Warning);
        assert_header(event.text(), "[Wrn]");
        assert_eq!(event.state(), EventState::Building);
    }

    #[test]
    fn threshold_only_levels_have_no_tag() {
        let context = LogContext::new();
        assert_header(context.begin(Severity::All).text(), "");
        assert_header(context.begin(Severity::None).text(), "");
    }

    #[test]
    fn appends_accumulate_in_order() {
        let context = LogContext::new();
        let mut event = context.begin(Severity::Info);
        event.append("copied ").append(3_u32).append(" files");
        write!(event, " in {}s", 1.5).expect("fmt::Write");
        assert!(event.text().ends_with(" copied 3 files in 1.5s"));
    }

    #[test]
    fn finish_terminates_and_dispatches_once() {
        let (context, lines) = recording_context(Severity::Info);
        let mut event = context.begin(Severity::Error);
        event.append("disk full");
        assert!(event.finish());

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(&format!("disk full{LINE_TERMINATOR}")));
    }

    #[test]
    fn drop_dispatches() {
        let (context, lines) = recording_context(Severity::Debug);
        {
            let mut event = context.begin(Severity::Debug);
            event.append("scoped");
        }
        assert_eq!(lines.lock().unwrap().len(), 1);
    }

    #[test]
    fn events_above_threshold_are_discarded() {
        let (context, lines) = recording_context(Severity::Warning);
        assert!(!context.begin(Severity::Info).finish());
        assert!(!context.begin(Severity::None).finish());
        assert!(lines.lock().unwrap().is_empty());
    }

    #[test]
    fn dispatch_happens_on_early_return() {
        fn work(context: &LogContext) -> Result<(), &'static str> {
            let mut event = context.begin(Severity::Error);
            event.append("failed step");
            Err("step")?;
            event.append(" unreachable");
            Ok(())
        }

        let (context, lines) = recording_context(Severity::Error);
        assert!(work(&context).is_err());
        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(!lines[0].contains("unreachable"));
    }
}
