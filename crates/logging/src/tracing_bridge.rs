//! crates/logging/src/tracing_bridge.rs
//! Bridge from the `tracing` crate into a [`LogContext`].
//!
//! [`DiagLayer`] is a `tracing-subscriber` layer that turns every `tracing`
//! event into a [`LogEvent`](crate::LogEvent) on its context. The event level
//! selects the severity, the `message` field becomes the text, and the
//! event's file, module path, and line become the location prefix, so the
//! output matches lines written with [`log_info!`](crate::log_info) and
//! friends.
//!
//! ```rust,ignore
//! use logging::{LoggerConfig, Severity, SinkFlags, global, init_tracing};
//!
//! global().configure(LoggerConfig::new(Severity::Info, SinkFlags::CONSOLE));
//! init_tracing(global());
//!
//! tracing::info!("listening on port {}", 8080);
//! ```

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::context::LogContext;
use crate::location::LogLocation;
use crate::severity::Severity;

/// Layer that forwards `tracing` events to a [`LogContext`].
#[derive(Clone, Copy, Debug)]
pub struct DiagLayer {
    context: &'static LogContext,
}

impl DiagLayer {
    /// Creates a layer writing to `context`.
    #[must_use]
    pub const fn new(context: &'static LogContext) -> Self {
        Self { context }
    }

    /// Severity used for events at `level`.
    #[must_use]
    pub const fn severity_for(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warning,
            Level::INFO => Severity::Info,
            _ => Severity::Debug,
        }
    }
}

impl<S> Layer<S> for DiagLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = Self::severity_for(metadata.level());
        if !self.context.is_enabled(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let mut log_event = self.context.begin(severity);
        if let Some(file) = metadata.file() {
            let function = metadata.module_path().unwrap_or_else(|| metadata.target());
            let line = metadata.line().unwrap_or(0);
            log_event
                .append(LogLocation::new(file, function, line))
                .append(" ");
        }
        log_event.append(visitor.finish());
    }
}

/// Collects the `message` field followed by any other fields as `name=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(mut self) -> String {
        if !self.fields.is_empty() {
            if !self.message.is_empty() {
                self.message.push(' ');
            }
            self.message.push_str(&self.fields);
        }
        self.message
    }

    fn push_field(&mut self, field: &Field, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={}", field.name(), value);
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field, format_args!("{value}"));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            self.push_field(field, format_args!("{value:?}"));
        }
    }
}

/// Installs a [`DiagLayer`] for `context` as the global `tracing` subscriber.
///
/// Does nothing when a global subscriber is already installed.
pub fn init_tracing(context: &'static LogContext) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let _ = tracing_subscriber::registry()
        .with(DiagLayer::new(context))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LoggerConfig, SinkFlags};
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt;

    fn leaked_context(threshold: Severity) -> (&'static LogContext, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&lines);
        let context: &'static LogContext = Box::leak(Box::new(LogContext::new()));
        context.configure(
            LoggerConfig::new(threshold, SinkFlags::CALLBACK)
                .with_callback(move |line| sink.lock().unwrap().push(line.to_owned())),
        );
        (context, lines)
    }

    #[test]
    fn levels_map_to_severities() {
        assert_eq!(DiagLayer::severity_for(&Level::ERROR), Severity::Error);
        assert_eq!(DiagLayer::severity_for(&Level::WARN), Severity::Warning);
        assert_eq!(DiagLayer::severity_for(&Level::INFO), Severity::Info);
        assert_eq!(DiagLayer::severity_for(&Level::DEBUG), Severity::Debug);
        assert_eq!(DiagLayer::severity_for(&Level::TRACE), Severity::Debug);
    }

    #[test]
    fn events_are_forwarded_with_location() {
        let (context, lines) = leaked_context(Severity::Info);
        let subscriber = tracing_subscriber::registry().with(DiagLayer::new(context));

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(port = 8080, "bind failed");
            tracing::debug!("filtered out");
        });

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[Wrn]"));
        assert!(lines[0].contains("tracing_bridge.rs|"));
        assert!(lines[0].contains("bind failed port=8080"));
    }

    #[test]
    fn fields_without_message_are_rendered() {
        let (context, lines) = leaked_context(Severity::Debug);
        let subscriber = tracing_subscriber::registry().with(DiagLayer::new(context));

        tracing::subscriber::with_default(subscriber, || {
            tracing::trace!(code = "0x5", attempt = 2);
        });

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[Dbg]"));
        assert!(lines[0].contains("code=0x5 attempt=2"));
    }
}
