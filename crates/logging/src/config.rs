//! crates/logging/src/config.rs
//! Logger configuration and its environment-variable source.

use std::ffi::OsString;
use std::fmt;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::severity::Severity;
use crate::sink_flags::SinkFlags;

/// Receives every rendered line when [`SinkFlags::CALLBACK`] is active.
pub type LogCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Environment variable holding the threshold.
pub const LEVEL_VAR: &str = "DIAGLOG_LEVEL";
/// Environment variable holding the sink list.
pub const SINKS_VAR: &str = "DIAGLOG_SINKS";
/// Environment variable holding the log file prefix.
pub const FILE_PREFIX_VAR: &str = "DIAGLOG_FILE_PREFIX";

/// Everything [`LogContext::configure`](crate::LogContext::configure) needs.
///
/// Inconsistent settings are corrected when the configuration is applied:
/// [`SinkFlags::FILE`] without a prefix is dropped, and the callback is kept
/// only when [`SinkFlags::CALLBACK`] is requested.
///
/// # Examples
///
/// ```
/// use logging::{LoggerConfig, Severity, SinkFlags};
///
/// let config = LoggerConfig::new(Severity::Info, SinkFlags::CONSOLE | SinkFlags::FILE)
///     .with_file_prefix("logs/service_")
///     .with_callback(|line| eprint!("{line}"));
///
/// assert_eq!(config.threshold, Severity::Info);
/// assert!(config.callback.is_some());
/// ```
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Most verbose severity that is still emitted.
    pub threshold: Severity,
    /// Active sinks.
    pub sinks: SinkFlags,
    /// Prefix of the log file name; the date and extension are appended.
    pub file_prefix: String,
    /// Line receiver for [`SinkFlags::CALLBACK`].
    #[cfg_attr(feature = "serde", serde(skip))]
    pub callback: Option<LogCallback>,
}

impl LoggerConfig {
    /// Creates a configuration without a file prefix or callback.
    #[must_use]
    pub fn new(threshold: Severity, sinks: SinkFlags) -> Self {
        Self {
            threshold,
            sinks,
            ..Self::default()
        }
    }

    /// Sets the log file prefix.
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    /// Sets the line callback.
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.callback = Some(Arc::new(callback));
        self
    }

    /// Reads `DIAGLOG_LEVEL`, `DIAGLOG_SINKS`, and `DIAGLOG_FILE_PREFIX`.
    ///
    /// Unset variables keep their defaults, which leave the logger silent.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var_os(name))
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let read = |variable: &'static str| -> Result<Option<String>, ConfigError> {
            lookup(variable)
                .map(|value| {
                    value
                        .into_string()
                        .map_err(|_| ConfigError::NotUnicode { variable })
                })
                .transpose()
        };

        let mut config = Self::default();
        if let Some(level) = read(LEVEL_VAR)? {
            config.threshold = level.parse().map_err(|source| ConfigError::Severity {
                variable: LEVEL_VAR,
                source,
            })?;
        }
        if let Some(sinks) = read(SINKS_VAR)? {
            config.sinks = sinks.parse().map_err(|source| ConfigError::Sinks {
                variable: SINKS_VAR,
                source,
            })?;
        }
        if let Some(prefix) = read(FILE_PREFIX_VAR)? {
            config.file_prefix = prefix;
        }
        Ok(config)
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("threshold", &self.threshold)
            .field("sinks", &self.sinks)
            .field("file_prefix", &self.file_prefix)
            .field("callback", &self.callback.as_ref().map(|_| "Fn(&str)"))
            .finish()
    }
}
