//! crates/logging/src/error.rs
//! Errors surfaced while parsing logger configuration.

use thiserror::Error;

/// Returned when text does not name a [`Severity`](crate::Severity).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown severity '{input}' (expected none, error, warning, info, debug, all, or a level number)")]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Returned when a sink list contains an unknown token.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown sink '{token}' (expected debug, console, file, callback, none, or all)")]
pub struct ParseSinkFlagsError {
    token: String,
}

impl ParseSinkFlagsError {
    pub(crate) fn new(token: &str) -> Self {
        Self {
            token: token.to_owned(),
        }
    }

    /// The first token that failed to parse.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Errors produced while building a [`LoggerConfig`](crate::LoggerConfig)
/// from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable held an unknown severity.
    #[error("invalid value for {variable}: {source}")]
    Severity {
        /// Name of the offending variable.
        variable: &'static str,
        /// Underlying parse failure.
        #[source]
        source: ParseSeverityError,
    },
    /// A variable held an unknown sink list.
    #[error("invalid value for {variable}: {source}")]
    Sinks {
        /// Name of the offending variable.
        variable: &'static str,
        /// Underlying parse failure.
        #[source]
        source: ParseSinkFlagsError,
    },
    /// A variable was set but is not valid Unicode.
    #[error("{variable} is not valid unicode")]
    NotUnicode {
        /// Name of the offending variable.
        variable: &'static str,
    },
}
