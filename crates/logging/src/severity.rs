//! crates/logging/src/severity.rs
//! Ordered severity levels and threshold gating.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseSeverityError;

/// Importance of a log event, doubling as the context's threshold.
///
/// Levels are ordered by their numeric value, which increases with verbosity.
/// [`Severity::None`] and [`Severity::All`] exist as threshold values: an
/// event created at `None` is never emitted, and an event created at `All`
/// passes only a threshold of `All`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum Severity {
    /// Nothing is logged.
    #[default]
    None = 0,
    /// Failures.
    Error = 2,
    /// Recoverable problems.
    Warning = 3,
    /// Progress and state changes.
    Info = 4,
    /// Developer detail.
    Debug = 5,
    /// Everything.
    All = 10,
}

impl Severity {
    /// Every level in ascending order.
    pub const LEVELS: [Self; 6] = [
        Self::None,
        Self::Error,
        Self::Warning,
        Self::Info,
        Self::Debug,
        Self::All,
    ];

    /// Numeric value of the level.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the level whose numeric value is `value`.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            2 => Some(Self::Error),
            3 => Some(Self::Warning),
            4 => Some(Self::Info),
            5 => Some(Self::Debug),
            10 => Some(Self::All),
            _ => None,
        }
    }

    /// Lowercase name used by [`Display`](fmt::Display) and parsing.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::All => "all",
        }
    }

    /// Tag written at the start of every event line.
    ///
    /// ```
    /// use logging::Severity;
    ///
    /// assert_eq!(Severity::Warning.tag(), "[Wrn]");
    /// assert_eq!(Severity::All.tag(), "");
    /// ```
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Error => "[Err]",
            Self::Warning => "[Wrn]",
            Self::Info => "[Inf]",
            Self::Debug => "[Dbg]",
            Self::None | Self::All => "",
        }
    }

    /// Reports whether an event at `event` passes this threshold.
    #[must_use]
    pub fn permits(self, event: Self) -> bool {
        event != Self::None && event <= self
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u8>() {
            return Self::from_value(value).ok_or_else(|| ParseSeverityError::new(s));
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "error" | "err" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "all" => Ok(Self::All),
            _ => Err(ParseSeverityError::new(s)),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_numeric_value() {
        for pair in Severity::LEVELS.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].value() < pair[1].value());
        }
    }

    #[test]
    fn default_is_silent() {
        assert_eq!(Severity::default(), Severity::None);
    }

    #[test]
    fn threshold_admits_equal_and_lower_levels() {
        assert!(Severity::Info.permits(Severity::Error));
        assert!(Severity::Info.permits(Severity::Info));
        assert!(!Severity::Info.permits(Severity::Debug));
    }

    #[test]
    fn none_event_is_never_permitted() {
        for threshold in Severity::LEVELS {
            assert!(!threshold.permits(Severity::None));
        }
    }

    #[test]
    fn all_event_requires_all_threshold() {
        assert!(Severity::All.permits(Severity::All));
        assert!(!Severity::Debug.permits(Severity::All));
    }

    #[test]
    fn parses_names_aliases_and_numbers() {
        assert_eq!("WARN".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!(" debug ".parse::<Severity>(), Ok(Severity::Debug));
        assert_eq!("10".parse::<Severity>(), Ok(Severity::All));
        assert_eq!("off".parse::<Severity>(), Ok(Severity::None));
    }

    #[test]
    fn rejects_unknown_names_and_gaps() {
        assert!("loud".parse::<Severity>().is_err());
        let error = "1".parse::<Severity>().expect_err("1 is not a level");
        assert_eq!(error.input(), "1");
    }

    #[test]
    fn display_round_trips_through_parse() {
        for level in Severity::LEVELS {
            assert_eq!(level.to_string().parse::<Severity>(), Ok(level));
        }
    }
}
