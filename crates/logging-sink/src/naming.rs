//! crates/logging-sink/src/naming.rs
//! Date-stamped file names for log and dump files.

use std::path::PathBuf;

use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Extension of log files.
pub const LOG_EXTENSION: &str = "log";
/// Extension of binary dump files.
pub const DUMP_EXTENSION: &str = "bin";

/// Builds `<prefix><dd>_<mm>.<extension>`.
///
/// The prefix is used verbatim and may contain directory components.
///
/// # Examples
///
/// ```
/// use logging_sink::{LOG_EXTENSION, dated_file_name};
/// use time::macros::date;
///
/// let path = dated_file_name("logs/app_", date!(2024 - 03 - 07), LOG_EXTENSION);
/// assert_eq!(path.to_str(), Some("logs/app_07_03.log"));
/// ```
#[must_use]
pub fn dated_file_name(prefix: &str, date: Date, extension: &str) -> PathBuf {
    let stamp = date
        .format(format_description!("[day]_[month]"))
        .unwrap_or_else(|_| format!("{:02}_{:02}", date.day(), date.month() as u8));
    PathBuf::from(format!("{prefix}{stamp}.{extension}"))
}

/// Today's date in the local time zone, or UTC when the offset is unknown.
#[must_use]
pub fn local_date() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn day_and_month_are_zero_padded() {
        let path = dated_file_name("x", date!(2023 - 01 - 02), DUMP_EXTENSION);
        assert_eq!(path, PathBuf::from("x02_01.bin"));
    }

    #[test]
    fn empty_prefix_yields_bare_stamp() {
        let path = dated_file_name("", date!(2023 - 12 - 31), LOG_EXTENSION);
        assert_eq!(path, PathBuf::from("31_12.log"));
    }
}
