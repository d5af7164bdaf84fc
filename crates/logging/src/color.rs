//! crates/logging/src/color.rs
//! Severity to console color mapping.

use logging_sink::Color;

use crate::severity::Severity;

/// Console color for events at `severity`.
///
/// [`Severity::None`] and [`Severity::All`] are threshold values and carry no
/// color, so their text is written without escape sequences.
///
/// ```
/// use logging::{Severity, color_for};
/// use logging_sink::Color;
///
/// assert_eq!(color_for(Severity::Error), Some(Color::Red));
/// assert_eq!(color_for(Severity::All), None);
/// ```
#[must_use]
pub const fn color_for(severity: Severity) -> Option<Color> {
    match severity {
        Severity::Error => Some(Color::Red),
        Severity::Warning => Some(Color::Yellow),
        Severity::Info => Some(Color::Green),
        Severity::Debug => Some(Color::Cyan),
        Severity::None | Severity::All => None,
    }
}
