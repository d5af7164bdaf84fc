//! crates/logging-sink/src/color.rs
//! ANSI palette and escape-sequence wrapping.

use std::fmt;

/// The eight base ANSI terminal colors.
///
/// The discriminant is the palette index: the foreground escape code is
/// `30 + index` and the background code is `40 + index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    /// Palette index 0.
    Black = 0,
    /// Palette index 1.
    Red,
    /// Palette index 2.
    Green,
    /// Palette index 3.
    Yellow,
    /// Palette index 4.
    Blue,
    /// Palette index 5.
    Magenta,
    /// Palette index 6.
    Cyan,
    /// Palette index 7.
    White,
}

impl Color {
    /// Palette index of the color.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// SGR parameter selecting this color as the foreground.
    #[must_use]
    pub const fn foreground_code(self) -> u8 {
        30 + self.index()
    }

    /// SGR parameter selecting this color as the background.
    #[must_use]
    pub const fn background_code(self) -> u8 {
        40 + self.index()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        };
        f.write_str(name)
    }
}

const RESET: &str = "\x1b[0m";

/// Brackets `text` with the escape sequence for `foreground` (and optionally
/// `background`) followed by a reset.
///
/// Without a foreground color the text is returned unchanged, whatever the
/// background.
///
/// # Examples
///
/// ```
/// use logging_sink::{Color, wrap};
///
/// assert_eq!(wrap("ok", None, None), "ok");
/// assert_eq!(wrap("ok", Some(Color::Green), None), "\x1b[32mok\x1b[0m");
/// assert_eq!(
///     wrap("ok", Some(Color::White), Some(Color::Blue)),
///     "\x1b[37;44mok\x1b[0m"
/// );
/// ```
#[must_use]
pub fn wrap(text: &str, foreground: Option<Color>, background: Option<Color>) -> String {
    let Some(foreground) = foreground else {
        return text.to_owned();
    };
    match background {
        Some(background) => format!(
            "\x1b[{};{}m{text}{RESET}",
            foreground.foreground_code(),
            background.background_code()
        ),
        None => format!("\x1b[{}m{text}{RESET}", foreground.foreground_code()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_palette_index() {
        assert_eq!(Color::Black.foreground_code(), 30);
        assert_eq!(Color::Red.foreground_code(), 31);
        assert_eq!(Color::White.foreground_code(), 37);
        assert_eq!(Color::Black.background_code(), 40);
        assert_eq!(Color::Cyan.background_code(), 46);
    }

    #[test]
    fn wrap_without_foreground_is_identity() {
        for text in ["", "plain", "multi\nline\n", "\x1b[1mpre-styled"] {
            assert_eq!(wrap(text, None, None), text);
            assert_eq!(wrap(text, None, Some(Color::Red)), text);
        }
    }

    #[test]
    fn wrap_with_foreground_appends_reset() {
        let wrapped = wrap("disk full\n", Some(Color::Red), None);
        assert!(wrapped.starts_with("\x1b[31m"));
        assert!(wrapped.ends_with("\x1b[0m"));
        assert!(wrapped.contains("disk full\n"));
    }

    #[test]
    fn wrap_with_background_emits_combined_sequence() {
        assert_eq!(
            wrap("x", Some(Color::Yellow), Some(Color::Black)),
            "\x1b[33;40mx\x1b[0m"
        );
    }

    #[test]
    fn display_uses_lowercase_names() {
        assert_eq!(Color::Magenta.to_string(), "magenta");
    }
}
