//! crates/logging/src/value.rs
//! Values accepted by [`LogEvent::append`](crate::LogEvent::append).

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use crate::location::LogLocation;

/// One appended piece of an event's text.
///
/// Every variant renders infallibly: byte buffers that are not UTF-8 are
/// decoded lossily.
#[derive(Clone, Debug)]
pub enum LogValue<'a> {
    /// Text, borrowed or owned.
    Text(Cow<'a, str>),
    /// A single character.
    Char(char),
    /// Signed integer.
    Signed(i64),
    /// Unsigned integer.
    Unsigned(u64),
    /// Floating point number.
    Float(f64),
    /// `true` or `false`.
    Bool(bool),
    /// Raw bytes, decoded as UTF-8 with replacement characters.
    Bytes(Cow<'a, [u8]>),
    /// Call site, rendered as `file|function:line`.
    Location(LogLocation<'a>),
    /// Deferred `format_args!` output.
    Formatted(fmt::Arguments<'a>),
}

impl fmt::Display for LogValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Char(c) => write!(f, "{c}"),
            Self::Signed(value) => write!(f, "{value}"),
            Self::Unsigned(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Bytes(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
            Self::Location(location) => write!(f, "{location}"),
            Self::Formatted(arguments) => f.write_fmt(*arguments),
        }
    }
}

impl<'a> From<&'a str> for LogValue<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for LogValue<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl From<String> for LogValue<'_> {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for LogValue<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a Path> for LogValue<'a> {
    fn from(path: &'a Path) -> Self {
        Self::Text(path.to_string_lossy())
    }
}

impl From<char> for LogValue<'_> {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<bool> for LogValue<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<'a> From<&'a [u8]> for LogValue<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(Cow::Borrowed(bytes))
    }
}

impl<'a> From<&'a Vec<u8>> for LogValue<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::Bytes(Cow::Borrowed(bytes))
    }
}

impl From<Vec<u8>> for LogValue<'_> {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(Cow::Owned(bytes))
    }
}

impl<'a> From<LogLocation<'a>> for LogValue<'a> {
    fn from(location: LogLocation<'a>) -> Self {
        Self::Location(location)
    }
}

impl<'a> From<fmt::Arguments<'a>> for LogValue<'a> {
    fn from(arguments: fmt::Arguments<'a>) -> Self {
        Self::Formatted(arguments)
    }
}

macro_rules! impl_from_integer {
    ($variant:ident, $wide:ty, $($ty:ty),+) => {
        $(
            impl From<$ty> for LogValue<'_> {
                fn from(value: $ty) -> Self {
                    Self::$variant(<$wide>::from(value))
                }
            }
        )+
    };
}

impl_from_integer!(Signed, i64, i8, i16, i32, i64);
impl_from_integer!(Unsigned, u64, u8, u16, u32, u64);

impl From<isize> for LogValue<'_> {
    fn from(value: isize) -> Self {
        Self::Signed(value as i64)
    }
}

impl From<usize> for LogValue<'_> {
    fn from(value: usize) -> Self {
        Self::Unsigned(value as u64)
    }
}

impl From<f32> for LogValue<'_> {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for LogValue<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
