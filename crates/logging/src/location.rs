//! crates/logging/src/location.rs
//! Call-site descriptors rendered as `file|function:line`.

use std::fmt;

/// Line component of a [`LogLocation`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Line<'a> {
    /// Numeric line, as produced by `line!()`.
    Number(u32),
    /// Pre-rendered line text.
    Text(&'a str),
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(line) => write!(f, "{line}"),
            Self::Text(line) => f.write_str(line),
        }
    }
}

/// Call site of a log statement.
///
/// Usually produced by [`here!`](crate::here). The file component may carry
/// any directory prefix; only the file name survives formatting.
///
/// # Examples
///
/// ```
/// use logging::LogLocation;
///
/// let location = LogLocation::with_line_text("C:\\a\\b\\c.cpp", "Foo", "42");
/// assert_eq!(location.to_string(), "c.cpp|Foo:42");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LogLocation<'a> {
    file: &'a str,
    function: &'a str,
    line: Line<'a>,
}

impl<'a> LogLocation<'a> {
    /// Creates a location with a numeric line.
    #[must_use]
    pub const fn new(file: &'a str, function: &'a str, line: u32) -> Self {
        Self {
            file,
            function,
            line: Line::Number(line),
        }
    }

    /// Creates a location whose line is already text.
    #[must_use]
    pub const fn with_line_text(file: &'a str, function: &'a str, line: &'a str) -> Self {
        Self {
            file,
            function,
            line: Line::Text(line),
        }
    }

    /// File path as given.
    #[must_use]
    pub const fn file(&self) -> &'a str {
        self.file
    }

    /// File name without its directories. Both `\` and `/` are separators.
    #[must_use]
    pub fn file_name(&self) -> &'a str {
        self.file
            .rsplit_once(['\\', '/'])
            .map_or(self.file, |(_, name)| name)
    }

    /// Function name as given.
    #[must_use]
    pub const fn function(&self) -> &'a str {
        self.function
    }

    /// Line component.
    #[must_use]
    pub const fn line(&self) -> Line<'a> {
        self.line
    }
}

impl fmt::Display for LogLocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}:{}", self.file_name(), self.function, self.line)
    }
}

/// Formats an optional location; an absent location renders as "".
#[must_use]
pub fn format_location(location: Option<&LogLocation<'_>>) -> String {
    location.map(ToString::to_string).unwrap_or_default()
}

/// Path of the enclosing function, without the crate-internal closure suffixes.
#[doc(hidden)]
#[must_use]
pub fn trim_function_path(path: &'static str) -> &'static str {
    let mut name = path.strip_suffix("::__here").unwrap_or(path);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

/// Captures the current call site as a [`LogLocation`].
///
/// ```
/// let location = logging::here!();
/// assert!(!location.file_name().contains('/'));
/// assert!(location.to_string().contains('|'));
/// ```
#[macro_export]
macro_rules! here {
    () => {
        $crate::LogLocation::new(file!(), $crate::function_name!(), line!())
    };
}

/// Expands to the path of the enclosing function as a `&'static str`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::__trim_function_path(__type_name_of(__here))
    }};
}
