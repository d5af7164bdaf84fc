//! crates/logging/src/sink_flags.rs
//!
//! # Overview
//!
//! [`SinkFlags`] selects the destinations a log context fans events out to.
//! The bits are independent: every active sink receives the same rendered
//! line and no ordering exists between them.
//!
//! # Design
//!
//! The bitfield wraps a `u32` with one associated constant per sink. The bit
//! values match the layout used by existing configuration files and callers
//! (`DEBUG_CHANNEL = 2`, `CONSOLE = 4`, `FILE = 8`, `CALLBACK = 16`). The
//! standard bit-operator traits are implemented so callers can test
//! `sinks & SinkFlags::FILE` or toggle a sink with `sinks ^= SinkFlags::CONSOLE`.
//!
//! # Examples
//!
//! ```
//! use logging::SinkFlags;
//!
//! let mut sinks: SinkFlags = "console,file".parse().unwrap();
//! assert!(sinks.contains(SinkFlags::FILE));
//!
//! sinks ^= SinkFlags::FILE;
//! assert_eq!(sinks, SinkFlags::CONSOLE);
//! assert_eq!(sinks.to_string(), "console");
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};
use std::str::FromStr;

use crate::error::ParseSinkFlagsError;

/// Individual sink selectable in [`SinkFlags`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Sink {
    /// Host debug-output channel.
    DebugChannel,
    /// Colored standard output.
    Console,
    /// Append-only log file.
    File,
    /// User-supplied callback.
    Callback,
}

impl Sink {
    /// Every sink in ascending bit order.
    pub const ALL: [Self; 4] = [
        Self::DebugChannel,
        Self::Console,
        Self::File,
        Self::Callback,
    ];

    /// Returns the [`SinkFlags`] bit for the sink.
    #[must_use]
    pub const fn as_flag(self) -> SinkFlags {
        match self {
            Self::DebugChannel => SinkFlags::DEBUG_CHANNEL,
            Self::Console => SinkFlags::CONSOLE,
            Self::File => SinkFlags::FILE,
            Self::Callback => SinkFlags::CALLBACK,
        }
    }

    /// Name used by [`SinkFlags`]'s `Display` and `FromStr` implementations.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DebugChannel => "debug",
            Self::Console => "console",
            Self::File => "file",
            Self::Callback => "callback",
        }
    }

    const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            _ if bits == SinkFlags::DEBUG_CHANNEL.bits => Some(Self::DebugChannel),
            _ if bits == SinkFlags::CONSOLE.bits => Some(Self::Console),
            _ if bits == SinkFlags::FILE.bits => Some(Self::File),
            _ if bits == SinkFlags::CALLBACK.bits => Some(Self::Callback),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "debug" | "debugger" | "debug_channel" => Some(Self::DebugChannel),
            "console" | "stdout" => Some(Self::Console),
            "file" => Some(Self::File),
            "callback" => Some(Self::Callback),
            _ => None,
        }
    }
}

impl From<Sink> for SinkFlags {
    fn from(sink: Sink) -> Self {
        sink.as_flag()
    }
}

/// Iterator over the sinks set within a [`SinkFlags`] value.
#[derive(Clone, Debug)]
pub struct SinkIter {
    remaining: u32,
}

impl Iterator for SinkIter {
    type Item = Sink;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let bit_mask = 1u32 << self.remaining.trailing_zeros();
        self.remaining &= !bit_mask;
        Sink::from_bits(bit_mask)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SinkIter {}

impl FusedIterator for SinkIter {}

/// Set of sinks a log context writes to.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Default)]
pub struct SinkFlags {
    bits: u32,
}

impl SinkFlags {
    const fn new(bits: u32) -> Self {
        Self { bits }
    }

    /// No sinks; the context is silent.
    pub const NONE: Self = Self::new(0);
    /// Host debug-output channel.
    pub const DEBUG_CHANNEL: Self = Self::new(1 << 1);
    /// Colored standard output.
    pub const CONSOLE: Self = Self::new(1 << 2);
    /// Append-only log file.
    pub const FILE: Self = Self::new(1 << 3);
    /// User-supplied callback.
    pub const CALLBACK: Self = Self::new(1 << 4);
    /// Every sink.
    pub const ALL: Self = Self::new(
        Self::DEBUG_CHANNEL.bits | Self::CONSOLE.bits | Self::FILE.bits | Self::CALLBACK.bits,
    );

    /// Builds a set from raw bits, dropping bits that name no sink.
    #[must_use]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self::new(bits & Self::ALL.bits)
    }

    /// Raw bit representation.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// Returns `true` when no sink is selected.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Checks whether every sink in `other` is also in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.bits & other.bits) == other.bits
    }

    /// Union of both sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self::new(self.bits | other.bits)
    }

    /// Sinks present in both sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self::new(self.bits & other.bits)
    }

    /// Sinks in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self::new(self.bits & !other.bits)
    }

    /// Sets or clears the sinks in `other`.
    pub fn set(&mut self, other: Self, enabled: bool) {
        if enabled {
            *self |= other;
        } else {
            *self = self.difference(other);
        }
    }

    /// Iterates over the selected sinks in ascending bit order.
    #[must_use]
    pub const fn iter(self) -> SinkIter {
        SinkIter {
            remaining: self.bits & Self::ALL.bits,
        }
    }
}

impl IntoIterator for SinkFlags {
    type Item = Sink;
    type IntoIter = SinkIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Sink> for SinkFlags {
    fn from_iter<I: IntoIterator<Item = Sink>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::NONE, |flags, sink| flags | sink.as_flag())
    }
}

impl fmt::Debug for SinkFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SinkFlags")
            .field(&format_args!("{self}"))
            .finish()
    }
}

impl fmt::Display for SinkFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }

        for (index, sink) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            f.write_str(sink.name())?;
        }
        Ok(())
    }
}

impl FromStr for SinkFlags {
    type Err = ParseSinkFlagsError;

    /// Parses a `,` or `|` separated list such as `console|file`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Self::NONE;
        for token in s.split([',', '|']).map(str::trim).filter(|t| !t.is_empty()) {
            match token.to_ascii_lowercase().as_str() {
                "none" => {}
                "all" => flags |= Self::ALL,
                _ => {
                    let sink =
                        Sink::from_name(token).ok_or_else(|| ParseSinkFlagsError::new(token))?;
                    flags |= sink.as_flag();
                }
            }
        }
        Ok(flags)
    }
}

impl Not for SinkFlags {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::new(!self.bits & Self::ALL.bits)
    }
}

impl BitOr for SinkFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for SinkFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for SinkFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl BitAndAssign for SinkFlags {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl BitXor for SinkFlags {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self::new(self.bits ^ rhs.bits)
    }
}

impl BitXorAssign for SinkFlags {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.bits ^= rhs.bits;
    }
}

impl From<SinkFlags> for u32 {
    fn from(flags: SinkFlags) -> Self {
        flags.bits
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SinkFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SinkFlags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
