//! crates/status/src/code.rs
//! Bit-level view of a 32-bit status code.

use std::fmt;
use std::num::IntErrorKind;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::ParseStatusCodeError;

/// Contiguous bands of plain OS error codes, rendered from the system catalog.
pub const SYSTEM_BANDS: [RangeInclusive<u32>; 10] = [
    0x0000..=0x01F3,
    0x01F4..=0x03E7,
    0x03E8..=0x0513,
    0x0514..=0x06A3,
    0x06A4..=0x0F9F,
    0x0FA0..=0x176F,
    0x1770..=0x2007,
    0x2008..=0x2327,
    0x2328..=0x2EDF,
    0x2EE0..=0x3E7F,
];

/// How a code is interpreted when choosing its message catalog.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Classification {
    /// Plain OS error in the given [`SYSTEM_BANDS`] entry.
    System {
        /// Band index.
        band: usize,
    },
    /// Composite status code.
    Composite {
        /// Facility byte.
        facility: u8,
        /// Low 16 bits.
        code_low: u16,
    },
    /// Neither; no catalog is consulted and the message is empty.
    Unclassified,
}

const FAILURE_BIT: u32 = 1 << 31;
const CUSTOMER_BIT: u32 = 1 << 30;

/// A raw 32-bit status or error code.
///
/// Plain OS errors occupy the [`SYSTEM_BANDS`]. Codes with bit 31 or bit 30
/// set are composite: bits 16..24 name the facility that defined the code and
/// the low 16 bits identify it within that facility.
///
/// ```
/// use status::StatusCode;
///
/// let code = StatusCode::new(0x8007_0005);
/// assert!(code.is_composite());
/// assert_eq!(code.facility(), 0x07);
/// assert_eq!(code.code_low(), 0x0005);
/// assert!(StatusCode::new(5).is_system_range());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct StatusCode(u32);

impl StatusCode {
    /// Wraps a raw code.
    #[must_use]
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Raw value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Index of the system band containing the code.
    #[must_use]
    pub fn system_band(self) -> Option<usize> {
        SYSTEM_BANDS.iter().position(|band| band.contains(&self.0))
    }

    /// Whether the code is a plain OS error.
    #[must_use]
    pub fn is_system_range(self) -> bool {
        self.system_band().is_some()
    }

    /// Whether bit 31 or bit 30 is set.
    #[must_use]
    pub const fn is_composite(self) -> bool {
        self.0 & (FAILURE_BIT | CUSTOMER_BIT) != 0
    }

    /// Whether bit 31, the failure bit, is set.
    #[must_use]
    pub const fn is_failure(self) -> bool {
        self.0 & FAILURE_BIT != 0
    }

    /// Facility byte, `(code >> 16) & 0xFF`.
    #[must_use]
    pub const fn facility(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Low 16 bits.
    #[must_use]
    pub const fn code_low(self) -> u16 {
        (self.0 & 0xFFFF) as u16
    }

    /// Classifies the code. System bands take precedence over the composite bits.
    ///
    /// ```
    /// use status::{Classification, StatusCode};
    ///
    /// assert_eq!(
    ///     StatusCode::new(0x8007_0005).classify(),
    ///     Classification::Composite { facility: 0x07, code_low: 0x0005 }
    /// );
    /// ```
    #[must_use]
    pub fn classify(self) -> Classification {
        if let Some(band) = self.system_band() {
            Classification::System { band }
        } else if self.is_composite() {
            Classification::Composite {
                facility: self.facility(),
                code_low: self.code_low(),
            }
        } else {
            Classification::Unclassified
        }
    }
}

impl From<u32> for StatusCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl From<i32> for StatusCode {
    fn from(code: i32) -> Self {
        Self(code as u32)
    }
}

impl From<StatusCode> for u32 {
    fn from(code: StatusCode) -> Self {
        code.0
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl fmt::LowerHex for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl FromStr for StatusCode {
    type Err = ParseStatusCodeError;

    /// Accepts decimal, `0x`-prefixed hexadecimal, and negative decimal
    /// values in the `i32` range, which are taken as their two's complement.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ParseStatusCodeError::Empty);
        }

        let classify = |kind: &IntErrorKind| match kind {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                ParseStatusCodeError::OutOfRange(text.to_owned())
            }
            _ => ParseStatusCodeError::Invalid(text.to_owned()),
        };

        let hex = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"));
        if let Some(digits) = hex {
            return u32::from_str_radix(digits, 16)
                .map(Self)
                .map_err(|error| classify(error.kind()));
        }

        if text.starts_with('-') {
            return text
                .parse::<i32>()
                .map(Self::from)
                .map_err(|error| classify(error.kind()));
        }

        text.parse::<u32>()
            .map(Self)
            .map_err(|error| classify(error.kind()))
    }
}
