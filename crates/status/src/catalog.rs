//! crates/status/src/catalog.rs
//!
//! Facility to message-catalog dispatch.
//!
//! Several subsystems publish their own message catalogs for composite codes,
//! keyed by facility. Facilities are not unique: the DirectDraw and Direct3D 9
//! codes share one facility byte and differ only by sub-range. The table is
//! therefore a list of `(facility, code_low range, catalog)` rules, evaluated
//! in order; the first matching rule wins. Put narrow rules ahead of the
//! whole-facility rules they overlap.

use std::fmt;

use crate::code::StatusCode;

/// Name of a loadable message catalog.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CatalogId(&'static str);

impl CatalogId {
    /// Windows Media (ASF) errors.
    pub const ASFERROR: Self = Self::new("asferror.dll");
    /// DirectInput driver errors.
    pub const DINPUTD: Self = Self::new("dinputd.dll");
    /// Direct3D 9 errors.
    pub const D3D9: Self = Self::new("d3d9.dll");
    /// DirectDraw errors.
    pub const DDRAW: Self = Self::new("ddraw.dll");
    /// Direct3D 10 errors.
    pub const D3D10: Self = Self::new("d3d10.dll");

    /// Names a catalog module.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Module name passed to the host loader.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Maps a facility and a range of low code words to a catalog.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CatalogRule {
    facility: u8,
    first: u16,
    last: u16,
    catalog: CatalogId,
}

impl CatalogRule {
    /// Rule for `first..=last` within `facility`.
    #[must_use]
    pub const fn range(facility: u8, first: u16, last: u16, catalog: CatalogId) -> Self {
        Self {
            facility,
            first,
            last,
            catalog,
        }
    }

    /// Rule for one low code word.
    #[must_use]
    pub const fn exact(facility: u8, code_low: u16, catalog: CatalogId) -> Self {
        Self::range(facility, code_low, code_low, catalog)
    }

    /// Rule for every code of `facility`.
    #[must_use]
    pub const fn facility(facility: u8, catalog: CatalogId) -> Self {
        Self::range(facility, 0, u16::MAX, catalog)
    }

    /// Catalog selected by the rule.
    #[must_use]
    pub const fn catalog(&self) -> CatalogId {
        self.catalog
    }

    /// Whether the rule covers `code`.
    #[must_use]
    pub const fn matches(&self, code: StatusCode) -> bool {
        let low = code.code_low();
        code.facility() == self.facility && low >= self.first && low <= self.last
    }
}

/// Rules known for the stock Windows catalogs.
pub const DEFAULT_RULES: [CatalogRule; 7] = [
    CatalogRule::range(0x0D, 0x07D0, 0x080D, CatalogId::ASFERROR),
    CatalogRule::exact(0x07, 0x0103, CatalogId::DINPUTD),
    CatalogRule::exact(0x04, 0x03FF, CatalogId::DINPUTD),
    CatalogRule::range(0x76, 0x0818, 0x0884, CatalogId::D3D9),
    CatalogRule::range(0x76, 0x0005, 0x02BB, CatalogId::DDRAW),
    CatalogRule::facility(0x79, CatalogId::D3D10),
    CatalogRule::facility(0x80, CatalogId::D3D10),
];

/// Ordered list of [`CatalogRule`]s.
///
/// ```
/// use status::{CatalogId, CatalogRule, CatalogTable, StatusCode};
///
/// let table = CatalogTable::empty()
///     .with_rule(CatalogRule::facility(0x42, CatalogId::new("vendor.dll")));
/// assert_eq!(
///     table.resolve(StatusCode::new(0x8042_0001)),
///     Some(CatalogId::new("vendor.dll"))
/// );
/// assert_eq!(table.resolve(StatusCode::new(0x8043_0001)), None);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CatalogTable {
    rules: Vec<CatalogRule>,
}

impl CatalogTable {
    /// Table without rules; every composite code uses the system catalog.
    #[must_use]
    pub const fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends `rule` after the existing ones.
    pub fn with_rule(mut self, rule: CatalogRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Rules in table order.
    #[must_use]
    pub fn rules(&self) -> &[CatalogRule] {
        &self.rules
    }

    /// Catalog for `code`, or `None` for the system catalog.
    #[must_use]
    pub fn resolve(&self, code: StatusCode) -> Option<CatalogId> {
        self.rules
            .iter()
            .find(|rule| rule.matches(code))
            .map(CatalogRule::catalog)
    }
}

impl Default for CatalogTable {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES.to_vec(),
        }
    }
}

impl FromIterator<CatalogRule> for CatalogTable {
    fn from_iter<I: IntoIterator<Item = CatalogRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
