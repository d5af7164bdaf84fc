#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/status/src/lib.rs
//!
//! # Overview
//!
//! `status` turns opaque 32-bit error and status codes into readable text.
//! Callers do not need to know which subsystem defined a code: the decoder
//! works out from the code's bits which message catalog to consult, asks the
//! host to render the message in the caller's locale, and releases the
//! catalog again.
//!
//! # Design
//!
//! - [`StatusCode`] exposes the bit fields: the plain OS error bands, the
//!   composite bits (31 and 30), the facility byte, and the low word.
//! - [`CatalogTable`] is an ordered list of [`CatalogRule`]s mapping a
//!   facility and a low-word range to a [`CatalogId`]. The first matching
//!   rule wins. The rules are data, so callers can supply their own.
//! - [`MessageHost`] abstracts catalog loading, rendering, and the system
//!   locale. [`SystemHost`] calls into `platform`; tests use a scripted host.
//! - [`StatusDecoder`] ties them together and never fails: a code without a
//!   message decodes to an empty string.
//!
//! # Invariants
//!
//! - Every catalog opened while decoding is released before `decode` returns.
//! - The thread's last OS error is unchanged by decoding.
//! - Returned messages carry no trailing `\r` or `\n`.
//!
//! # Examples
//!
//! ```
//! use status::{CatalogId, CatalogTable, StatusCode, StatusDecoder};
//!
//! let decoder = StatusDecoder::new();
//! assert_eq!(
//!     decoder.select_catalog(StatusCode::new(0x8876_0005)),
//!     Some(CatalogId::DDRAW)
//! );
//! assert_eq!(decoder.select_catalog(StatusCode::new(5)), None);
//!
//! let plain = StatusDecoder::new().with_table(CatalogTable::empty());
//! assert_eq!(plain.select_catalog(StatusCode::new(0x8876_0005)), None);
//! ```
//!
//! # See also
//!
//! - `platform::message` for the host primitives behind [`SystemHost`].

mod catalog;
mod code;
mod decode;
mod error;
mod host;

pub use catalog::{CatalogId, CatalogRule, CatalogTable, DEFAULT_RULES};
pub use code::{Classification, SYSTEM_BANDS, StatusCode};
pub use decode::{Decoded, StatusDecoder, decode_status_message};
pub use error::ParseStatusCodeError;
pub use host::{MessageHost, SystemHost};
