//! crates/status/src/host.rs
//! Host services the decoder relies on.

use platform::message::{self, CatalogHandle};

use crate::catalog::CatalogId;

/// Message-catalog services of the host.
///
/// Catalog handles release the underlying resource when dropped.
pub trait MessageHost {
    /// Loaded catalog.
    type Catalog;

    /// Loads `catalog`, or returns `None` when it is unavailable.
    fn load_catalog(&self, catalog: CatalogId) -> Option<Self::Catalog>;

    /// Renders `code` from `catalog`, or from the system catalog when `None`.
    /// Message inserts are never expanded.
    fn render(&self, code: u32, catalog: Option<&Self::Catalog>, language: u32) -> Option<String>;

    /// Language identifier of the system default locale.
    fn system_language(&self) -> Option<u32>;
}

/// [`MessageHost`] backed by the operating system.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemHost;

impl MessageHost for SystemHost {
    type Catalog = CatalogHandle;

    fn load_catalog(&self, catalog: CatalogId) -> Option<Self::Catalog> {
        message::load_catalog(catalog.name()).ok()
    }

    fn render(&self, code: u32, catalog: Option<&Self::Catalog>, language: u32) -> Option<String> {
        message::format_message(code, catalog, language)
    }

    fn system_language(&self) -> Option<u32> {
        message::system_language_id()
    }
}
