//! crates/status/src/decode.rs
//! Code classification, catalog selection, and rendering.

use platform::last_error::{LastErrorGuard, last_error_code};

use crate::catalog::{CatalogId, CatalogTable};
use crate::code::{Classification, StatusCode};
use crate::host::{MessageHost, SystemHost};

/// Result of decoding a code.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Decoded {
    /// Catalog the message was rendered from; `None` for the system catalog.
    pub catalog: Option<CatalogId>,
    /// Rendered text without trailing line breaks; empty when rendering failed.
    pub message: String,
}

/// Turns status codes into text.
///
/// # Examples
///
/// ```
/// use status::StatusDecoder;
///
/// // Decoding never fails; unknown codes render as an empty string.
/// let decoder = StatusDecoder::new();
/// let _text = decoder.decode(0xFFFF_FFFF_u32, None).message;
/// ```
#[derive(Clone, Debug)]
pub struct StatusDecoder<H = SystemHost> {
    host: H,
    table: CatalogTable,
}

impl StatusDecoder<SystemHost> {
    /// Decoder using the operating system and the default catalog table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_host(SystemHost)
    }
}

impl Default for StatusDecoder<SystemHost> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> StatusDecoder<H>
where
    H: MessageHost,
{
    /// Decoder using `host` and the default catalog table.
    #[must_use]
    pub fn with_host(host: H) -> Self {
        Self {
            host,
            table: CatalogTable::default(),
        }
    }

    /// Replaces the catalog table.
    pub fn with_table(mut self, table: CatalogTable) -> Self {
        self.table = table;
        self
    }

    /// Host in use.
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Catalog table in use.
    #[must_use]
    pub const fn table(&self) -> &CatalogTable {
        &self.table
    }

    /// Catalog the decoder would try for `code`; `None` means the system catalog.
    #[must_use]
    pub fn select_catalog(&self, code: StatusCode) -> Option<CatalogId> {
        match code.classify() {
            Classification::Composite { .. } => self.table.resolve(code),
            Classification::System { .. } | Classification::Unclassified => None,
        }
    }

    /// Renders `code` in `locale`, or in the system locale when `None`.
    ///
    /// A selected catalog that cannot be loaded falls back to the system
    /// catalog. Unclassified codes render nothing and yield an empty message.
    /// The thread's last OS error is the same on return as on entry.
    pub fn decode(&self, code: impl Into<StatusCode>, locale: Option<u32>) -> Decoded {
        let _last_error = LastErrorGuard::capture();
        let code = code.into();
        if code.classify() == Classification::Unclassified {
            return Decoded::default();
        }

        let catalog = self
            .select_catalog(code)
            .and_then(|id| self.host.load_catalog(id).map(|handle| (id, handle)));
        let language = locale
            .or_else(|| self.host.system_language())
            .unwrap_or(0);

        let handle = catalog.as_ref().map(|(_, handle)| handle);
        let message = self
            .host
            .render(code.value(), handle, language)
            .map(|text| text.trim_end_matches(['\r', '\n']).to_owned())
            .unwrap_or_default();

        Decoded {
            catalog: catalog.map(|(id, _)| id),
            message,
        }
    }

    /// Renders `"<hex code> <message>"`, the hex digits lowercase without a prefix.
    pub fn describe(&self, code: impl Into<StatusCode>) -> String {
        let code = code.into();
        format!("{code:x} {}", self.decode(code, None).message)
    }

    /// [`describe`](Self::describe) applied to the thread's last OS error.
    pub fn describe_last_os_error(&self) -> String {
        self.describe(last_error_code())
    }
}

/// Decodes `code` with the operating system's catalogs.
///
/// `locale` selects the language; `None` uses the system default and falls
/// back to language 0 when that is unknown. Returns an empty string when the
/// code has no message.
pub fn decode_status_message(code: u32, locale: Option<u32>) -> String {
    StatusDecoder::new().decode(code, locale).message
}
