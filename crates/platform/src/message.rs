//! crates/platform/src/message.rs
//!
//! OS message-catalog primitives: loading a catalog module, rendering a code
//! through the system or a loaded catalog, and querying the system language.

use std::fmt;

use crate::PlatformError;

/// A message catalog opened from the host.
///
/// The underlying module is released when the handle is dropped, so holding
/// the handle in a local scope guarantees release on every exit path.
pub struct CatalogHandle {
    module: imp::Module,
    name: String,
}

impl CatalogHandle {
    /// The module name the catalog was loaded from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for CatalogHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogHandle")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Drop for CatalogHandle {
    fn drop(&mut self) {
        imp::release(&self.module);
    }
}

/// Opens the message catalog published by module `name`.
pub fn load_catalog(name: &str) -> Result<CatalogHandle, PlatformError> {
    let module = imp::load(name)?;
    Ok(CatalogHandle {
        module,
        name: name.to_owned(),
    })
}

/// Renders `code` as text using `catalog`, or the system catalog when `None`.
///
/// Insert placeholders in the message are left unexpanded. The returned text
/// is exactly what the host produced, including any trailing line break.
/// Returns `None` when the host has no message for the code.
#[must_use]
pub fn format_message(
    code: u32,
    catalog: Option<&CatalogHandle>,
    language_id: u32,
) -> Option<String> {
    imp::format(code, catalog.map(|handle| &handle.module), language_id)
}

/// The numeric language identifier of the system default locale, if the host
/// exposes one.
#[must_use]
pub fn system_language_id() -> Option<u32> {
    imp::system_language_id()
}

#[cfg(windows)]
mod imp {
    use crate::PlatformError;
    use windows::Win32::Foundation::{FreeLibrary, HMODULE};
    use windows::Win32::Globalization::GetLocaleInfoEx;
    use windows::Win32::System::Diagnostics::Debug::{
        FORMAT_MESSAGE_FROM_HMODULE, FORMAT_MESSAGE_FROM_SYSTEM, FORMAT_MESSAGE_IGNORE_INSERTS,
        FormatMessageW,
    };
    use windows::Win32::System::LibraryLoader::LoadLibraryW;
    use windows::core::{HSTRING, PWSTR, w};

    pub(super) type Module = HMODULE;

    const LOCALE_ILANGUAGE: u32 = 0x0000_0001;
    const LOCALE_RETURN_NUMBER: u32 = 0x2000_0000;
    const MESSAGE_BUFFER_LEN: usize = 32 * 1024;

    pub(super) fn load(name: &str) -> Result<Module, PlatformError> {
        let wide = HSTRING::from(name);
        // SAFETY: `wide` is a valid NUL-terminated wide string for the call.
        unsafe { LoadLibraryW(&wide) }.map_err(|error| PlatformError::Os {
            operation: "LoadLibraryW",
            code: error.code().0 as u32,
        })
    }

    pub(super) fn release(module: &Module) {
        // SAFETY: the module was returned by LoadLibraryW and is released once.
        let _ = unsafe { FreeLibrary(*module) };
    }

    pub(super) fn format(code: u32, module: Option<&Module>, language_id: u32) -> Option<String> {
        let mut buffer = vec![0u16; MESSAGE_BUFFER_LEN];
        let (flags, source) = match module {
            Some(module) => (
                FORMAT_MESSAGE_FROM_HMODULE | FORMAT_MESSAGE_IGNORE_INSERTS,
                Some(module.0.cast_const()),
            ),
            None => (
                FORMAT_MESSAGE_FROM_SYSTEM | FORMAT_MESSAGE_IGNORE_INSERTS,
                None,
            ),
        };
        // SAFETY: `buffer` is writable for `buffer.len()` UTF-16 units and no
        // insert arguments are read because of FORMAT_MESSAGE_IGNORE_INSERTS.
        let written = unsafe {
            FormatMessageW(
                flags,
                source,
                code,
                language_id,
                PWSTR(buffer.as_mut_ptr()),
                buffer.len() as u32,
                None,
            )
        } as usize;
        if written == 0 {
            return None;
        }
        let len = written.min(buffer.len());
        Some(String::from_utf16_lossy(&buffer[..len]))
    }

    pub(super) fn system_language_id() -> Option<u32> {
        let mut data = [0u16; 2];
        // SAFETY: `data` holds the two UTF-16 units LOCALE_RETURN_NUMBER
        // writes for a DWORD value.
        let written = unsafe {
            GetLocaleInfoEx(
                w!("!x-sys-default-locale"),
                LOCALE_ILANGUAGE | LOCALE_RETURN_NUMBER,
                Some(&mut data),
            )
        };
        if written == 0 {
            return None;
        }
        Some(u32::from(data[0]) | (u32::from(data[1]) << 16))
    }
}

#[cfg(unix)]
mod imp {
    use crate::PlatformError;
    use nix::errno::Errno;
    use std::convert::Infallible;

    pub(super) type Module = Infallible;

    pub(super) fn load(_name: &str) -> Result<Module, PlatformError> {
        Err(PlatformError::Unsupported("message catalog loading"))
    }

    pub(super) fn release(module: &Module) {
        match *module {}
    }

    pub(super) fn format(code: u32, module: Option<&Module>, _language_id: u32) -> Option<String> {
        if let Some(module) = module {
            match *module {}
        }
        let raw = i32::try_from(code).ok().filter(|raw| *raw > 0)?;
        match Errno::from_raw(raw) {
            Errno::UnknownErrno => None,
            errno => Some(errno.desc().to_owned()),
        }
    }

    pub(super) fn system_language_id() -> Option<u32> {
        None
    }
}

#[cfg(not(any(windows, unix)))]
mod imp {
    use crate::PlatformError;
    use std::convert::Infallible;

    pub(super) type Module = Infallible;

    pub(super) fn load(_name: &str) -> Result<Module, PlatformError> {
        Err(PlatformError::Unsupported("message catalog loading"))
    }

    pub(super) fn release(module: &Module) {
        match *module {}
    }

    pub(super) fn format(
        _code: u32,
        _module: Option<&Module>,
        _language_id: u32,
    ) -> Option<String> {
        None
    }

    pub(super) fn system_language_id() -> Option<u32> {
        None
    }
}
