//! crates/platform/src/debug_output.rs
//!
//! Host debug-output channel.
//!
//! Windows routes text to `OutputDebugStringW`, visible to an attached
//! debugger or a tool such as DebugView. Unix hosts have no equivalent
//! per-process channel, so the text is sent to `syslog(3)` at `LOG_DEBUG`
//! priority, which most syslog configurations discard unless debug logging is
//! enabled.

/// Writes `text` to the host debug channel.
///
/// Delivery is best-effort: text containing interior NUL characters is
/// truncated at the first NUL and no error is reported.
pub fn output_debug_string(text: &str) {
    let text = text.split('\0').next().unwrap_or_default();
    imp::write(text);
}

#[cfg(windows)]
mod imp {
    use windows::Win32::System::Diagnostics::Debug::OutputDebugStringW;
    use windows::core::PCWSTR;

    pub(super) fn write(text: &str) {
        let wide: Vec<u16> = text.encode_utf16().chain(std::iter::once(0)).collect();
        // SAFETY: `wide` is NUL-terminated and outlives the call.
        unsafe { OutputDebugStringW(PCWSTR::from_raw(wide.as_ptr())) }
    }
}

#[cfg(unix)]
mod imp {
    use std::ffi::CString;

    pub(super) fn write(text: &str) {
        let Ok(message) = CString::new(text) else {
            return;
        };
        // syslog(3) interprets `%`, so the text is passed as an argument.
        let format = b"%s\0".as_ptr().cast::<libc::c_char>();

        // SAFETY: both pointers are valid NUL-terminated C strings for the
        // duration of the call. syslog opens the connection lazily when
        // openlog has not been called.
        unsafe {
            libc::syslog(libc::LOG_USER | libc::LOG_DEBUG, format, message.as_ptr());
        }
    }
}

#[cfg(not(any(windows, unix)))]
mod imp {
    pub(super) fn write(_text: &str) {}
}
