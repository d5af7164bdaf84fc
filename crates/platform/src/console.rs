//! crates/platform/src/console.rs
//!
//! Console preparation for colored UTF-8 output.

use crate::PlatformError;

/// Switches the attached console to UTF-8 output with ANSI escape processing.
///
/// On Windows this sets the output code page to 65001 and enables
/// virtual-terminal processing on the standard output handle. Unix terminals
/// already accept UTF-8 bytes and escape sequences, so the call is a no-op.
pub fn prepare_utf8_console() -> Result<(), PlatformError> {
    imp::prepare_utf8_console()
}

/// Ensures the process has a console, allocating one when none is attached.
///
/// Returns `true` when a new console was allocated. GUI processes on Windows
/// start without a console; everywhere else the standard streams are already
/// usable and the call returns `false`.
pub fn attach_console() -> Result<bool, PlatformError> {
    imp::attach_console()
}

#[cfg(windows)]
mod imp {
    use crate::PlatformError;
    use windows::Win32::System::Console::{
        AllocConsole, CONSOLE_MODE, CONSOLE_SCREEN_BUFFER_INFO, DISABLE_NEWLINE_AUTO_RETURN,
        ENABLE_VIRTUAL_TERMINAL_PROCESSING, GetConsoleMode, GetConsoleScreenBufferInfo,
        GetStdHandle, STD_OUTPUT_HANDLE, SetConsoleMode, SetConsoleOutputCP,
    };

    const CP_UTF8: u32 = 65001;

    fn os_error(operation: &'static str, error: &windows::core::Error) -> PlatformError {
        PlatformError::Os {
            operation,
            code: error.code().0 as u32,
        }
    }

    pub(super) fn prepare_utf8_console() -> Result<(), PlatformError> {
        // SAFETY: plain Win32 calls on the process's own standard output
        // handle; `mode` is a valid out-pointer for the duration of the call.
        unsafe {
            SetConsoleOutputCP(CP_UTF8).map_err(|e| os_error("SetConsoleOutputCP", &e))?;
            let handle =
                GetStdHandle(STD_OUTPUT_HANDLE).map_err(|e| os_error("GetStdHandle", &e))?;
            let mut mode = CONSOLE_MODE::default();
            GetConsoleMode(handle, &mut mode).map_err(|e| os_error("GetConsoleMode", &e))?;
            mode |= ENABLE_VIRTUAL_TERMINAL_PROCESSING | DISABLE_NEWLINE_AUTO_RETURN;
            SetConsoleMode(handle, mode).map_err(|e| os_error("SetConsoleMode", &e))?;
        }
        Ok(())
    }

    pub(super) fn attach_console() -> Result<bool, PlatformError> {
        // SAFETY: `info` is a valid out-pointer; AllocConsole has no
        // preconditions beyond the process not owning a console.
        unsafe {
            let handle =
                GetStdHandle(STD_OUTPUT_HANDLE).map_err(|e| os_error("GetStdHandle", &e))?;
            let mut info = CONSOLE_SCREEN_BUFFER_INFO::default();
            if GetConsoleScreenBufferInfo(handle, &mut info).is_ok() {
                return Ok(false);
            }
            AllocConsole().map_err(|e| os_error("AllocConsole", &e))?;
        }
        Ok(true)
    }
}

#[cfg(not(windows))]
mod imp {
    use crate::PlatformError;

    pub(super) fn prepare_utf8_console() -> Result<(), PlatformError> {
        Ok(())
    }

    pub(super) fn attach_console() -> Result<bool, PlatformError> {
        Ok(false)
    }
}
