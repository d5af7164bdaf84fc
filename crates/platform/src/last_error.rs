//! crates/platform/src/last_error.rs
//!
//! Access to the calling thread's last OS error slot (`GetLastError` on
//! Windows, `errno` elsewhere).

/// Returns the calling thread's last OS error code.
#[must_use]
pub fn last_error_code() -> u32 {
    imp::get()
}

/// Overwrites the calling thread's last OS error code.
pub fn set_last_error_code(code: u32) {
    imp::set(code);
}

/// Restores the thread's last OS error when dropped.
///
/// Host probes such as catalog loading overwrite the error slot even when they
/// succeed. Holding a guard across the probe keeps the caller's view intact.
#[derive(Debug)]
#[must_use = "the saved error is restored when the guard is dropped"]
pub struct LastErrorGuard {
    saved: u32,
}

impl LastErrorGuard {
    /// Captures the current last-error value.
    pub fn capture() -> Self {
        Self {
            saved: last_error_code(),
        }
    }

    /// The value that will be restored.
    #[must_use]
    pub const fn saved(&self) -> u32 {
        self.saved
    }
}

impl Drop for LastErrorGuard {
    fn drop(&mut self) {
        set_last_error_code(self.saved);
    }
}

#[cfg(windows)]
mod imp {
    use windows::Win32::Foundation::{GetLastError, SetLastError, WIN32_ERROR};

    pub(super) fn get() -> u32 {
        // SAFETY: GetLastError only reads thread-local state.
        unsafe { GetLastError() }.0
    }

    pub(super) fn set(code: u32) {
        // SAFETY: SetLastError only writes thread-local state.
        unsafe { SetLastError(WIN32_ERROR(code)) }
    }
}

#[cfg(unix)]
mod imp {
    use nix::errno::Errno;

    pub(super) fn get() -> u32 {
        Errno::last_raw() as u32
    }

    pub(super) fn set(code: u32) {
        Errno::set_raw(code as i32);
    }
}

#[cfg(not(any(windows, unix)))]
mod imp {
    use std::cell::Cell;

    thread_local! {
        static LAST: Cell<u32> = const { Cell::new(0) };
    }

    pub(super) fn get() -> u32 {
        LAST.with(Cell::get)
    }

    pub(super) fn set(code: u32) {
        LAST.with(|last| last.set(code));
    }
}
