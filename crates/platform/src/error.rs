//! crates/platform/src/error.rs
//!
//! Error type shared by the host wrappers.

use thiserror::Error;

/// Failure reported by a host call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The host call failed with the given OS error code.
    #[error("{operation} failed with OS error {code}")]
    Os {
        /// Name of the host call that failed.
        operation: &'static str,
        /// Raw OS error code reported by the host.
        code: u32,
    },
    /// The operation has no implementation on this host.
    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_error_mentions_operation_and_code() {
        let err = PlatformError::Os {
            operation: "LoadLibraryW",
            code: 126,
        };
        let text = err.to_string();
        assert!(text.contains("LoadLibraryW"));
        assert!(text.contains("126"));
    }

    #[test]
    fn unsupported_error_names_operation() {
        let err = PlatformError::Unsupported("catalog loading");
        assert_eq!(
            err.to_string(),
            "catalog loading is not supported on this platform"
        );
    }
}
