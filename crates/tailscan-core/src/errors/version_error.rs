//! Version pin and lock-file errors.

use super::error_code::{self, TailscanErrorCode};

/// Errors that can occur while managing the version pin and lock file.
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    #[error("Unsupported platform for the standalone binary: {os}/{arch}")]
    UnsupportedPlatform { os: String, arch: String },

    #[error("Version {version:?} cannot be written as a pin line")]
    InvalidVersion { version: String },

    #[error("Lock file {path}: {message}")]
    LockIo { path: String, message: String },
}

impl TailscanErrorCode for VersionError {
    fn error_code(&self) -> &'static str {
        error_code::VERSION_ERROR
    }
}
