//! Crate-boundary error aggregation.

use super::error_code::TailscanErrorCode;
use super::{ConfigError, RenderError, VersionError};

/// Errors surfaced at the crate boundary.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum TailscanError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Version error: {0}")]
    Version(#[from] VersionError),
}

impl TailscanErrorCode for TailscanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Render(e) => e.error_code(),
            Self::Version(e) => e.error_code(),
        }
    }
}
