//! Document rendering errors.

use super::error_code::{self, TailscanErrorCode};

/// Errors that can occur while rendering the document for the build tool.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Theme value under {key} has no JS literal form: {message}")]
    UnrepresentableValue { key: String, message: String },
}

impl TailscanErrorCode for RenderError {
    fn error_code(&self) -> &'static str {
        error_code::RENDER_ERROR
    }
}
