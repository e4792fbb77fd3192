//! Stable error codes, exposed uniformly across subsystem error enums.

/// Implemented by every tailscan error enum to expose a stable code for
/// logs and calling tools.
pub trait TailscanErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const CONFIG_ERROR: &str = "TS1000";
pub const RENDER_ERROR: &str = "TS2000";
pub const VERSION_ERROR: &str = "TS3000";
