//! Error handling for tailscan.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod render_error;
pub mod tailscan_error;
pub mod version_error;

pub use config_error::ConfigError;
pub use error_code::TailscanErrorCode;
pub use render_error::RenderError;
pub use tailscan_error::TailscanError;
pub use version_error::VersionError;
