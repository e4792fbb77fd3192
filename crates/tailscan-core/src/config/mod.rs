//! Configuration document for the content scan.
//! TOML-based, layered resolution: overrides > env > project > defaults.

pub mod deploy_target;
pub mod scan_config;
pub mod theme_config;

pub use deploy_target::DeployTarget;
pub use scan_config::{ScanConfig, ScanOverrides};
pub use theme_config::ThemeConfig;
