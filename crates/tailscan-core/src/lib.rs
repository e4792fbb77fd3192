//! # tailscan-core
//!
//! The content-scan configuration document for a utility-class CSS build
//! pipeline: which files the build tool scans for class names, additive
//! theme overrides, and the ordered plugin list.
//!
//! The crate models the document as an immutable value ([`ScanConfig`]),
//! loads it with layered resolution (caller overrides > `TAILSCAN_*` env >
//! `tailscan.toml` > compiled defaults), renders it to the
//! `tailwind.config.js` form the external tool actually reads, and manages
//! the version pin embedded in that document.
//!
//! The build tool itself (glob matching, plugin resolution, CSS output) is
//! an external collaborator; nothing here compiles CSS or watches files.

pub mod config;
pub mod errors;
pub mod render;
pub mod trace;
pub mod version;

pub use config::{DeployTarget, ScanConfig, ScanOverrides, ThemeConfig};
pub use errors::{ConfigError, RenderError, TailscanError, VersionError};
