//! Version pin and standalone-binary metadata.
//!
//! The rendered document carries a `const TAILWIND_VERSION = "..."` line;
//! the `tailwind.version` lock file beside the installed binary records
//! what is actually on disk. The two disagreeing is the signal to
//! reinstall. Downloading the binary is the consuming tool's acquisition
//! step; this module only computes the metadata for it.

use std::io::ErrorKind;
use std::path::Path;
use std::sync::OnceLock;

use regex::{NoExpand, Regex};

use crate::errors::VersionError;

const RELEASE_BASE: &str = "https://github.com/tailwindlabs/tailwindcss/releases";

fn pin_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"const TAILWIND_VERSION = "([^"]*)""#).expect("pin pattern is valid")
    })
}

/// Extract the pinned version from a rendered document, if present.
pub fn extract_pin(document: &str) -> Option<String> {
    pin_regex()
        .captures(document)
        .map(|captures| captures[1].to_string())
}

/// Set the pin line in `document`, replacing an existing one in place or
/// prepending a new one when absent. Returns the updated document text.
///
/// The version is written into a double-quoted literal that [`extract_pin`]
/// reads back verbatim, so a version containing a quote, backslash, or line
/// break is rejected rather than corrupting the line.
pub fn set_pin(document: &str, version: &str) -> Result<String, VersionError> {
    if version.contains(['"', '\\', '\n', '\r']) {
        return Err(VersionError::InvalidVersion {
            version: version.to_string(),
        });
    }
    let line = format!("const TAILWIND_VERSION = \"{version}\"");
    let updated = if pin_regex().is_match(document) {
        pin_regex()
            .replace(document, NoExpand(&line))
            .into_owned()
    } else {
        format!("{line}\n\n{document}")
    };
    Ok(updated)
}

/// Read the lock file, trimming whitespace. `Ok(None)` when missing.
pub fn read_lock(path: &Path) -> Result<Option<String>, VersionError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents.trim().to_string())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(VersionError::LockIo {
            path: path.display().to_string(),
            message: e.to_string(),
        }),
    }
}

/// Record the installed version in the lock file.
pub fn write_lock(path: &Path, version: &str) -> Result<(), VersionError> {
    std::fs::write(path, version).map_err(|e| VersionError::LockIo {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// True when the installed binary disagrees with the document: the lock
/// file is missing, or its version differs from the pin. A document with
/// no pin compares as empty, so it always reports stale against a lock.
pub fn needs_update(lock_path: &Path, document: &str) -> Result<bool, VersionError> {
    let stale = match read_lock(lock_path)? {
        None => true,
        Some(locked) => locked != extract_pin(document).unwrap_or_default(),
    };
    tracing::debug!(lock = %lock_path.display(), stale, "checked installed version");
    Ok(stale)
}

/// Release-asset suffix for a platform, per the upstream naming scheme.
pub fn platform_slug(os: &str, arch: &str) -> Result<&'static str, VersionError> {
    match (os, arch) {
        ("windows", _) => Ok("windows-x64.exe"),
        ("linux", "aarch64") => Ok("linux-arm64"),
        ("linux", _) => Ok("linux-x64"),
        ("macos", "aarch64") => Ok("macos-arm64"),
        ("macos", _) => Ok("macos-x64"),
        _ => Err(VersionError::UnsupportedPlatform {
            os: os.to_string(),
            arch: arch.to_string(),
        }),
    }
}

/// Slug for the platform this process is running on.
pub fn detect_platform_slug() -> Result<&'static str, VersionError> {
    platform_slug(std::env::consts::OS, std::env::consts::ARCH)
}

/// Download URL for the standalone binary release asset.
///
/// A pinned version maps to its tagged release (a leading `v` is accepted
/// and not doubled); no pin maps to the latest-release redirect.
pub fn release_url(version: Option<&str>, slug: &str) -> String {
    match version {
        Some(v) if !v.is_empty() => {
            let tag = if v.starts_with('v') {
                v.to_string()
            } else {
                format!("v{v}")
            };
            format!("{RELEASE_BASE}/download/{tag}/tailwindcss-{slug}")
        }
        _ => format!("{RELEASE_BASE}/latest/download/tailwindcss-{slug}"),
    }
}
