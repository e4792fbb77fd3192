//! Tests for version pin management and standalone-binary metadata.

use proptest::prelude::*;
use tailscan_core::errors::VersionError;
use tailscan_core::version;

const UNPINNED: &str = "module.exports = {\n  content: [],\n}\n";

/// Helper: create a temporary directory.
fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// A document without the pin line yields no version.
#[test]
fn test_extract_absent() {
    assert_eq!(version::extract_pin(UNPINNED), None);
}

/// Setting a pin on an unpinned document prepends the line.
#[test]
fn test_set_pin_prepends() {
    let pinned = version::set_pin(UNPINNED, "3.4.3").unwrap();
    assert!(pinned.starts_with("const TAILWIND_VERSION = \"3.4.3\"\n\n"));
    assert!(pinned.ends_with(UNPINNED));
    assert_eq!(version::extract_pin(&pinned), Some("3.4.3".to_string()));
}

/// Setting a pin on a pinned document replaces the line in place.
#[test]
fn test_set_pin_replaces() {
    let pinned = version::set_pin(UNPINNED, "3.4.3").unwrap();
    let updated = version::set_pin(&pinned, "4.0.0").unwrap();

    assert_eq!(version::extract_pin(&updated), Some("4.0.0".to_string()));
    assert_eq!(updated.matches("const TAILWIND_VERSION").count(), 1);
    // The document body is untouched.
    assert!(updated.ends_with(UNPINNED));
}

/// A version that cannot sit inside the double-quoted pin line is rejected
/// instead of corrupting the document.
#[test]
fn test_set_pin_rejects_unquotable_versions() {
    for bad in ["3.4\"3", "3.4\\3", "3.4\n3"] {
        match version::set_pin(UNPINNED, bad).unwrap_err() {
            VersionError::InvalidVersion { version } => assert_eq!(version, bad),
            other => panic!("Expected InvalidVersion, got: {other:?}"),
        }
    }
}

/// Lock file round-trip, with whitespace trimmed on read.
#[test]
fn test_lock_file_round_trip() {
    let dir = tempdir();
    let lock = dir.path().join("tailwind.version");

    assert_eq!(version::read_lock(&lock).unwrap(), None);

    version::write_lock(&lock, "3.4.3\n").unwrap();
    assert_eq!(version::read_lock(&lock).unwrap(), Some("3.4.3".to_string()));
}

/// needs_update truth table: missing lock, match, mismatch, unpinned doc.
#[test]
fn test_needs_update() {
    let dir = tempdir();
    let lock = dir.path().join("tailwind.version");
    let pinned = version::set_pin(UNPINNED, "3.4.3").unwrap();

    // No lock file: always stale.
    assert!(version::needs_update(&lock, &pinned).unwrap());

    version::write_lock(&lock, "3.4.3").unwrap();
    assert!(!version::needs_update(&lock, &pinned).unwrap());

    version::write_lock(&lock, "3.3.0").unwrap();
    assert!(version::needs_update(&lock, &pinned).unwrap());

    // Installed but the document carries no pin: stale.
    assert!(version::needs_update(&lock, UNPINNED).unwrap());
}

/// Platform slugs follow the upstream release-asset naming scheme.
#[test]
fn test_platform_slugs() {
    assert_eq!(version::platform_slug("windows", "x86_64").unwrap(), "windows-x64.exe");
    assert_eq!(version::platform_slug("linux", "aarch64").unwrap(), "linux-arm64");
    assert_eq!(version::platform_slug("linux", "x86_64").unwrap(), "linux-x64");
    assert_eq!(version::platform_slug("macos", "aarch64").unwrap(), "macos-arm64");
    assert_eq!(version::platform_slug("macos", "x86_64").unwrap(), "macos-x64");

    match version::platform_slug("freebsd", "x86_64").unwrap_err() {
        VersionError::UnsupportedPlatform { os, .. } => assert_eq!(os, "freebsd"),
        other => panic!("Expected UnsupportedPlatform, got: {other:?}"),
    }
}

/// Release URLs: pinned, v-prefixed pin, and latest.
#[test]
fn test_release_urls() {
    assert_eq!(
        version::release_url(Some("3.4.3"), "linux-x64"),
        "https://github.com/tailwindlabs/tailwindcss/releases/download/v3.4.3/tailwindcss-linux-x64"
    );
    // A leading `v` is not doubled.
    assert_eq!(
        version::release_url(Some("v3.4.3"), "linux-x64"),
        "https://github.com/tailwindlabs/tailwindcss/releases/download/v3.4.3/tailwindcss-linux-x64"
    );
    assert_eq!(
        version::release_url(None, "macos-arm64"),
        "https://github.com/tailwindlabs/tailwindcss/releases/latest/download/tailwindcss-macos-arm64"
    );
    // An empty pin behaves like no pin, matching the original tooling.
    assert_eq!(
        version::release_url(Some(""), "linux-x64"),
        "https://github.com/tailwindlabs/tailwindcss/releases/latest/download/tailwindcss-linux-x64"
    );
}

proptest! {
    /// Setting then extracting a pin returns the same version, whether or
    /// not the document already carried one.
    #[test]
    fn prop_pin_round_trip(v in "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,3}") {
        let fresh = version::set_pin(UNPINNED, &v).unwrap();
        prop_assert_eq!(version::extract_pin(&fresh), Some(v.clone()));

        let repinned =
            version::set_pin(&version::set_pin(UNPINNED, "1.0.0").unwrap(), &v).unwrap();
        prop_assert_eq!(version::extract_pin(&repinned), Some(v.clone()));
    }
}
