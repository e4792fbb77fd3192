//! Theme extension table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Additive design-token overrides, merged by the consuming tool over its
/// built-in defaults.
///
/// Keys are theme category names (`colors`, `spacing`, ...); values are
/// carried opaquely. This crate does not interpret theme semantics, so
/// unknown categories pass straight through to the rendered document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    /// Entries under `theme.extend` in the rendered document. A `BTreeMap`
    /// keeps the rendered key order deterministic.
    pub extend: BTreeMap<String, serde_json::Value>,
}

impl ThemeConfig {
    /// True when no overrides are present (renders as `extend: {}`).
    pub fn is_empty(&self) -> bool {
        self.extend.is_empty()
    }
}
