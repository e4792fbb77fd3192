//! The content-scan configuration document with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::deploy_target::{package_pattern, DeployTarget};
use super::ThemeConfig;
use crate::errors::ConfigError;

/// The scan-configuration document, read once per build invocation by the
/// consuming CSS build tool and never mutated afterwards.
///
/// Resolution order (highest priority first):
/// 1. Caller overrides (applied via [`ScanOverrides`])
/// 2. Environment variables (`TAILSCAN_*`)
/// 3. Project config (`tailscan.toml` in the project root)
/// 4. Compiled defaults (the scaffold document)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Glob patterns for the files scanned for utility-class usage,
    /// relative to the project root. Order is preserved as written;
    /// duplicates are redundant, not an error.
    pub content: Vec<String>,
    /// Plugin references resolved by the consuming tool's registry,
    /// applied in listed order. Empty means no extensions.
    pub plugins: Vec<String>,
    /// Deployment layouts whose installed packages ship scannable
    /// templates. Empty disables the packaged-template patterns.
    pub deploy_targets: Vec<DeployTarget>,
    /// Package-name globs matched inside each layout's site-packages tree.
    pub package_globs: Vec<String>,
    /// Additive design-token overrides (`theme.extend`).
    pub theme: ThemeConfig,
}

impl Default for ScanConfig {
    /// Compiled defaults, equal to the scaffold document.
    fn default() -> Self {
        Self {
            content: vec!["./app/**/*.{html,js}".to_string()],
            plugins: vec!["@tailwindcss/forms".to_string()],
            deploy_targets: vec![DeployTarget::Venv, DeployTarget::Heroku],
            package_globs: vec!["forge*".to_string()],
            theme: ThemeConfig::default(),
        }
    }
}

/// Caller overrides applied as the highest-priority layer.
#[derive(Debug, Clone, Default)]
pub struct ScanOverrides {
    /// Replace the content patterns entirely.
    pub content: Option<Vec<String>>,
    /// Plugins appended after the resolved list, in the given order.
    pub extra_plugins: Vec<String>,
    /// Replace the deployment-target set. `Some(vec![])` disables the
    /// packaged-template patterns.
    pub deploy_targets: Option<Vec<DeployTarget>>,
}

impl ScanConfig {
    /// Load the document with layered resolution.
    ///
    /// Resolution order (highest priority first):
    /// 1. Caller overrides
    /// 2. Environment variables (`TAILSCAN_*`)
    /// 3. Project config (`tailscan.toml` in `root`)
    /// 4. Compiled defaults
    ///
    /// A missing project file falls back silently; a malformed one is a
    /// [`ConfigError::ParseError`]. The resolved value is validated before
    /// it is returned, and loading the same inputs twice yields identical
    /// values.
    pub fn load(root: &Path, overrides: Option<&ScanOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_path = root.join("tailscan.toml");
        if project_path.exists() {
            Self::merge_toml_file(&mut config, &project_path)?;
            tracing::debug!(path = %project_path.display(), "merged project config");
        }

        Self::apply_env_overrides(&mut config);

        if let Some(ov) = overrides {
            Self::apply_overrides(&mut config, ov);
        }

        Self::validate(&config)?;

        tracing::info!(
            root = %root.display(),
            patterns = config.content.len(),
            plugins = config.plugins.len(),
            "scan configuration resolved"
        );
        Ok(config)
    }

    /// Load the document from a TOML string (no layering, no validation).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the document back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Structural validation only; glob semantics belong to the consuming
    /// tool. An empty `content` list is a valid but degenerate document.
    pub fn validate(config: &ScanConfig) -> Result<(), ConfigError> {
        for (i, pattern) in config.content.iter().enumerate() {
            if pattern.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("content[{i}]"),
                    message: "pattern must not be empty".to_string(),
                });
            }
            if Path::new(pattern).is_absolute() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("content[{i}]"),
                    message: "absolute paths are not supported; use a relative glob"
                        .to_string(),
                });
            }
        }
        for (i, plugin) in config.plugins.iter().enumerate() {
            if plugin.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("plugins[{i}]"),
                    message: "plugin reference must not be empty".to_string(),
                });
            }
        }
        for (i, glob) in config.package_globs.iter().enumerate() {
            if glob.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("package_globs[{i}]"),
                    message: "packages glob must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// The full ordered pattern list handed to the renderer: explicit
    /// `content` patterns followed by the expanded packaged-template globs.
    pub fn effective_content(&self) -> Vec<String> {
        let mut patterns = self.content.clone();
        for glob in &self.package_globs {
            if let Some(pattern) = package_pattern(&self.deploy_targets, glob) {
                patterns.push(pattern);
            }
        }
        patterns
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ScanConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: ScanConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`. List fields replace the base only when
    /// non-empty; `theme.extend` merges key by key, `other` winning.
    fn merge(base: &mut ScanConfig, other: &ScanConfig) {
        if !other.content.is_empty() {
            base.content = other.content.clone();
        }
        if !other.plugins.is_empty() {
            base.plugins = other.plugins.clone();
        }
        if !other.deploy_targets.is_empty() {
            base.deploy_targets = other.deploy_targets.clone();
        }
        if !other.package_globs.is_empty() {
            base.package_globs = other.package_globs.clone();
        }
        for (key, value) in &other.theme.extend {
            base.theme.extend.insert(key.clone(), value.clone());
        }
    }

    /// Apply environment variable overrides.
    /// Comma-separated lists; unparseable values are ignored.
    fn apply_env_overrides(config: &mut ScanConfig) {
        if let Ok(val) = std::env::var("TAILSCAN_CONTENT") {
            let items = split_list(&val);
            if !items.is_empty() {
                config.content = items;
            }
        }
        if let Ok(val) = std::env::var("TAILSCAN_PLUGINS") {
            let items = split_list(&val);
            if !items.is_empty() {
                config.plugins = items;
            }
        }
        if let Ok(val) = std::env::var("TAILSCAN_DEPLOY_TARGETS") {
            let targets: Vec<DeployTarget> =
                val.split(',').filter_map(DeployTarget::parse).collect();
            if !targets.is_empty() {
                config.deploy_targets = targets;
            }
        }
    }

    /// Apply caller overrides (highest priority).
    fn apply_overrides(config: &mut ScanConfig, overrides: &ScanOverrides) {
        if let Some(ref content) = overrides.content {
            config.content = content.clone();
        }
        for plugin in &overrides.extra_plugins {
            config.plugins.push(plugin.clone());
        }
        if let Some(ref targets) = overrides.deploy_targets {
            config.deploy_targets = targets.clone();
        }
    }
}

fn split_list(val: &str) -> Vec<String> {
    val.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
