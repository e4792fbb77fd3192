//! Deployment-target parameterization for the packaged-template globs.

use serde::{Deserialize, Serialize};

/// A deployment layout whose installed dependency tree ships framework
/// templates that must be scanned alongside project sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployTarget {
    /// Plain virtual environment at `.venv` in the project root.
    Venv,
    /// Heroku slug layout, Python runtime under `.heroku/python`.
    Heroku,
}

impl DeployTarget {
    /// Root of the installed-packages tree for this layout.
    pub fn site_packages_root(self) -> &'static str {
        match self {
            DeployTarget::Venv => ".venv",
            DeployTarget::Heroku => ".heroku/python",
        }
    }

    /// Parse a target name as written in `tailscan.toml` or
    /// `TAILSCAN_DEPLOY_TARGETS`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "venv" => Some(DeployTarget::Venv),
            "heroku" => Some(DeployTarget::Heroku),
            _ => None,
        }
    }
}

/// Expand one packages glob (e.g. `forge*`) into the content pattern
/// covering the selected deployment layouts.
///
/// A single target produces a plain prefix; several targets collapse into
/// one brace set, so the consuming tool sees exactly one pattern per
/// packages glob. Returns `None` when no targets are selected.
pub fn package_pattern(targets: &[DeployTarget], packages_glob: &str) -> Option<String> {
    let prefix = match targets {
        [] => return None,
        [single] => single.site_packages_root().to_string(),
        many => {
            let roots: Vec<&str> = many.iter().map(|t| t.site_packages_root()).collect();
            format!("{{{}}}", roots.join(","))
        }
    };
    Some(format!(
        "./{prefix}/lib/python*/site-packages/{packages_glob}/**/*.{{html,js}}"
    ))
}
