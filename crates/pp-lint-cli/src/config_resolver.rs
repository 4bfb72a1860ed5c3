//! Locates the configuration file for a run.
//!
//! First match wins:
//!
//! 1. `--config <path>`
//! 2. `pp-lint.toml`, then `.pp-lint.toml`, in the working directory
//! 3. `config.toml` in the global directory (`$PP_LINT_CONFIG_DIR` or
//!    `~/.pp-lint/`)
//!
//! With none of these the built-in defaults apply.

use std::path::{Path, PathBuf};

const PROJECT_CONFIG_NAMES: [&str; 2] = ["pp-lint.toml", ".pp-lint.toml"];
const GLOBAL_CONFIG_NAME: &str = "config.toml";
const CONFIG_DIR_ENV: &str = "PP_LINT_CONFIG_DIR";

/// Where the configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given on the command line. Not checked for existence.
    Explicit(PathBuf),
    /// Found in the working directory.
    Project(PathBuf),
    /// Found in the global config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Path of the config file, if there is one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(path) | Self::Project(path) | Self::Global(path) => Some(path),
            Self::Default => None,
        }
    }

    /// True for the global fallback.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// Resolves the config for a run started in `dir`.
#[must_use]
pub fn resolve(dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_with(dir, explicit, global_config_dir().as_deref())
}

fn resolve_with(dir: &Path, explicit: Option<&Path>, global_dir: Option<&Path>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    if let Some(path) = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
    {
        tracing::debug!("Found project config: {}", path.display());
        return ConfigSource::Project(path);
    }

    match global_dir.map(|dir| dir.join(GLOBAL_CONFIG_NAME)) {
        Some(path) if path.is_file() => {
            tracing::debug!("Found global config: {}", path.display());
            ConfigSource::Global(path)
        }
        _ => ConfigSource::Default,
    }
}

/// Global config directory: `$PP_LINT_CONFIG_DIR`, else `~/.pp-lint`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => home::home_dir().map(|home| home.join(".pp-lint")),
    }
}
