//! # tsv-config
//!
//! Layered configuration loading for the TypeSpec validator using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TSV_*` prefix, `__` as separator)
//! 2. Project-level `tsv.toml`
//! 3. User-level `~/.config/tsv/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TSV_VALIDATION__FAIL_ON` -> `validation.fail_on`,
//! `TSV_DISCOVERY__PROJECT_CONFIG_FILE` -> `discovery.project_config_file`,
//! etc. The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use tsv_config::TsvConfig;
//!
//! let config = TsvConfig::load().expect("config");
//! assert_eq!(config.discovery.project_config_file, "tspconfig.yaml");
//! ```

mod assets;
mod discovery;
mod error;
mod notify;
mod validation;

pub use assets::AssetsConfig;
pub use discovery::DiscoveryConfig;
pub use error::ConfigError;
pub use notify::NotifyConfig;
pub use validation::ValidationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TsvConfig {
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
}

impl TsvConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` before building the figment. This is the typical entry
    /// point for the CLI.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from("tsv.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TSV_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tsv").join("config.toml"))
    }

    /// Load `.env` from the current directory or any ancestor.
    ///
    /// Silently does nothing if no `.env` is found.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = TsvConfig::default();
        assert_eq!(config.discovery.project_config_file, "tspconfig.yaml");
        assert!(!config.assets.is_configured());
        assert!(!config.notify.has_template_dir());
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = TsvConfig::figment();
        let config: TsvConfig = figment.extract().expect("should extract defaults");
        assert!(!config.discovery.exclude.is_empty());
    }
}
