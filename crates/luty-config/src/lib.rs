//! # luty-config
//!
//! Layered configuration loading for lutymaps using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LUTYMAPS_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `lutymaps.toml`
//! 4. User-level `~/.config/lutymaps/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LUTYMAPS_SCAN__RADIUS` -> `scan.radius`,
//! `LUTYMAPS_GALAXY__PATH` -> `galaxy.path`, etc.
//!
//! The loaded [`LutyConfig`] is a plain value: build it once at startup and
//! pass it to whatever needs it.
//!
//! # Usage
//!
//! ```no_run
//! use luty_config::LutyConfig;
//!
//! let config = LutyConfig::load_with_dotenv(None).expect("config");
//! println!("scanning {} into {}", config.scan.sector(), config.scan.output.display());
//! ```

mod accounts;
mod error;
mod galaxy;
mod scan;

pub use accounts::AccountsConfig;
pub use error::ConfigError;
pub use galaxy::GalaxyConfig;
pub use scan::ScanConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = "lutymaps.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "LUTYMAPS_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LutyConfig {
    #[serde(default)]
    pub galaxy: GalaxyConfig,
    #[serde(default)]
    pub accounts: AccountsConfig,
    #[serde(default)]
    pub scan: ScanConfig,
}

impl LutyConfig {
    /// Load and validate configuration from all sources.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if `explicit` names a file that does
    /// not exist, [`ConfigError::Figment`] if extraction fails, and
    /// [`ConfigError::InvalidValue`] if validation fails.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit
            && !path.is_file()
        {
            return Err(ConfigError::MissingFile {
                path: path.to_path_buf(),
            });
        }

        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        // A missing .env is not an error.
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit --config file
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check cross-field constraints serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scan.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lutymaps").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = LutyConfig::default();
        assert_eq!(config.galaxy.path, PathBuf::from("galaxy-001.json"));
        assert_eq!(config.accounts.path, PathBuf::from("accounts.json"));
        assert_eq!(config.scan.radius, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: LutyConfig = LutyConfig::figment(None).extract()?;
            assert_eq!(config.scan.output, PathBuf::from("scan.png"));
            assert_eq!(config.scan.supersample, 4);
            Ok(())
        });
    }
}
