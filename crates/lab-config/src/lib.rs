//! # lab-config
//!
//! Layered configuration loading for ormlab using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ORMLAB_*` prefix, `__` as separator)
//! 2. Project-level `.ormlab/config.toml`
//! 3. User-level `~/.config/ormlab/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `ORMLAB_DATABASE__PATH` -> `database.path`,
//! `ORMLAB_PACK__ARCHIVE_PREFIX` -> `pack.archive_prefix`, etc.
//!
//! ```no_run
//! use lab_config::LabConfig;
//!
//! let config = LabConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.database.path);
//! ```

mod database;
mod error;
mod general;
mod pack;

pub use database::{DEFAULT_DATABASE_PATH, DatabaseConfig, IN_MEMORY};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use pack::PackConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const FORMATS: &[&str] = &["json", "table", "raw"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LabConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub pack: PackConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LabConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`LabConfig::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the current directory, then [`LabConfig::load`].
    ///
    /// # Errors
    ///
    /// Same as [`LabConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".ormlab/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("ORMLAB_").split("__"))
    }

    /// Reject values that would only fail later, deep inside a command.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(invalid("database.path", "must not be empty"));
        }
        if !FORMATS.contains(&self.general.default_format.as_str()) {
            return Err(invalid(
                "general.default_format",
                &format!("expected one of {}", FORMATS.join(", ")),
            ));
        }
        if self.pack.archive_prefix.is_empty()
            || self.pack.archive_prefix.contains(['/', '\\'])
        {
            return Err(invalid(
                "pack.archive_prefix",
                "must be a non-empty file name without separators",
            ));
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ormlab").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
