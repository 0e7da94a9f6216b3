//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings.
//! Configuration is loaded from a TOML file; the database path can be
//! overridden with the `BASKETRY_DATABASE` environment variable.
//!
//! # Example
//!
//! ```no_run
//! use basketry::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("basketry.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Deserialize;

use super::logging::LoggingConfig;
use super::naming::NamingConfig;
use crate::application::settings::BasketSettings;
use crate::domain::identity::RoleLimits;
use crate::domain::naming::{TemplateNamer, ID_PLACEHOLDER};
use crate::error::{ConfigError, Result};

/// Environment variable overriding [`Config::database`].
pub const DATABASE_ENV: &str = "BASKETRY_DATABASE";

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Path to SQLite database file.
    ///
    /// Defaults to "basketry.db" in the current directory.
    #[serde(default = "default_database_path")]
    pub database: String,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Roles allowed to have baskets, with their limits.
    ///
    /// A caller holding several roles gets the maximum of each limit.
    #[serde(default)]
    pub roles: IndexMap<String, RoleLimits>,

    /// Item types that may be added to a basket.
    #[serde(default)]
    pub types: Vec<String>,

    /// Default basket names.
    #[serde(default)]
    pub naming: NamingConfig,

    /// Refuse to create baskets beyond the entitled maximum.
    ///
    /// Defaults to false: basket creation is not limited.
    #[serde(default)]
    pub enforce_max_baskets: bool,
}

fn default_database_path() -> String {
    "basketry.db".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database_path(),
            logging: LoggingConfig::default(),
            roles: IndexMap::new(),
            types: Vec::new(),
            naming: NamingConfig::default(),
            enforce_max_baskets: false,
        }
    }
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        if let Ok(database) = std::env::var(DATABASE_ENV) {
            config.database = database;
        }

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    ///
    /// Role limits may be zero or negative (such a role grants nothing), so
    /// they are not checked here.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<()> {
        if self.database.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "database" }.into());
        }

        if self.roles.keys().any(|role| role.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "roles",
                reason: "role names cannot be empty".to_string(),
            }
            .into());
        }

        if self.types.iter().any(|t| t.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "types",
                reason: "item types cannot be empty".to_string(),
            }
            .into());
        }

        if self.naming.default_name.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "naming.default_name",
            }
            .into());
        }

        if !self.naming.numbered_name.contains(ID_PLACEHOLDER) {
            return Err(ConfigError::InvalidValue {
                field: "naming.numbered_name",
                reason: format!("must contain {ID_PLACEHOLDER}"),
            }
            .into());
        }

        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Settings for the basket service.
    #[must_use]
    pub fn settings(&self) -> BasketSettings {
        BasketSettings {
            roles: self.roles.clone(),
            types: self.types.clone(),
            namer: Arc::new(TemplateNamer::from(&self.naming)),
            enforce_max_baskets: self.enforce_max_baskets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.logging.level, "info");
        assert!(config.roles.is_empty());
        assert!(!config.enforce_max_baskets);
        assert_eq!(config.naming.default_name, "My Selection");
    }

    #[test]
    fn role_limits_default_to_one_basket_of_one_hundred() {
        let config = Config::parse_toml("[roles.subscriber]\n").unwrap();
        assert_eq!(config.roles["subscriber"], RoleLimits::default());
        assert_eq!(config.roles["subscriber"].max_baskets, 1);
        assert_eq!(config.roles["subscriber"].basket_capacity, 100);
    }

    #[test]
    fn numbered_name_needs_placeholder() {
        let result = Config::parse_toml("[naming]\nnumbered_name = \"Basket\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "naming.numbered_name",
                ..
            }))
        ));
    }

    #[test]
    fn settings_use_configured_names() {
        let config = Config::parse_toml(
            "[naming]\ndefault_name = \"Ma sélection\"\nnumbered_name = \"Panier {id}\"\n",
        )
        .unwrap();

        let settings = config.settings();
        assert_eq!(settings.namer.default_name(1), "Ma sélection");
        assert_eq!(settings.namer.default_name(4), "Panier 4");
    }
}
