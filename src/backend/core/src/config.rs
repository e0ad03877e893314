//! Configuration management.
//!
//! Settings come from an optional file plus `ESREST__`-prefixed environment
//! variables, e.g. `ESREST__VALIDATION__STRICT_PRIVILEGES=false`. Every
//! section and field has a default, so an empty source yields
//! `Config::default()`.

use serde::Deserialize;
use std::path::Path;

use crate::error::Result;
use crate::telemetry::LoggingConfig;
use crate::validation::RoleValidator;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "ESREST";

/// Main configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Role validation policy
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Policy applied by [`RoleValidator`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidationConfig {
    /// Reject privilege strings outside the known vocabularies
    #[serde(default = "default_strict_privileges")]
    pub strict_privileges: bool,

    /// Reject lists that repeat an entry
    #[serde(default = "default_reject_duplicates")]
    pub reject_duplicates: bool,

    /// Accept `/regex/` index patterns
    #[serde(default = "default_allow_regex_patterns")]
    pub allow_regex_patterns: bool,

    /// Maximum role name length in characters
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict_privileges: default_strict_privileges(),
            reject_duplicates: default_reject_duplicates(),
            allow_regex_patterns: default_allow_regex_patterns(),
            max_name_length: default_max_name_length(),
        }
    }
}

// Default value functions
fn default_strict_privileges() -> bool { true }
fn default_reject_duplicates() -> bool { true }
fn default_allow_regex_patterns() -> bool { true }
fn default_max_name_length() -> usize { 1024 }

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

impl Config {
    /// Load configuration from the environment only.
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(environment())
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Load from a file, with environment variables taking precedence.
    ///
    /// The format follows the file extension (`.toml`, `.yaml`, `.json`, ...).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Parse TOML text, ignoring the environment.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// A role validator using this configuration's policy.
    pub fn validator(&self) -> RoleValidator {
        RoleValidator::new(self.validation.clone())
    }
}
