//! User configuration loaded from `config.toml`.

use crate::calculator::FormatOptions;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Display formatting settings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    pub thousands_separator: String,
    pub decimal_separator: String,
    pub max_fraction_digits: usize,
    pub scientific_digits: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        let options = FormatOptions::default();
        Self {
            thousands_separator: options.thousands_separator,
            decimal_separator: options.decimal_separator,
            max_fraction_digits: options.max_fraction_digits,
            scientific_digits: options.scientific_digits,
        }
    }
}

impl From<FormatConfig> for FormatOptions {
    fn from(config: FormatConfig) -> Self {
        Self {
            thousands_separator: config.thousands_separator,
            decimal_separator: config.decimal_separator,
            max_fraction_digits: config.max_fraction_digits,
            scientific_digits: config.scientific_digits,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub format: FormatConfig,
    /// A `tracing` filter directive, e.g. `"debug"` or `"zcalc=trace"`.
    pub log_level: Option<String>,
}

impl Config {
    /// Default config file location, `~/.config/zcalc/config.toml` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
    }

    /// Load the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents, path),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parse a config from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Self::parse(contents, Path::new("<inline>"))
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let format = &self.format;
        if format.decimal_separator.is_empty() {
            return Err(ConfigError::Invalid(
                "decimal_separator must not be empty".to_string(),
            ));
        }
        if format.thousands_separator == format.decimal_separator {
            return Err(ConfigError::Invalid(format!(
                "thousands_separator and decimal_separator are both {:?}",
                format.decimal_separator
            )));
        }
        if format.scientific_digits > 16 || format.max_fraction_digits > 16 {
            return Err(ConfigError::Invalid(
                "digit counts must be at most 16".to_string(),
            ));
        }
        Ok(())
    }
}
