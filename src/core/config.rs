//! Settings file management.
//!
//! Handles reading and writing `stowage.toml`. Every section is optional; a
//! missing file or section falls back to the defaults.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::domain::KeyPolicy;
use crate::error::{ConfigError, Error, Result};

/// Settings stored in `stowage.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Battery table behaviour
    #[serde(default)]
    pub table: TableConfig,
    /// Logging overrides
    #[serde(default)]
    pub log: LogConfig,
}

/// `[table]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    /// Policy applied when two rows derive the same identifier
    #[serde(default)]
    pub duplicate_keys: KeyPolicy,
}

/// `[log]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// tracing filter directive, e.g. `stowage=debug`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl Config {
    /// Load settings from a file.
    ///
    /// A missing file yields the default settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file exists but cannot be read,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = contents.parse()?;

        debug!(duplicate_keys = %config.table.duplicate_keys, "config loaded");
        Ok(config)
    }

    /// Save settings to a file.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or the file write fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), "saving config");

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, contents).map_err(|source| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(())
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents).map_err(ConfigError::Parse)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::CONFIG_FILE;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.table.duplicate_keys, KeyPolicy::Reject);
        assert!(config.log.filter.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let contents = concat!(
            "[table]\n",
            "duplicate_keys = \"keep-first\"\n",
            "\n",
            "[log]\n",
            "filter = \"stowage=info\"\n",
        );
        let config: Config = contents.parse().unwrap();

        assert_eq!(config.table.duplicate_keys, KeyPolicy::KeepFirst);
        assert_eq!(config.log.filter.as_deref(), Some("stowage=info"));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = "".parse().unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_rejects_unknown_policy() {
        let err = "[table]\nduplicate_keys = \"overwrite\"\n"
            .parse::<Config>()
            .unwrap_err();

        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        assert!("[table]\nseparator = \",\"\n".parse::<Config>().is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();

        let config = Config::load(tmp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.table.duplicate_keys = KeyPolicy::KeepLast;
        config.log.filter = Some("stowage=trace".to_string());
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
