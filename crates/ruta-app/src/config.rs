//! Configuration management for ruta-dimension
//!
//! Config stored at: ~/.config/ruta-dimension/config.json

use ruta_domain::service::DEFAULT_RESERVE_PCT;
use ruta_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Share of the operating fleet kept in reserve, 0.0-1.0
    #[serde(default = "default_reserve_percentage")]
    pub reserve_percentage: f64,

    /// Decimal places for rounded figures in tables
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

fn default_reserve_percentage() -> f64 {
    DEFAULT_RESERVE_PCT
}

fn default_decimals() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Table,
            reserve_percentage: default_reserve_percentage(),
            decimals: default_decimals(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("ruta-dimension");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config =
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config, falling back to defaults when the stored file is
    /// unreadable or invalid. Used by the commands that rewrite the file.
    pub fn load_or_default_from(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "ignoring invalid config file, starting from defaults"
                );
                Config::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!(path = %path.display(), "configuration saved");
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.reserve_percentage) {
            return Err(ConfigError::InvalidValue(format!(
                "reserve_percentage must be in [0, 1], got {}",
                self.reserve_percentage
            ))
            .into());
        }
        if self.decimals > 6 {
            return Err(ConfigError::InvalidValue(format!(
                "decimals must be at most 6, got {}",
                self.decimals
            ))
            .into());
        }
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Route Dimensioning Configuration")?;
        writeln!(f, "================================")?;
        writeln!(f)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Reserve:        {:.0}%", self.reserve_percentage * 100.0)?;
        writeln!(f, "Decimals:       {}", self.decimals)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruta_types::Error;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            output_format: OutputFormat::Json,
            reserve_percentage: 0.15,
            decimals: 3,
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"output_format": "json"}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!((config.reserve_percentage - 0.10).abs() < f64::EPSILON);
        assert_eq!(config.decimals, 2);
    }

    #[test]
    fn test_invalid_reserve_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"reserve_percentage": 2.0}"#).unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_garbage_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_or_default_recovers_from_bad_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"reserve_percentage": 2.0}"#).unwrap();
        assert_eq!(Config::load_or_default_from(&path), Config::default());

        std::fs::write(&path, r#"{"decimals": 3}"#).unwrap();
        assert_eq!(Config::load_or_default_from(&path).decimals, 3);
    }
}
