use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Source of a configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Application configuration with source tracking
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Path to the diary JSON document (plan, day logs, goals)
    pub data_path: ConfigValue<PathBuf>,
    /// Path to the read-only food catalog JSON file
    pub catalog_path: ConfigValue<PathBuf>,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

/// Internal struct for deserializing config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    data_path: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut data_path = ConfigValue::new(
            Self::default_data_dir().join("diary.json"),
            ConfigSource::Default,
        );
        let mut catalog_path = ConfigValue::new(
            Self::default_data_dir().join("foods.json"),
            ConfigSource::Default,
        );
        let mut config_file = None;

        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            config_file = Some(path.clone());

            if let Some(p) = file_config.data_path {
                data_path = ConfigValue::new(Self::resolve_against(&path, p), ConfigSource::File);
            }
            if let Some(p) = file_config.catalog_path {
                catalog_path = ConfigValue::new(Self::resolve_against(&path, p), ConfigSource::File);
            }
        }

        if let Ok(p) = std::env::var("MTRACK_DATA_PATH") {
            data_path = ConfigValue::new(PathBuf::from(p), ConfigSource::Environment);
        }
        if let Ok(p) = std::env::var("MTRACK_CATALOG_PATH") {
            catalog_path = ConfigValue::new(PathBuf::from(p), ConfigSource::Environment);
        }

        Ok(Self {
            data_path,
            catalog_path,
            config_file,
        })
    }

    /// Resolve relative paths against the config file's directory
    fn resolve_against(config_path: &std::path::Path, value: PathBuf) -> PathBuf {
        if value.is_relative() {
            config_path
                .parent()
                .map(|p| p.join(&value))
                .unwrap_or(value)
        } else {
            value
        }
    }

    /// Default config directory (platform-specific):
    /// - Linux: ~/.config/mealtrack/
    /// - macOS: ~/Library/Application Support/mealtrack/
    /// - Windows: %APPDATA%/mealtrack/
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mealtrack")
    }

    /// Default data directory (platform-specific):
    /// - Linux: ~/.local/share/mealtrack/
    /// - macOS: ~/Library/Application Support/mealtrack/
    /// - Windows: %APPDATA%/mealtrack/
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mealtrack")
    }

    /// Default config file path (platform-specific config dir + config.yaml)
    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file {}: {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file {}: {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "data_path: my-diary.json").unwrap();
        writeln!(file, "catalog_path: /etc/foods.json").unwrap();

        let config = Config::load(Some(config_path.clone())).unwrap();
        assert_eq!(config.data_path.source, ConfigSource::File);
        // Relative paths resolve against the config file's directory
        assert_eq!(config.data_path.value, dir.path().join("my-diary.json"));
        // Absolute paths pass through
        assert_eq!(config.catalog_path.value, PathBuf::from("/etc/foods.json"));
        assert_eq!(config.config_file, Some(config_path));
    }

    #[test]
    fn test_config_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path().join("nope.yaml"))).unwrap();
        assert_eq!(config.data_path.source, ConfigSource::Default);
        assert_eq!(config.catalog_path.source, ConfigSource::Default);
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_config_invalid_yaml_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        std::fs::write(&config_path, "data_path: [not: closed").unwrap();

        let err = Config::load(Some(config_path)).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_, _)));
    }

    #[test]
    fn test_config_source_display() {
        assert_eq!(format!("{}", ConfigSource::Default), "default");
        assert_eq!(format!("{}", ConfigSource::Environment), "environment");
    }
}
