//! Configuration persistence utilities
//!
//! Provides functions for loading and saving app configuration to disk.

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to determine config directory
    #[error("Could not determine config directory")]
    NoConfigDir,
    /// IO error while reading/writing config
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Failed to parse config file
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize config
    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Get the base configuration directory shared by every app in the series
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "clock-series", "clocks")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the configuration file path for a specific app
pub fn config_path(app_name: &str) -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(format!("{}.toml", app_name)))
}

/// Load configuration for a specific app
///
/// Returns `None` if the config file doesn't exist yet.
/// Returns an error if the file exists but can't be parsed.
pub fn load_config<T: DeserializeOwned>(app_name: &str) -> Result<Option<T>, ConfigError> {
    let path = config_path(app_name).ok_or(ConfigError::NoConfigDir)?;

    if !path.exists() {
        tracing::debug!("No config at {}", path.display());
        return Ok(None);
    }

    let contents = fs::read_to_string(&path)?;
    let config: T = toml::from_str(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

/// Save configuration for a specific app
pub fn save_config<T: Serialize>(app_name: &str, config: &T) -> Result<(), ConfigError> {
    let path = config_path(app_name).ok_or(ConfigError::NoConfigDir)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(config)?;
    fs::write(&path, contents)?;
    tracing::info!("Wrote config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestConfig {
        face_radius: f32,
        toast_secs: f32,
    }

    #[test]
    fn test_config_dir() {
        let dir = config_dir();
        assert!(dir.is_some());
    }

    #[test]
    fn test_config_path() {
        let path = config_path("test_picker");
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().ends_with("test_picker.toml"));
    }

    #[test]
    fn test_load_missing_config_is_none() {
        let loaded: Option<TestConfig> =
            load_config("clock_face_picker_test_never_written").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_malformed_config_is_parse_error() {
        let name = "clock_face_picker_test_malformed";
        let path = config_path(name).unwrap();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "face_radius = \"wide\"\n").unwrap();

        let result = load_config::<TestConfig>(name);
        fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error:"));
    }

    #[test]
    fn test_saved_config_loads_back() {
        let name = "clock_face_picker_test_saved";
        let config = TestConfig {
            face_radius: 120.0,
            toast_secs: 4.0,
        };
        save_config(name, &config).unwrap();

        let loaded = load_config::<TestConfig>(name);
        fs::remove_file(config_path(name).unwrap()).unwrap();
        assert_eq!(loaded.unwrap(), Some(config));
    }
}
