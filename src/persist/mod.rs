//! Persistence layer for the menu text configuration.
//!
//! Provides RON-based save/load of [`MenuTextConfig`].

use std::fs;
use std::path::Path;

use bevy::prelude::*;

use crate::config::MenuTextConfig;

/// Default config file path.
pub const DEFAULT_CONFIG_FILE: &str = "UserData/CustomMenuText.ron";

/// Load config from a RON file.
pub fn load(path: impl AsRef<Path>) -> Result<MenuTextConfig, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(path.display().to_string(), e.to_string()))?;

    ron::from_str(&contents)
        .map_err(|e| ConfigError::Parse(path.display().to_string(), e.to_string()))
}

/// Save config to a RON file.
pub fn save(config: &MenuTextConfig, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Io(parent.display().to_string(), e.to_string()))?;
        }
    }

    let pretty = ron::ser::PrettyConfig::new()
        .depth_limit(2)
        .enumerate_arrays(false);

    let contents = ron::ser::to_string_pretty(config, pretty)
        .map_err(|e| ConfigError::Serialize(e.to_string()))?;

    fs::write(path, contents)
        .map_err(|e| ConfigError::Io(path.display().to_string(), e.to_string()))
}

/// Load config from file, returning default if it can't be read.
pub fn load_or_default(path: impl AsRef<Path>) -> MenuTextConfig {
    load(path).unwrap_or_default()
}

/// Load the stored config, writing the defaults when there is none.
///
/// A missing file, or one with `regenerate_config` set, is replaced by the
/// default configuration. A file that fails to parse is left alone so the
/// user's edits are not lost; the error is returned.
pub fn load_or_regenerate(path: impl AsRef<Path>) -> Result<MenuTextConfig, ConfigError> {
    let path = path.as_ref();

    if path.exists() {
        let config = load(path)?;
        if !config.regenerate_config {
            return Ok(config);
        }
        info!("Regenerating config at '{}'", path.display());
    } else {
        info!("No config file found at '{}', writing defaults", path.display());
    }

    let config = MenuTextConfig::default();
    if let Err(e) = save(&config, path) {
        // Still usable in memory
        warn!("Failed to write default config: {}", e);
    }
    Ok(config)
}

/// Errors that can occur during config operations.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error (path, message).
    Io(String, String),
    /// Parse error (path, message).
    Parse(String, String),
    /// Serialization error.
    Serialize(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, msg) => write!(f, "IO error for '{}': {}", path, msg),
            ConfigError::Parse(path, msg) => write!(f, "Parse error for '{}': {}", path, msg),
            ConfigError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Resource tracking the config file path.
#[derive(Resource, Debug, Clone)]
pub struct ConfigPath(pub String);

impl Default for ConfigPath {
    fn default() -> Self {
        Self(DEFAULT_CONFIG_FILE.to_string())
    }
}

/// System to load config on startup.
pub fn load_config_on_startup(mut config: ResMut<MenuTextConfig>, config_path: Res<ConfigPath>) {
    let path = &config_path.0;

    match load_or_regenerate(path) {
        Ok(loaded) => {
            info!("Loaded menu text config from '{}'", path);
            *config = loaded;
        }
        Err(e) => {
            error!("Failed to load config: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_config_file_roundtrip() {
        let config = MenuTextConfig::with_text("A\nB\n\n# comment\nC");

        let temp = NamedTempFile::new().unwrap();
        save(&config, temp.path()).unwrap();

        let loaded = load(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_file_load_missing() {
        let result = load("nonexistent_file.ron");
        assert!(matches!(result, Err(ConfigError::Io(..))));
    }

    #[test]
    fn test_config_file_load_or_default() {
        let config = load_or_default("nonexistent_file.ron");
        assert_eq!(config, MenuTextConfig::default());
    }

    #[test]
    fn test_config_parse_ron() {
        let ron_content = r#"(
    custom_text: "HELLO\nWORLD\n\nBYE",
)"#;

        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(ron_content.as_bytes()).unwrap();
        temp.flush().unwrap();

        let config = load(temp.path()).unwrap();
        assert_eq!(config.custom_text, "HELLO\nWORLD\n\nBYE");
        assert!(!config.regenerate_config);
    }

    #[test]
    fn test_load_or_regenerate_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("UserData").join("CustomMenuText.ron");

        let config = load_or_regenerate(&path).unwrap();
        assert_eq!(config, MenuTextConfig::default());
        assert_eq!(load(&path).unwrap(), MenuTextConfig::default());
    }

    #[test]
    fn test_load_or_regenerate_keeps_user_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CustomMenuText.ron");
        save(&MenuTextConfig::with_text("MINE"), &path).unwrap();

        let config = load_or_regenerate(&path).unwrap();
        assert_eq!(config.custom_text, "MINE");
    }

    #[test]
    fn test_load_or_regenerate_flag() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CustomMenuText.ron");
        let config = MenuTextConfig {
            custom_text: "MINE".to_string(),
            regenerate_config: true,
        };
        save(&config, &path).unwrap();

        let config = load_or_regenerate(&path).unwrap();
        assert_eq!(config, MenuTextConfig::default());
        assert_eq!(load(&path).unwrap(), MenuTextConfig::default());
    }

    #[test]
    fn test_load_or_regenerate_parse_error_keeps_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CustomMenuText.ron");
        fs::write(&path, "(custom_text: ").unwrap();

        let result = load_or_regenerate(&path);
        assert!(matches!(result, Err(ConfigError::Parse(..))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "(custom_text: ");
    }
}
