use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory name used under the user config dir
const APP_DIR: &str = "projcolor";

/// Default workspace settings file, relative to the workspace root
const DEFAULT_SETTINGS_FILE: &str = ".vscode/settings.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// File holding the palette and recent colors (global scope)
    pub store_path: Option<PathBuf>,
    /// Workspace settings file, relative to the workspace root
    pub settings_file: Option<String>,
    /// Ask before deleting, clearing or resetting
    pub confirm: Option<bool>,
}

impl Config {
    /// Merge two configs, with `other` taking precedence
    pub fn merge(self, other: Config) -> Config {
        Config {
            store_path: other.store_path.or(self.store_path),
            settings_file: other.settings_file.or(self.settings_file),
            confirm: other.confirm.or(self.confirm),
        }
    }

    /// Global store file, defaulting to `<config dir>/projcolor/settings.json`
    pub fn store_path(&self) -> Option<PathBuf> {
        self.store_path
            .clone()
            .or_else(|| dirs::config_dir().map(|p| p.join(APP_DIR).join("settings.json")))
    }

    /// Workspace settings file, defaulting to ".vscode/settings.json"
    pub fn settings_file(&self) -> &str {
        self.settings_file.as_deref().unwrap_or(DEFAULT_SETTINGS_FILE)
    }

    /// Whether destructive operations prompt first, defaulting to true
    pub fn confirm(&self) -> bool {
        self.confirm.unwrap_or(true)
    }
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load global config from ~/.config/projcolor/config.toml
fn load_global_config() -> Result<Option<Config>, ConfigError> {
    let config_path = dirs::config_dir().map(|p| p.join(APP_DIR).join("config.toml"));

    if let Some(path) = config_path {
        if path.exists() {
            return read_config(&path).map(Some);
        }
    }

    Ok(None)
}

/// Load local config from .projcolor/config.toml in the start directory or its parents
fn load_local_config(start_path: &Path) -> Result<Option<Config>, ConfigError> {
    let mut current = start_path.to_path_buf();

    loop {
        let config_path = current.join(".projcolor").join("config.toml");
        if config_path.exists() {
            return read_config(&config_path).map(Some);
        }

        if !current.pop() {
            break;
        }
    }

    Ok(None)
}

/// Load and merge configs (global + local) starting from `start_path`
pub fn load_config_from(start_path: &Path) -> Result<Config, ConfigError> {
    let global = load_global_config()?.unwrap_or_default();
    let local = load_local_config(start_path)?.unwrap_or_default();

    Ok(global.merge(local))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.settings_file(), ".vscode/settings.json");
        assert!(config.confirm());
    }

    #[test]
    fn test_merge_prefers_other() {
        let global = Config {
            store_path: Some(PathBuf::from("/global/settings.json")),
            settings_file: Some("global.json".to_string()),
            confirm: Some(true),
        };
        let local = Config {
            store_path: None,
            settings_file: Some("local.json".to_string()),
            confirm: Some(false),
        };

        let merged = global.merge(local);
        assert_eq!(merged.store_path, Some(PathBuf::from("/global/settings.json")));
        assert_eq!(merged.settings_file(), "local.json");
        assert!(!merged.confirm());
    }

    #[test]
    fn test_explicit_store_path_wins() {
        let config = Config {
            store_path: Some(PathBuf::from("/tmp/colors.json")),
            ..Default::default()
        };
        assert_eq!(config.store_path(), Some(PathBuf::from("/tmp/colors.json")));
    }

    #[test]
    fn test_local_config_found_in_parent() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join(".projcolor");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("config.toml"),
            "settings_file = \"custom/settings.json\"\nconfirm = false\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = load_local_config(&nested).unwrap().unwrap();
        assert_eq!(config.settings_file(), "custom/settings.json");
        assert!(!config.confirm());
    }

    #[test]
    fn test_local_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join(".projcolor");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.toml"), "confirm = \"maybe\"").unwrap();

        let result = load_local_config(dir.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
