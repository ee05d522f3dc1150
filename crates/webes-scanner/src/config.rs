//! Project configuration loading.
//!
//! Reads an optional `webes.config.json` from the project root. A missing
//! file means defaults; an unreadable or invalid file is logged and also
//! falls back to defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the project root
pub const CONFIG_FILE_NAME: &str = "webes.config.json";

/// Default components directory, relative to the project root
pub const DEFAULT_COMPONENTS_DIR: &str = "dev/components";

/// Default component file extension (without the dot)
pub const DEFAULT_EXTENSION: &str = "webes";

/// Top-level webes configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WebesConfig {
    /// Components directory relative to the project root.
    #[serde(default = "default_components_dir")]
    pub components_dir: PathBuf,

    /// File extension identifying component files.
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_components_dir() -> PathBuf {
    PathBuf::from(DEFAULT_COMPONENTS_DIR)
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for WebesConfig {
    fn default() -> Self {
        Self {
            components_dir: default_components_dir(),
            extension: default_extension(),
        }
    }
}

impl WebesConfig {
    /// Absolute (root-joined) components directory
    #[must_use]
    pub fn components_path(&self, root: &Path) -> PathBuf {
        root.join(&self.components_dir)
    }

    /// Check whether a path names a component file
    #[must_use]
    pub fn is_component(&self, path: &Path) -> bool {
        let extension = self.extension.trim_start_matches('.');
        path.extension().is_some_and(|e| e == extension)
    }
}

/// Load `webes.config.json` from the given project root.
pub fn load_config(root: &Path) -> WebesConfig {
    let config_path = root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        return WebesConfig::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %config_path.display(), "loaded configuration");
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse {}: {}", config_path.display(), e);
                WebesConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", config_path.display(), e);
            WebesConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path());
        assert_eq!(config, WebesConfig::default());
        assert_eq!(config.components_path(dir.path()), dir.path().join("dev/components"));
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "componentsDir": "src/ui" }"#,
        )
        .unwrap();

        let config = load_config(dir.path());
        assert_eq!(config.components_dir, PathBuf::from("src/ui"));
        assert_eq!(config.extension, DEFAULT_EXTENSION);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{ "unknownKey": true }"#).unwrap();

        assert_eq!(load_config(dir.path()), WebesConfig::default());
    }

    #[test]
    fn test_is_component_ignores_leading_dot() {
        let config = WebesConfig {
            extension: ".cmp".to_string(),
            ..WebesConfig::default()
        };
        assert!(config.is_component(Path::new("a/b.cmp")));
        assert!(!config.is_component(Path::new("a/b.webes")));
        assert!(WebesConfig::default().is_component(Path::new("_helloWorld.webes")));
    }
}
