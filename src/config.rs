use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Collection directory, relative to the working directory unless absolute.
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
    /// Answer assumed when the randomized-direction prompt is left empty.
    #[serde(default = "default_randomize_direction")]
    pub randomize_direction_default: bool,
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from("PhraseTrain")
}
fn default_extension() -> String {
    "txt".to_string()
}
fn default_clear_screen() -> bool {
    true
}
fn default_randomize_direction() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            extension: default_extension(),
            clear_screen: default_clear_screen(),
            randomize_direction_default: default_randomize_direction(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.normalize();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("phrasetrain")
            .join("config.toml")
    }

    /// Resets values that would make the store unusable.
    pub fn normalize(&mut self) {
        let ext = self.extension.trim().trim_start_matches('.');
        self.extension = if ext.is_empty() || ext.contains(['/', '\\']) {
            default_extension()
        } else {
            ext.to_string()
        };
        if self.storage_dir.as_os_str().is_empty() {
            self.storage_dir = default_storage_dir();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.storage_dir, PathBuf::from("PhraseTrain"));
        assert_eq!(config.extension, "txt");
        assert!(config.clear_screen);
        assert!(config.randomize_direction_default);
    }

    #[test]
    fn test_config_partial_file_keeps_other_defaults() {
        let toml_str = r#"
storage_dir = "/tmp/lists"
clear_screen = false
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/lists"));
        assert!(!config.clear_screen);
        assert_eq!(config.extension, "txt");
        assert!(config.randomize_direction_default);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.storage_dir, deserialized.storage_dir);
        assert_eq!(config.extension, deserialized.extension);
        assert_eq!(config.clear_screen, deserialized.clear_screen);
    }

    #[test]
    fn test_normalize_strips_dot_and_rejects_paths() {
        let mut config = Config::default();
        config.extension = ".lst".to_string();
        config.normalize();
        assert_eq!(config.extension, "lst");

        config.extension = "a/b".to_string();
        config.normalize();
        assert_eq!(config.extension, "txt");

        config.extension = "  ".to_string();
        config.storage_dir = PathBuf::new();
        config.normalize();
        assert_eq!(config.extension, "txt");
        assert_eq!(config.storage_dir, PathBuf::from("PhraseTrain"));
    }
}
