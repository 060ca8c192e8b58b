use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub font: FontSettings,
    #[serde(default)]
    pub shaping: ShapingSettings,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FontSettings {
    pub size: Option<f32>,
    pub index: Option<u32>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ShapingSettings {
    #[serde(default)]
    pub features: Vec<String>,
}

impl Config {
    pub fn load() -> Self {
        match config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Config::default(),
        }
    }

    /// Missing, unreadable or malformed files all fall back to defaults.
    pub fn load_from(config_path: &Path) -> Self {
        if !config_path.exists() {
            return Config::default();
        }

        let content = match fs::read_to_string(config_path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Failed to read config file: {}", e);
                return Config::default();
            }
        };

        match toml::from_str(&content) {
            Ok(config) => {
                log::debug!("Loaded config from {}", config_path.display());
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Config::default()
            }
        }
    }
}

fn config_file_path() -> Option<PathBuf> {
    let base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => dirs::config_dir()?,
    };
    Some(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.font.size, None);
        assert_eq!(config.font.index, None);
        assert!(config.shaping.features.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [font]
            size = 32.0
            index = 1

            [shaping]
            features = ["liga", "ss01"]
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.font.size, Some(32.0));
        assert_eq!(config.font.index, Some(1));
        assert_eq!(config.shaping.features, vec!["liga", "ss01"]);
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
            [font]
            size = 20.0
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.font.index, None);
        assert_eq!(config.font.size, Some(20.0));
        assert!(config.shaping.features.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let config = Config::load_from(Path::new("/nonexistent/hb-outline/config.toml"));
        assert_eq!(config.font.size, None);
    }

    #[test]
    fn test_load_invalid_file() {
        let path = std::env::temp_dir().join("hb-outline-invalid-config.toml");
        fs::write(&path, "[font\nsize = ").unwrap();
        let config = Config::load_from(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(config.font.size, None);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("hb-outline-valid-config.toml");
        fs::write(&path, "[font]\nindex = 3\n").unwrap();
        let config = Config::load_from(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(config.font.index, Some(3));
    }
}
