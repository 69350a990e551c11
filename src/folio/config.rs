use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_IMAGE: &str = "assets/profile-photo.jpg";
const DEFAULT_LINE_WIDTH: usize = 100;

/// Display-layer configuration, stored in config.json under the OS
/// config directory. Showcase data itself never persists; only these
/// rendering defaults do.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FolioConfig {
    /// Reference shown when the image slot is absent.
    #[serde(default = "default_image")]
    pub default_image: String,

    /// Maximum rendered width of a list line.
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

fn default_image() -> String {
    DEFAULT_IMAGE.to_string()
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            default_image: default_image(),
            line_width: default_line_width(),
        }
    }
}

impl FolioConfig {
    /// Load config from the given directory, or return defaults if not
    /// found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: FolioConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = FolioConfig::default();
        assert_eq!(config.default_image, "assets/profile-photo.jpg");
        assert_eq!(config.line_width, 100);
    }

    #[test]
    fn load_missing_config_returns_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = FolioConfig::load(temp_dir.path().join("nope")).unwrap();
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();

        let config = FolioConfig {
            default_image: "assets/banner.png".to_string(),
            line_width: 80,
        };
        config.save(temp_dir.path()).unwrap();

        let loaded = FolioConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"line_width": 72}"#,
        )
        .unwrap();

        let loaded = FolioConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.line_width, 72);
        assert_eq!(loaded.default_image, "assets/profile-photo.jpg");
    }
}
