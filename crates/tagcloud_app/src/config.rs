use std::fs;
use std::path::{Path, PathBuf};

use cloud_logging::{cloud_info, cloud_warn};
use serde::{Deserialize, Serialize};
use tagcloud_engine::default_stylesheets;

pub const CONFIG_FILENAME: &str = "tagcloud.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Stylesheet links placed in the page head, in order.
    pub stylesheets: Vec<String>,
    /// Write `<output>.manifest.json` next to the page.
    pub write_manifest: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            stylesheets: default_stylesheets(),
            write_manifest: false,
        }
    }
}

/// Loads the config from `explicit`, or from `tagcloud.ron` in the working directory.
///
/// A missing default file is normal. Any other problem is logged and the
/// defaults are used.
pub fn load_config(explicit: Option<&Path>) -> AppConfig {
    let path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound && explicit.is_none() => {
            return AppConfig::default();
        }
        Err(err) => {
            cloud_warn!("Failed to read config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    match ron::from_str::<AppConfig>(&content) {
        Ok(config) => {
            cloud_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            cloud_warn!("Failed to parse config from {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{load_config, AppConfig};
    use tempfile::TempDir;

    fn parse_config(content: &str) -> AppConfig {
        ron::from_str(content).unwrap()
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = parse_config("(write_manifest: true)");
        assert!(config.write_manifest);
        assert_eq!(config.stylesheets, AppConfig::default().stylesheets);
    }

    #[test]
    fn stylesheets_can_be_replaced() {
        let config = parse_config(r#"(stylesheets: ["site.css"])"#);
        assert_eq!(config.stylesheets, vec!["site.css".to_string()]);
        assert!(!config.write_manifest);
    }

    #[test]
    fn explicit_file_is_loaded() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.ron");
        std::fs::write(&path, "(write_manifest: true, stylesheets: [])").unwrap();

        let config = load_config(Some(&path));
        assert!(config.write_manifest);
        assert!(config.stylesheets.is_empty());
    }

    #[test]
    fn malformed_or_missing_file_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.ron");
        std::fs::write(&path, "(write_manifest: maybe").unwrap();

        assert_eq!(load_config(Some(&path)), AppConfig::default());
        assert_eq!(
            load_config(Some(&temp.path().join("absent.ron"))),
            AppConfig::default()
        );
    }
}
