//! Store configuration loading.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a formstore instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding the sled cache database.
    pub data_dir: PathBuf,
    /// Path of the bundled default schema document.
    #[serde(default = "default_schema_path")]
    pub default_schema_path: PathBuf,
}

fn default_schema_path() -> PathBuf {
    PathBuf::from("schema.json")
}

impl Default for StoreConfig {
    fn default() -> Self {
        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("formstore");

        Self {
            data_dir,
            default_schema_path: default_schema_path(),
        }
    }
}

impl StoreConfig {
    /// Create a new configuration with explicit paths
    pub fn new(data_dir: PathBuf, default_schema_path: PathBuf) -> Self {
        Self {
            data_dir,
            default_schema_path,
        }
    }
}

/// Load a store configuration from the given path or from the
/// `FORMSTORE_CONFIG` environment variable.
///
/// If the file does not exist, a default [`StoreConfig`] is returned.
pub fn load_store_config(path: Option<&str>) -> Result<StoreConfig, std::io::Error> {
    let config_path = path
        .map(|p| p.to_string())
        .or_else(|| std::env::var("FORMSTORE_CONFIG").ok())
        .unwrap_or_else(|| crate::constants::DEFAULT_CONFIG_PATH.to_string());

    if let Ok(config_str) = std::fs::read_to_string(&config_path) {
        match serde_json::from_str::<StoreConfig>(&config_str) {
            Ok(cfg) => Ok(cfg),
            Err(e) => {
                log::error!("Failed to parse store configuration: {}", e);
                Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            }
        }
    } else {
        Ok(StoreConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_file_yields_defaults() {
        let config = load_store_config(Some("config/does_not_exist.json")).unwrap();
        assert_eq!(config.default_schema_path, PathBuf::from("schema.json"));
        assert!(config.data_dir.ends_with("formstore"));
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store_config.json");
        let config = StoreConfig::new(
            dir.path().join("data"),
            dir.path().join("default_schema.json"),
        );
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = load_store_config(path.to_str()).unwrap();
        assert_eq!(loaded.data_dir, config.data_dir);
        assert_eq!(loaded.default_schema_path, config.default_schema_path);
    }

    #[test]
    fn test_malformed_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store_config.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(load_store_config(path.to_str()).is_err());
    }
}
