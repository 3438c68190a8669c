use pagewright_builder::Theme;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "pagewright.config.json";

/// Pagewright configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding the persisted builder state
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,

    /// Where exported website files are written
    #[serde(default = "default_export_dir")]
    pub export_dir: String,

    /// Theme for a project with no persisted state yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

fn default_storage_dir() -> String {
    ".pagewright".to_string()
}

fn default_export_dir() -> String {
    ".".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn get_storage_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.storage_dir)
    }

    pub fn get_export_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.export_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            export_dir: default_export_dir(),
            theme: None,
        }
    }
}
