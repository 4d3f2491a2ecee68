use crate::error::{OrderpadError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for orderpad, stored in .orderpad/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderpadConfig {
    /// Ask before deleting orders (`delete` without `--yes`)
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for OrderpadConfig {
    fn default() -> Self {
        Self {
            confirm_delete: true,
        }
    }
}

impl OrderpadConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(OrderpadError::Io)?;
        let config: OrderpadConfig =
            serde_json::from_str(&content).map_err(OrderpadError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(OrderpadError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(OrderpadError::Serialization)?;
        fs::write(config_path, content).map_err(OrderpadError::Io)?;
        Ok(())
    }
}
