use crate::error::{Result, ShelfError};
use crate::view::{Layout, RenderOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Display preferences, stored in `config.json` next to the library file.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Card layout used by `list` when no `--layout` is given.
    #[serde(default)]
    pub layout: Layout,

    /// Hide comment snippets in listings.
    #[serde(default)]
    pub compact: bool,
}

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

impl ShelfConfig {
    pub const KEYS: [&'static str; 2] = ["layout", "compact"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "layout" => Some(self.layout.to_string()),
            "compact" => Some(self.compact.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "layout" => {
                self.layout = value.parse().map_err(ShelfError::Api)?;
            }
            "compact" => {
                self.compact = match value.trim().to_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => {
                        return Err(ShelfError::Api(format!(
                            "Invalid value for compact: {} (expected true or false)",
                            other
                        )))
                    }
                };
            }
            _ => return Err(ShelfError::Api(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            layout: self.layout,
            compact: self.compact,
        }
    }
}
