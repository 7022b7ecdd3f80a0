//! Persistent CLI configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "cli-config.json";
const PRETTY_ENV: &str = "TALLY_PRETTY";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default = "default_config_version")]
    pub version: u32,
    #[serde(default = "default_pretty_output")]
    pub pretty_output: bool,
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            pretty_output: default_pretty_output(),
            log_filter: None,
        }
    }
}

const fn default_config_version() -> u32 {
    1
}

const fn default_pretty_output() -> bool {
    true
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tally").join(CONFIG_FILE_NAME))
}

pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parse a boolean environment override. Unrecognized values are ignored.
pub fn parse_bool_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl CliConfig {
    pub fn load_from_path(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|error| format!("Failed to read config at {}: {}", path.display(), error))?;
        let mut config = serde_json::from_str::<Self>(&raw)
            .map_err(|error| format!("Failed to parse config at {}: {}", path.display(), error))?;
        config.normalize();
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    error
                )
            })?;
        }

        let mut normalized = self.clone();
        normalized.normalize();
        let serialized = serde_json::to_string_pretty(&normalized)
            .map_err(|error| format!("Failed to serialize config: {error}"))?;
        std::fs::write(path, serialized)
            .map_err(|error| format!("Failed to write config at {}: {}", path.display(), error))
    }

    /// Whether merge output is pretty-printed, honoring `TALLY_PRETTY`.
    pub fn pretty_output(&self) -> bool {
        std::env::var(PRETTY_ENV)
            .ok()
            .as_deref()
            .and_then(parse_bool_flag)
            .unwrap_or(self.pretty_output)
    }

    fn normalize(&mut self) {
        self.log_filter = normalize_text_option(self.log_filter.take());
    }
}
