use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config_manager::utils::read_config_text;
use crate::config_manager::{OpenAICompatibleConfig, SystemConfig};

/// Files tried, in order, after `CONFIG_PATH`
const DEFAULT_CONFIG_PATHS: [&str; 2] = ["conf.yaml", "conf.json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default, alias = "system_config")]
    pub server: SystemConfig,

    #[serde(default)]
    pub llm: OpenAICompatibleConfig,
}

impl Config {
    /// Load a configuration file; JSON when the extension says so, YAML otherwise
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_config_text(path)?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| matches!(ext.to_lowercase().as_str(), "json" | "jsonld"))
            .unwrap_or(false);

        let config = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON configuration: {}", path.display()))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid YAML configuration: {}", path.display()))?
        };
        Ok(config)
    }

    /// Resolve the configuration for this process.
    ///
    /// An explicit `CONFIG_PATH` must exist and parse. Without it the default
    /// files are tried and built-in defaults are used when none is present.
    pub fn discover() -> Result<Self> {
        if let Ok(explicit) = std::env::var("CONFIG_PATH") {
            let path = PathBuf::from(explicit);
            let config = Self::load(&path)?;
            info!("Loaded configuration from: {}", path.display());
            return Ok(config);
        }

        for candidate in DEFAULT_CONFIG_PATHS {
            let path = Path::new(candidate);
            if !path.exists() {
                debug!("No configuration at {}", candidate);
                continue;
            }
            let config = Self::load(path)?;
            info!("Loaded configuration from: {}", candidate);
            return Ok(config);
        }

        info!("No configuration file found, using defaults");
        Ok(Self::default())
    }
}
