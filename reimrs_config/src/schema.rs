use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    /// Site root; the word is appended as `<word>.html`.
    #[serde(default = "LookupConfig::default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds, `null` leaves the transport default.
    #[serde(default = "LookupConfig::default_timeout_secs")]
    pub timeout_secs: Option<u64>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

impl LookupConfig {
    fn default_base_url() -> String {
        "https://www.was-reimt-sich-auf.de/".to_string()
    }

    #[allow(clippy::unnecessary_wraps)]
    const fn default_timeout_secs() -> Option<u64> {
        Some(10)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Number of rhymes shown in the one-line summary.
    #[serde(default = "OutputConfig::default_preview")]
    pub preview: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            preview: Self::default_preview(),
        }
    }
}

impl OutputConfig {
    const fn default_preview() -> usize {
        5
    }
}

const CONFIG_TEMPLATE: &str = r#"{
  "lookup": {
    "base_url": "https://www.was-reimt-sich-auf.de/",
    "timeout_secs": 10
  },
  "output": {
    "preview": 5
  }
}"#;

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("reimrs"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load `~/reimrs/config.json`, falling back to defaults when it does
    /// not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Self::create_config_at(&config_dir.join("config.json"))
    }

    pub fn create_config_at(config_path: &Path) -> anyhow::Result<PathBuf> {
        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(config_path, CONFIG_TEMPLATE)?;
        info!("Created config file at {}", config_path.display());
        Ok(config_path.to_path_buf())
    }
}
