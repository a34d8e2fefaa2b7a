//! YAML configuration loading and validation. The file is looked up in the
//! working directory first, then in the home directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".machtiani-config.yml";

/// Environment variable that takes precedence over `MODEL_API_KEY` in the file.
pub const MODEL_API_KEY_VAR: &str = "MODEL_API_KEY";

/// Top-level configuration for machtiani.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub environment: Environment,
}

/// Endpoints and credentials. Every field may be omitted; [`Config::validate`]
/// decides which ones matter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Environment {
    #[serde(rename = "MODEL_API_KEY", default)]
    pub model_api_key: String,

    #[serde(rename = "MACHTIANI_URL", default)]
    pub machtiani_url: String,

    #[serde(rename = "MACHTIANI_REPO_MANAGER_URL", default)]
    pub repo_manager_url: String,

    #[serde(rename = "CODE_HOST_URL", default)]
    pub code_host_url: String,

    #[serde(rename = "CODE_HOST_API_KEY", default)]
    pub code_host_api_key: String,

    #[serde(rename = "API_GATEWAY_HOST_KEY", default)]
    pub api_gateway_host_key: String,

    #[serde(rename = "API_GATEWAY_HOST_VALUE", default)]
    pub api_gateway_host_value: String,

    #[serde(rename = "CONTENT_TYPE_KEY", default)]
    pub content_type_key: String,

    #[serde(rename = "CONTENT_TYPE_VALUE", default)]
    pub content_type_value: String,
}

impl Config {
    /// Parse a config file without applying overrides or validation.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to unmarshal config {}", path.display()))
    }

    /// Locate, parse, override and validate the config.
    pub fn load() -> Result<Self> {
        let path = locate(Path::new("."), dirs::home_dir().as_deref())?;
        tracing::debug!(path = %path.display(), "loading config");
        let mut config = Self::from_file(&path)?;
        config.apply_model_api_key(std::env::var(MODEL_API_KEY_VAR).ok());
        config.validate()?;
        Ok(config)
    }

    /// A non-empty override replaces the file's model API key.
    pub fn apply_model_api_key(&mut self, value: Option<String>) {
        if let Some(key) = value.filter(|k| !k.is_empty()) {
            self.environment.model_api_key = key;
        }
    }

    /// Check that the required endpoints are set.
    pub fn validate(&self) -> Result<()> {
        let env = &self.environment;
        let required = [
            ("MACHTIANI_URL", &env.machtiani_url),
            ("MACHTIANI_REPO_MANAGER_URL", &env.repo_manager_url),
            ("CONTENT_TYPE_KEY", &env.content_type_key),
            ("CONTENT_TYPE_VALUE", &env.content_type_value),
        ];
        for (key, value) in required {
            anyhow::ensure!(!value.is_empty(), "{key} must be set");
        }
        Ok(())
    }

    /// The model API key after the environment override, if any.
    pub fn model_api_key(&self) -> Option<&str> {
        let key = self.environment.model_api_key.as_str();
        (!key.is_empty()).then_some(key)
    }

    /// The code host API key, if one is configured.
    pub fn code_host_api_key(&self) -> Option<&str> {
        let key = self.environment.code_host_api_key.as_str();
        (!key.is_empty()).then_some(key)
    }
}

/// Find the config file: `dir` first, then `home`.
pub fn locate(dir: &Path, home: Option<&Path>) -> Result<PathBuf> {
    let local = dir.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Ok(local);
    }
    let home = home.context("failed to get home directory")?;
    let fallback = home.join(CONFIG_FILE_NAME);
    anyhow::ensure!(
        fallback.is_file(),
        "failed to read config from both locations: {} and {}",
        local.display(),
        fallback.display()
    );
    Ok(fallback)
}
