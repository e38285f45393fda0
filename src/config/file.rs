use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { endpoint: None }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub default_model: Option<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            default_model: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewsConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self { endpoint: None }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryConfig {
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub max_sessions: Option<usize>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            file: None,
            max_sessions: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub verbose: Option<bool>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { verbose: None }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub news: NewsConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl FileConfig {
    pub fn load() -> Result<Self> {
        let config_paths = Self::get_config_paths();

        for path in config_paths {
            if path.exists() {
                let contents = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

                let config: FileConfig = serde_yaml::from_str(&contents).with_context(|| {
                    format!("Failed to parse YAML config file: {}", path.display())
                })?;

                return Ok(config);
            }
        }

        // No config file found, return default
        Ok(FileConfig::default())
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Current directory (highest priority - local override)
        paths.push(PathBuf::from(".newsdesk.yaml"));
        paths.push(PathBuf::from(".newsdesk.yml"));

        // 2. User's config directory (global config)
        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join("newsdesk");
            paths.push(config_dir.join("newsdesk.yaml"));
            paths.push(config_dir.join("newsdesk.yml"));
        }

        paths
    }
}
