use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read or write config file")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid API host: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("API host cannot carry a path: {0}")]
    NotABase(String),
}

/// Where the accounts API lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_host: String,
    pub api_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_host: "https://addons.mozilla.org".to_string(),
            api_path: "/api/v3/".to_string(),
        }
    }
}

impl Config {
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Account detail endpoint, e.g. `https://host/api/v3/accounts/account/babar/`
    pub fn account_url(&self, username: &str) -> Result<Url, ConfigError> {
        let mut url = Url::parse(&self.api_host)?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ConfigError::NotABase(self.api_host.clone()))?;
            segments.pop_if_empty();
            segments.extend(self.api_path.split('/').filter(|s| !s.is_empty()));
            segments.extend(["accounts", "account", username, ""]);
        }
        Ok(url)
    }
}
