use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

pub const DEFAULT_API_URL: &str = "http://thegamesdb.net/api";
/// Prefix for every relative image path the catalog returns.
pub const DEFAULT_IMAGE_URL: &str = "http://thegamesdb.net/banners/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("gamesdb/", env!("CARGO_PKG_VERSION"));

/// Where the client sends requests and how it identifies itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_url: String,
    pub image_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// TOML config file format.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    gamesdb: Option<ClientConfig>,
}

impl ClientConfig {
    /// Load from environment variables, the config file, or defaults.
    ///
    /// Priority: env vars > config file > defaults. A missing config file is
    /// not an error.
    pub fn load() -> Result<Self, ClientError> {
        let base = match config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        base.with_env_overrides()
    }

    /// Load from a specific TOML file. Missing keys take their defaults.
    pub fn load_from(path: &Path) -> Result<Self, ClientError> {
        let content = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&content).map_err(|e| {
            ClientError::Config(format!("Failed to parse {}: {e}", path.display()))
        })?;
        Ok(file.gamesdb.unwrap_or_default())
    }

    /// Apply `GAMESDB_*` environment variables on top of this config.
    pub fn with_env_overrides(self) -> Result<Self, ClientError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ClientError> {
        if let Some(url) = lookup("GAMESDB_API_URL") {
            self.api_url = url;
        }
        if let Some(url) = lookup("GAMESDB_IMAGE_URL") {
            self.image_url = url;
        }
        if let Some(secs) = lookup("GAMESDB_TIMEOUT_SECS") {
            self.timeout_secs = secs.trim().parse().map_err(|_| {
                ClientError::Config(format!("GAMESDB_TIMEOUT_SECS is not a number: {secs}"))
            })?;
        }
        if let Some(agent) = lookup("GAMESDB_USER_AGENT") {
            self.user_agent = agent;
        }
        Ok(self)
    }
}

/// Return the path to the default config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gamesdb").join("config.toml"))
}

/// Save a config to `path`, creating parent directories as needed.
pub fn save_to_file(config: &ClientConfig, path: &Path) -> Result<(), ClientError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = ConfigFile {
        gamesdb: Some(config.clone()),
    };
    let toml_str = toml::to_string_pretty(&file)
        .map_err(|e| ClientError::Config(format!("Failed to serialize config: {e}")))?;

    std::fs::write(path, toml_str)?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
