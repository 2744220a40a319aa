//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::info;
use url::Url;

use crate::calculate::DEFAULT_TOP_HEROES;
use crate::matchup::DEFAULT_MATCHUP_LIMIT;
use crate::storage::DEFAULT_OUTPUT_FILE;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Statistics service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StratzConfig {
    /// GraphQL endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Environment variable holding the bearer token
    #[serde(default = "default_token_env")]
    pub token_env: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Language for hero display names
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_endpoint() -> String {
    "https://api.stratz.com/graphql".to_string()
}

fn default_token_env() -> String {
    "STRATZ_API_TOKEN".to_string()
}

fn default_user_agent() -> String {
    "STRATZ_API".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_language() -> String {
    "ENGLISH".to_string()
}

impl Default for StratzConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            token_env: default_token_env(),
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout(),
            language: default_language(),
        }
    }
}

impl StratzConfig {
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.endpoint).map_err(|e| {
            ConfigError::ValidationError(format!("Invalid endpoint {}: {}", self.endpoint, e))
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Grid generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSettings {
    /// Heroes per position
    #[serde(default = "default_top_heroes")]
    pub top_heroes: usize,

    /// Entries per matchup column
    #[serde(default = "default_matchup_limit")]
    pub matchup_limit: usize,

    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_top_heroes() -> usize {
    DEFAULT_TOP_HEROES
}

fn default_matchup_limit() -> usize {
    DEFAULT_MATCHUP_LIMIT
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            top_heroes: default_top_heroes(),
            matchup_limit: default_matchup_limit(),
            output: default_output(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub stratz: StratzConfig,

    #[serde(default)]
    pub grid: GridSettings,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            info!("Loading config from {:?}", path);
            Self::from_file(path)
        } else {
            info!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.stratz.endpoint_url()?;

        if self.stratz.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "Timeout must be greater than 0".to_string(),
            ));
        }

        if self.stratz.token_env.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Token environment variable name must not be empty".to_string(),
            ));
        }

        if self.grid.top_heroes == 0 {
            return Err(ConfigError::ValidationError(
                "top_heroes must be greater than 0".to_string(),
            ));
        }

        if self.grid.matchup_limit == 0 {
            return Err(ConfigError::ValidationError(
                "matchup_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
