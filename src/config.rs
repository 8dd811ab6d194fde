use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;
use crate::predict::api::DEFAULT_ENDPOINT;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings loaded from `config.toml`; every field falls back to a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub window: WindowSettings,
}

/// Where and how prediction requests are sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// URL that receives `POST {"text": ...}` requests.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Upper bound on the prediction response body.
    #[serde(default = "default_max_response_bytes")]
    pub max_response_bytes: usize,
}

/// Initial window placement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default)]
    pub maximized: bool,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            max_response_bytes: default_max_response_bytes(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_max_response_bytes() -> usize {
    1024 * 1024
}

/// Errors that may occur while loading app configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid endpoint URL {endpoint:?}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },
    #[error("Endpoint {endpoint:?} must use http or https")]
    UnsupportedScheme { endpoint: String },
    #[error("max_response_bytes must be greater than zero")]
    ZeroResponseLimit,
    #[error("Application directory unavailable: {0}")]
    AppDir(#[from] app_dirs::AppDirError),
}

/// Resolve the configuration file path inside the application root.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load settings from the application root, returning defaults if missing.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    let path = config_path()?;
    load_from(&path)
}

/// Load and validate settings from a specific file.
pub fn load_from(path: &Path) -> Result<AppSettings, ConfigError> {
    if !path.exists() {
        tracing::info!("No config at {}; using defaults", path.display());
        return Ok(AppSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut settings: AppSettings = toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;
    settings.normalize();
    settings.validate()?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(settings)
}

impl AppSettings {
    /// Strip padding that TOML editing tends to leave around the endpoint.
    pub fn normalize(&mut self) {
        let trimmed = self.api.endpoint.trim();
        if trimmed.len() != self.api.endpoint.len() {
            self.api.endpoint = trimmed.to_string();
        }
    }

    /// Check values that serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.api.endpoint.as_str();
        let parsed = url::Url::parse(endpoint).map_err(|source| ConfigError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                endpoint: endpoint.to_string(),
            });
        }
        if self.api.max_response_bytes == 0 {
            return Err(ConfigError::ZeroResponseLimit);
        }
        Ok(())
    }
}
