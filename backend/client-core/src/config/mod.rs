use crate::error::config::ConfigError;
use crate::{DEFAULT_API_BASE_URL, DEFAULT_IMAGE_BASE_URL, DEFAULT_USER_AGENT};

use common::{ApiKey, ErrorLocation};

use std::env;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_DIR_NAME: &str = "moviedb";
const CONFIG_VERSION: u32 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

pub const API_KEY_ENV: &str = "MOVIEDB_API_KEY";
pub const CONFIG_DIR_ENV: &str = "MOVIEDB_CONFIG_DIR";

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
            language: default_language(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpSettings {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl HttpSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub http: HttpSettings,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            api: ApiSettings::default(),
            http: HttpSettings::default(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}
fn default_image_base_url() -> String {
    DEFAULT_IMAGE_BASE_URL.to_string()
}
fn default_language() -> String {
    "en-US".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

// ============================================
// IMPLEMENTATION
// ============================================

impl ClientConfig {
    /// Load config from {config_dir}/config.json.
    ///
    /// # Returns
    ///
    /// Returns `Ok(ClientConfig)` if loaded successfully or defaults if file missing.
    /// Returns `Err(ConfigError)` if file exists but is corrupted/invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: ClientConfig = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config JSON: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Save config to {config_dir}/config.json using atomic write.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if validation, directory creation,
    /// serialization, write or rename fails.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        for (field, url) in [
            ("base_url", &self.api.base_url),
            ("image_base_url", &self.api.image_base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: format!("Invalid {field} format: '{url}'"),
                });
            }
        }

        if self.api.language.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "language cannot be empty".to_string(),
            });
        }

        if self.http.timeout_secs == 0 || self.http.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid timeout: {}s (must be 1-{MAX_TIMEOUT_SECS})",
                    self.http.timeout_secs
                ),
            });
        }

        Ok(())
    }
}

/// Resolve the config directory.
///
/// `MOVIEDB_CONFIG_DIR` wins; otherwise `{platform config dir}/moviedb`.
///
/// # Errors
///
/// Returns [`ConfigError::DirectoryNotFound`] when the platform has no
/// config directory and no override is set.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    if let Ok(custom_dir) = env::var(CONFIG_DIR_ENV)
        && !custom_dir.trim().is_empty()
    {
        debug!("Using config dir override from {CONFIG_DIR_ENV}");
        return Ok(PathBuf::from(custom_dir));
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or_else(|| ConfigError::DirectoryNotFound {
            location: ErrorLocation::from(Location::caller()),
            reason: format!("No platform config directory and {CONFIG_DIR_ENV} is unset"),
        })
}

/// Load the API key from `.env` (if present) and the environment.
///
/// # Errors
///
/// Returns [`ConfigError::MissingApiKey`] when `MOVIEDB_API_KEY` is unset,
/// blank, or a template placeholder.
pub fn load_api_key() -> Result<ApiKey, ConfigError> {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded .env from {}", path.display()),
        Err(e) => debug!("No .env loaded: {e}"),
    }

    let key = env::var(API_KEY_ENV)
        .map(ApiKey::new)
        .map_err(|e| ConfigError::MissingApiKey {
            location: ErrorLocation::from(Location::caller()),
            reason: format!("{API_KEY_ENV}: {e}"),
        })?;

    if key.is_placeholder() {
        return Err(ConfigError::MissingApiKey {
            location: ErrorLocation::from(Location::caller()),
            reason: format!("{API_KEY_ENV} is blank or a placeholder"),
        });
    }

    debug!("API key loaded ({} chars)", key.len());
    Ok(key)
}
