//! # App Configuration
//!
//! Where the catalog lives and where the cart is persisted.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     ROCKETSHOES_API_URL=http://localhost:3333                          │
//! │     ROCKETSHOES_STORAGE_PATH=/tmp/cart.json                            │
//! │                                                                         │
//! │  2. TOML Config File (--config, or the platform default)               │
//! │     ~/.config/rocketshoes/rocketshoes.toml (Linux)                     │
//! │     ~/Library/Application Support/com.rocketshoes.cart/... (macOS)     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://localhost:3333, @RocketShoes:cart                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # rocketshoes.toml
//! [api]
//! base_url = "http://localhost:3333"
//! timeout_secs = 10
//!
//! [storage]
//! path = "/home/me/.local/share/rocketshoes/cart.json"
//! key = "@RocketShoes:cart"
//!
//! [catalog]
//! source = "fixture"   # http | fixture
//! fixture_path = "server.json"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use rocketshoes_core::CART_STORAGE_KEY;

use crate::error::{AppError, AppResult};

// =============================================================================
// Catalog Source
// =============================================================================

/// Where product and stock records come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    /// The storefront REST API at `[api] base_url`.
    #[default]
    Http,

    /// A json-server database file at `[catalog] fixture_path`.
    Fixture,
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::Http => write!(f, "http"),
            CatalogSource::Fixture => write!(f, "fixture"),
        }
    }
}

impl std::str::FromStr for CatalogSource {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" | "api" => Ok(CatalogSource::Http),
            "fixture" | "file" => Ok(CatalogSource::Fixture),
            other => Err(AppError::InvalidConfig(format!(
                "Unknown catalog source: '{}'. Valid options: http, fixture",
                other
            ))),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

/// Storefront API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout (seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Cart persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Storage file. Defaults to `cart.json` in the platform data directory.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Key the cart is stored under.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_storage_key() -> String {
    CART_STORAGE_KEY.to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            path: None,
            key: default_storage_key(),
        }
    }
}

/// Catalog selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default)]
    pub source: CatalogSource,

    /// Required when `source = "fixture"`.
    #[serde(default)]
    pub fixture_path: Option<PathBuf>,
}

// =============================================================================
// App Configuration
// =============================================================================

/// Complete configuration for the `rocketshoes` binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`rocketshoes.toml`)
    /// 3. Environment variables
    ///
    /// An explicit `config_path` that does not exist is an error; a missing
    /// default file is not.
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let explicit = config_path.is_some();
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)
                    .map_err(|source| AppError::ConfigParse { path, source })?;
            } else if explicit {
                return Err(AppError::InvalidConfig(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        let url = &self.api.base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::InvalidConfig(format!(
                "API base_url must start with http:// or https://, got: {}",
                url
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        if self.storage.key.trim().is_empty() {
            return Err(AppError::InvalidConfig("storage key must not be empty".into()));
        }

        if self.catalog.source == CatalogSource::Fixture && self.catalog.fixture_path.is_none() {
            return Err(AppError::InvalidConfig(
                "catalog source 'fixture' requires fixture_path".into(),
            ));
        }

        Ok(())
    }

    /// Returns the storage file, falling back to the platform data directory.
    pub fn storage_path(&self) -> AppResult<PathBuf> {
        if let Some(path) = &self.storage.path {
            return Ok(path.clone());
        }

        directories::ProjectDirs::from("com", "rocketshoes", "rocketshoes")
            .map(|dirs| dirs.data_dir().join("cart.json"))
            .ok_or(AppError::NoStoragePath)
    }

    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.api.timeout_secs)
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Applies `ROCKETSHOES_*` overrides read through `lookup`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("ROCKETSHOES_API_URL") {
            debug!(url = %url, "Overriding API URL from environment");
            self.api.base_url = url;
        }

        if let Some(secs) = lookup("ROCKETSHOES_API_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(s) => self.api.timeout_secs = s,
                Err(_) => warn!(value = %secs, "Ignoring non-numeric API timeout"),
            }
        }

        if let Some(path) = lookup("ROCKETSHOES_STORAGE_PATH") {
            debug!(path = %path, "Overriding storage path from environment");
            self.storage.path = Some(PathBuf::from(path));
        }

        if let Some(key) = lookup("ROCKETSHOES_STORAGE_KEY") {
            self.storage.key = key;
        }

        // Setting a fixture file implies the fixture source.
        if let Some(path) = lookup("ROCKETSHOES_FIXTURE") {
            debug!(path = %path, "Using fixture catalog from environment");
            self.catalog.source = CatalogSource::Fixture;
            self.catalog.fixture_path = Some(PathBuf::from(path));
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "rocketshoes", "rocketshoes")
            .map(|dirs| dirs.config_dir().join("rocketshoes.toml"))
    }
}
