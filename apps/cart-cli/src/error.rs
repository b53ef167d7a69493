//! # App Error Type
//!
//! Errors that stop the binary before or after a cart operation runs.
//!
//! Cart operations themselves never fail outward: their outcomes travel
//! through [`crate::notify::Notice`]. What remains here is configuration,
//! startup and output.

use std::path::PathBuf;

use thiserror::Error;

use rocketshoes_catalog::CatalogError;

/// Result type alias for app-level operations.
pub type AppResult<T> = Result<T, AppError>;

/// Startup and output errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// A config value is present but unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No storage path was configured and the platform has no data directory.
    #[error("No storage path available; set [storage] path or ROCKETSHOES_STORAGE_PATH")]
    NoStoragePath,

    /// The config file exists but is not valid TOML for [`crate::config::AppConfig`].
    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The configured catalog could not be built.
    #[error("Catalog setup failed: {0}")]
    Catalog(#[from] CatalogError),

    /// Reading config or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The cart could not be rendered as JSON.
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}
