//! # Catalog Error Types
//!
//! The cart store collapses all of these into one generic notice per
//! operation; the variants exist for logs and for the adapters' own tests.

use std::path::PathBuf;
use thiserror::Error;

use rocketshoes_core::ProductId;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog lookup errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog has no record of this kind for the id.
    #[error("{resource} not found: {id}")]
    NotFound {
        resource: &'static str,
        id: ProductId,
    },

    /// The server answered with a non-success status other than 404.
    #[error("Catalog returned HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// The request never completed (DNS, refused connection, reset).
    #[error("Catalog unreachable: {0}")]
    Network(String),

    /// The request exceeded the configured timeout.
    #[error("Catalog request timed out: {0}")]
    Timeout(String),

    /// The response body was not the expected record.
    #[error("Failed to decode catalog response: {0}")]
    Decode(String),

    /// The base URL cannot be used to build request URLs.
    #[error("Invalid catalog base URL: {0}")]
    InvalidBaseUrl(String),

    /// A fixture database could not be read or parsed.
    #[error("Invalid catalog fixture {path}: {reason}")]
    Fixture { path: PathBuf, reason: String },
}

impl CatalogError {
    /// Creates a NotFound error for a product record.
    pub fn product_not_found(id: ProductId) -> Self {
        CatalogError::NotFound {
            resource: "Product",
            id,
        }
    }

    /// Creates a NotFound error for a stock record.
    pub fn stock_not_found(id: ProductId) -> Self {
        CatalogError::NotFound {
            resource: "Stock",
            id,
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CatalogError::Timeout(err.to_string())
        } else if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else {
            CatalogError::Network(err.to_string())
        }
    }
}
