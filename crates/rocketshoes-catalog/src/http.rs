//! # HTTP Catalog
//!
//! [`ProductCatalog`] over the storefront REST API.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET {base}/products/{id}                                               │
//! │    200 → { "id": 1, "title": "...", "price": 179.9, "image": "..." }    │
//! │    404 → CatalogError::NotFound                                         │
//! │                                                                         │
//! │  GET {base}/stock/{id}                                                  │
//! │    200 → { "id": 1, "amount": 3 }                                       │
//! │    404 → CatalogError::NotFound                                         │
//! │                                                                         │
//! │  other status → CatalogError::Http                                      │
//! │  no response  → CatalogError::Network / CatalogError::Timeout           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no retry. A failed lookup is reported once by the cart store.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use rocketshoes_core::{Product, ProductId, Stock};

use crate::error::{CatalogError, CatalogResult};
use crate::traits::ProductCatalog;

/// reqwest-backed catalog client.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    /// Creates a client for `base_url` (e.g. `http://localhost:3333`).
    ///
    /// `timeout` bounds each request end to end.
    pub fn new(base_url: &str, timeout: Duration) -> CatalogResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(CatalogError::InvalidBaseUrl(format!(
                "expected http:// or https://, got '{}'",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("rocketshoes-cart/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(HttpCatalog { client, base_url })
    }

    /// Returns the base URL requests are built from.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        collection: &str,
        id: ProductId,
    ) -> CatalogResult<T> {
        let url = format!("{}/{}/{}", self.base_url, collection, id);
        debug!(url = %url, "Catalog request");

        let response = self.client.get(&url).send().await?;
        Self::handle_response(response, resource, id, url).await
    }

    async fn handle_response<T: DeserializeOwned>(
        response: Response,
        resource: &'static str,
        id: ProductId,
        url: String,
    ) -> CatalogResult<T> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound { resource, id });
        }

        if !status.is_success() {
            return Err(CatalogError::Http {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Decode(format!("{}: {}", url, e)))
    }
}

#[async_trait]
impl ProductCatalog for HttpCatalog {
    async fn product(&self, id: ProductId) -> CatalogResult<Product> {
        self.fetch("Product", "products", id).await
    }

    async fn stock(&self, id: ProductId) -> CatalogResult<Stock> {
        self.fetch("Stock", "stock", id).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
