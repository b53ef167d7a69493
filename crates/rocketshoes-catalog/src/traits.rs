//! # Catalog Trait
//!
//! The seam between the cart store and wherever product data lives.
//!
//! # Example
//!
//! ```ignore
//! use rocketshoes_catalog::ProductCatalog;
//!
//! async fn available(catalog: &dyn ProductCatalog, id: ProductId) -> CatalogResult<u32> {
//!     Ok(catalog.stock(id).await?.amount)
//! }
//! ```

use async_trait::async_trait;

use rocketshoes_core::{Product, ProductId, Stock};

use crate::error::CatalogResult;

/// Read-only source of product and stock records.
///
/// Implementations must not cache: callers rely on every call reflecting
/// the current stock level.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Get the product record for `id`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the catalog has no such product
    /// - `Network` / `Timeout` / `Http` / `Decode` for transport problems
    async fn product(&self, id: ProductId) -> CatalogResult<Product>;

    /// Get the stock record for `id`.
    ///
    /// # Errors
    ///
    /// Same as [`ProductCatalog::product`].
    async fn stock(&self, id: ProductId) -> CatalogResult<Stock>;
}
