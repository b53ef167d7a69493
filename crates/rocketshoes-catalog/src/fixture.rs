//! # Fixture Catalog
//!
//! In-memory [`ProductCatalog`] built from the json-server database file the
//! storefront API is served from:
//!
//! ```json
//! {
//!   "products": [{ "id": 1, "title": "...", "price": 179.9, "image": "..." }],
//!   "stock":    [{ "id": 1, "amount": 3 }]
//! }
//! ```
//!
//! Used for offline runs of the CLI and as the catalog in store tests.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use rocketshoes_core::{Product, ProductId, Stock};

use crate::error::{CatalogError, CatalogResult};
use crate::traits::ProductCatalog;

#[derive(Debug, Deserialize)]
struct FixtureDb {
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    stock: Vec<Stock>,
}

/// Catalog answering from fixed product and stock tables.
#[derive(Debug, Clone, Default)]
pub struct FixtureCatalog {
    products: HashMap<ProductId, Product>,
    stock: HashMap<ProductId, Stock>,
}

impl FixtureCatalog {
    /// Creates a catalog from explicit records.
    pub fn new(
        products: impl IntoIterator<Item = Product>,
        stock: impl IntoIterator<Item = Stock>,
    ) -> Self {
        FixtureCatalog {
            products: products.into_iter().map(|p| (p.id, p)).collect(),
            stock: stock.into_iter().map(|s| (s.id, s)).collect(),
        }
    }

    /// Parses a json-server database document.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let db: FixtureDb =
            serde_json::from_str(json).map_err(|e| CatalogError::Decode(e.to_string()))?;
        Ok(Self::new(db.products, db.stock))
    }

    /// Loads a json-server database file.
    pub fn from_file(path: &Path) -> CatalogResult<Self> {
        let fixture_err = |reason: String| CatalogError::Fixture {
            path: path.to_path_buf(),
            reason,
        };

        let contents = std::fs::read_to_string(path).map_err(|e| fixture_err(e.to_string()))?;
        let db: FixtureDb =
            serde_json::from_str(&contents).map_err(|e| fixture_err(e.to_string()))?;

        info!(
            ?path,
            products = db.products.len(),
            stock = db.stock.len(),
            "Fixture catalog loaded"
        );
        Ok(Self::new(db.products, db.stock))
    }

    /// Replaces the stock level for a product.
    pub fn set_stock(&mut self, id: ProductId, amount: u32) {
        self.stock.insert(id, Stock { id, amount });
    }
}

#[async_trait]
impl ProductCatalog for FixtureCatalog {
    async fn product(&self, id: ProductId) -> CatalogResult<Product> {
        self.products
            .get(&id)
            .cloned()
            .ok_or_else(|| CatalogError::product_not_found(id))
    }

    async fn stock(&self, id: ProductId) -> CatalogResult<Stock> {
        self.stock
            .get(&id)
            .copied()
            .ok_or_else(|| CatalogError::stock_not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DB: &str = r#"{
        "products": [
            {"id": 1, "title": "Tênis de Caminhada Leve Confortável", "price": 179.9, "image": "a.jpg"},
            {"id": 2, "title": "Tênis VR Caminhada Confortável Detalhes Couro Masculino", "price": 139.9, "image": "b.jpg"}
        ],
        "stock": [
            {"id": 1, "amount": 3},
            {"id": 2, "amount": 5}
        ]
    }"#;

    #[tokio::test]
    async fn test_lookups_from_json() {
        let catalog = FixtureCatalog::from_json(DB).unwrap();

        let product = catalog.product(ProductId::new(2)).await.unwrap();
        assert_eq!(product.price.cents(), 13990);

        let stock = catalog.stock(ProductId::new(1)).await.unwrap();
        assert_eq!(stock.amount, 3);
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let catalog = FixtureCatalog::from_json(DB).unwrap();

        assert!(matches!(
            catalog.product(ProductId::new(9)).await,
            Err(CatalogError::NotFound { .. })
        ));
        assert!(matches!(
            catalog.stock(ProductId::new(9)).await,
            Err(CatalogError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_from_file_and_set_stock() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.json");
        std::fs::write(&path, DB).unwrap();

        let mut catalog = FixtureCatalog::from_file(&path).unwrap();
        catalog.set_stock(ProductId::new(1), 0);

        assert_eq!(catalog.stock(ProductId::new(1)).await.unwrap().amount, 0);
    }

    #[test]
    fn test_bad_file_is_fixture_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");

        assert!(matches!(
            FixtureCatalog::from_file(&missing),
            Err(CatalogError::Fixture { .. })
        ));
    }
}
