//! # Cart Repository
//!
//! Binds a [`KeyValueStore`] to the cart key.
//!
//! ## Key Operations
//! - `load`: read once when a store is constructed
//! - `save`: full rewrite after every committed mutation
//!
//! The whole cart is written every time; there are no incremental patches.

use tracing::debug;

use rocketshoes_core::Cart;

use crate::error::{StorageError, StorageResult};
use crate::kv::KeyValueStore;

/// Repository for the persisted cart.
///
/// ## Usage
/// ```rust,ignore
/// let mut repo = CartRepository::new(Box::new(FileStorage::new(path)), CART_STORAGE_KEY);
///
/// let cart = repo.load()?.unwrap_or_default();
/// repo.save(&cart)?;
/// ```
pub struct CartRepository {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl CartRepository {
    /// Creates a repository over `store` using `key`.
    pub fn new(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        CartRepository {
            store,
            key: key.into(),
        }
    }

    /// Returns the storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the persisted cart.
    ///
    /// ## Returns
    /// - `Ok(None)` if nothing is stored under the key
    /// - `Ok(Some(cart))` for a valid JSON array of line items
    /// - `Err(StorageError::Decode)` for anything else
    pub fn load(&self) -> StorageResult<Option<Cart>> {
        let Some(raw) = self.store.get(&self.key)? else {
            debug!(key = %self.key, "No persisted cart");
            return Ok(None);
        };

        let cart: Cart =
            serde_json::from_str(&raw).map_err(|e| StorageError::decode(&self.key, e))?;

        debug!(key = %self.key, items = cart.len(), "Persisted cart loaded");
        Ok(Some(cart))
    }

    /// Overwrites the persisted cart with `cart`.
    pub fn save(&mut self, cart: &Cart) -> StorageResult<()> {
        let raw = serde_json::to_string(cart).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.store.set(&self.key, &raw)?;

        debug!(key = %self.key, items = cart.len(), "Cart persisted");
        Ok(())
    }
}

impl std::fmt::Debug for CartRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartRepository")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::FileStorage;
    use crate::kv::MemoryStorage;
    use rocketshoes_core::{Money, Product, ProductId, Stock, CART_STORAGE_KEY};

    fn sample_cart() -> Cart {
        let product = |id: u32, cents: i64| Product {
            id: ProductId::new(id),
            title: format!("Tênis {}", id),
            price: Money::from_cents(cents),
            image: String::new(),
        };
        let stock = |id: u32| Stock {
            id: ProductId::new(id),
            amount: 10,
        };

        Cart::new()
            .add(&product(2, 13990), &stock(2))
            .unwrap()
            .add(&product(1, 17990), &stock(1))
            .unwrap()
            .add(&product(2, 13990), &stock(2))
            .unwrap()
    }

    #[test]
    fn test_load_absent_is_none() {
        let repo = CartRepository::new(Box::new(MemoryStorage::new()), CART_STORAGE_KEY);
        assert_eq!(repo.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        let cart = sample_cart();

        let mut repo = CartRepository::new(Box::new(FileStorage::new(&path)), CART_STORAGE_KEY);
        repo.save(&cart).unwrap();

        // Fresh repository over the same file
        let reopened = CartRepository::new(Box::new(FileStorage::new(&path)), CART_STORAGE_KEY);
        let loaded = reopened.load().unwrap().unwrap();

        assert_eq!(loaded, cart);
        let ids: Vec<u32> = loaded.items().iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(loaded.items()[0].amount, 2);
    }

    #[test]
    fn test_reads_browser_written_value() {
        let raw = r#"[{"id":3,"title":"Tênis Adidas Duramo Lite 2.0","price":219.9,"image":"https://example.com/3.jpg","amount":1}]"#;
        let repo = CartRepository::new(
            Box::new(MemoryStorage::with_entry(CART_STORAGE_KEY, raw)),
            CART_STORAGE_KEY,
        );

        let cart = repo.load().unwrap().unwrap();
        assert_eq!(cart.items()[0].price.cents(), 21990);
    }

    #[test]
    fn test_invalid_value_is_decode_error() {
        let repo = CartRepository::new(
            Box::new(MemoryStorage::with_entry(CART_STORAGE_KEY, "{oops")),
            CART_STORAGE_KEY,
        );

        assert!(matches!(repo.load(), Err(StorageError::Decode { .. })));
    }
}
