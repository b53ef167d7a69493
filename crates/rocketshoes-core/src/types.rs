//! # Domain Types
//!
//! Catalog records the cart is built from.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Product      │   │      Stock      │   │ UpdateProductAmount │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id             │   │  id             │   │  product_id         │   │
//! │  │  title          │   │  amount         │   │  amount (requested) │   │
//! │  │  price (Money)  │   │  (available)    │   │                     │   │
//! │  │  image          │   │                 │   │                     │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! │        GET /products/{id}    GET /stock/{id}        from the UI         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both records are owned by the remote catalog. The cart never caches
//! them; every mutating operation fetches them again.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Numeric product identifier shared by products, stock and line items.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(ProductId)
            .map_err(|e| ValidationError::InvalidFormat {
                field: "product id".to_string(),
                reason: e.to_string(),
            })
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product as served by `GET /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    pub id: ProductId,

    /// Display name.
    pub title: String,

    /// Unit price. Serialized as a decimal number.
    #[ts(type = "number")]
    pub price: Money,

    /// Image URL.
    pub image: String,
}

// =============================================================================
// Stock
// =============================================================================

/// Units available for purchase, as served by `GET /stock/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Stock {
    pub id: ProductId,

    /// Units available.
    pub amount: u32,
}

impl Stock {
    /// Checks whether `quantity` units can be held in a cart.
    #[inline]
    pub fn covers(&self, quantity: u32) -> bool {
        self.amount >= quantity
    }
}

// =============================================================================
// Update Request
// =============================================================================

/// Request to set a line item's quantity to an exact value.
///
/// `amount` is signed: the UI can submit zero or a negative number, which
/// the cart rejects as insufficient stock rather than as a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    #[ts(type = "number")]
    pub amount: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_parsing() {
        assert_eq!("42".parse::<ProductId>().unwrap(), ProductId::new(42));
        assert_eq!(" 7 ".parse::<ProductId>().unwrap(), ProductId::new(7));
        assert!("abc".parse::<ProductId>().is_err());
        assert!("-1".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_product_from_catalog_json() {
        let json = r#"{
            "id": 1,
            "title": "Tênis de Caminhada Leve Confortável",
            "price": 179.9,
            "image": "https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/modulo-redux/tenis1.jpg"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price.cents(), 17990);
    }

    #[test]
    fn test_stock_covers() {
        let stock = Stock {
            id: ProductId::new(1),
            amount: 3,
        };
        assert!(stock.covers(0));
        assert!(stock.covers(3));
        assert!(!stock.covers(4));
    }

    #[test]
    fn test_update_request_uses_camel_case() {
        let req: UpdateProductAmount =
            serde_json::from_str(r#"{"productId": 2, "amount": -1}"#).unwrap();
        assert_eq!(req.product_id, ProductId::new(2));
        assert_eq!(req.amount, -1);
    }
}
