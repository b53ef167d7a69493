//! # Error Types
//!
//! Domain-specific error types for rocketshoes-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rocketshoes-core errors (this file)                                   │
//! │  ├── CoreError        - Cart rule violations                           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  rocketshoes-storage: StorageError                                     │
//! │  rocketshoes-catalog: CatalogError                                     │
//! │                                                                         │
//! │  CartStore (app) folds all of them into a Notice                       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError ─┐                                  │
//! │        CatalogError ────────────────┼──► Notice (toast)                │
//! │        StorageError ────────────────┘                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Cart rule errors.
///
/// Every variant leaves the cart it was computed from untouched; transitions
/// only produce a new cart on success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Requested quantity is not available.
    ///
    /// ## When This Occurs
    /// - Adding one more unit of an item already at the stock level
    /// - Adding a new product whose stock is zero
    /// - Updating an item to more units than the stock holds
    ///
    /// ## User Workflow
    /// ```text
    /// Update quantity (requested: 6)
    ///      │
    ///      ▼
    /// Check stock: available=5
    ///      │
    ///      ▼
    /// InsufficientStock { product_id: 1, available: 5, requested: 6 }
    ///      │
    ///      ▼
    /// UI shows: "Quantidade solicitada fora de estoque"
    /// ```
    #[error("Insufficient stock for product {product_id}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: ProductId,
        available: u32,
        requested: i64,
    },

    /// The cart has no line item for this product.
    #[error("Product {0} is not in the cart")]
    NotInCart(ProductId),

    /// A catalog record was handed to a transition for a different id.
    #[error("Record for product {found} does not match product {expected}")]
    RecordMismatch {
        expected: ProductId,
        found: ProductId,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns true for every flavour of "not enough stock".
    ///
    /// A requested quantity below one is reported to the shopper the same
    /// way as a quantity above the stock level.
    pub fn is_stock_insufficient(&self) -> bool {
        matches!(
            self,
            CoreError::InsufficientStock { .. }
                | CoreError::Validation(ValidationError::MustBePositive { .. })
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. a product id that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            product_id: ProductId::new(3),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for product 3: available 3, requested 5"
        );

        let err = CoreError::NotInCart(ProductId::new(9));
        assert_eq!(err.to_string(), "Product 9 is not in the cart");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "amount".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_stock_insufficient_classification() {
        let below_one: CoreError = ValidationError::MustBePositive {
            field: "amount".to_string(),
        }
        .into();
        assert!(below_one.is_stock_insufficient());

        let over_stock = CoreError::InsufficientStock {
            product_id: ProductId::new(1),
            available: 0,
            requested: 1,
        };
        assert!(over_stock.is_stock_insufficient());

        assert!(!CoreError::NotInCart(ProductId::new(1)).is_stock_insufficient());
    }
}
