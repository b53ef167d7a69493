//! # Validation Module
//!
//! Stock and quantity rules applied before a cart transition is accepted.
//!
//! ## Rule Order for a Quantity Update
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  update_product_amount({ productId: 1, amount: n })                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_requested_amount(n)                                           │
//! │       ├── n < 1 ? ──────────────► MustBePositive (stock-insufficient)   │
//! │       ▼                                                                 │
//! │  ensure_stock_covers(stock, n)                                          │
//! │       ├── stock.amount < n ? ───► InsufficientStock                     │
//! │       ▼                                                                 │
//! │  line item lookup (cart.rs)                                             │
//! │       ├── missing ? ────────────► NotInCart                             │
//! │       ▼                                                                 │
//! │  new cart with amount = n                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{ProductId, Stock};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a quantity requested by the shopper.
///
/// ## Rules
/// - Must be at least 1
///
/// ## Example
/// ```rust
/// use rocketshoes_core::validation::validate_requested_amount;
///
/// assert!(validate_requested_amount(1).is_ok());
/// assert!(validate_requested_amount(0).is_err());
/// assert!(validate_requested_amount(-3).is_err());
/// ```
pub fn validate_requested_amount(amount: i64) -> ValidationResult<()> {
    if amount < 1 {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    Ok(())
}

/// Checks that `stock` holds at least `requested` units.
///
/// Returns the requested amount narrowed to the stock's unit type.
pub fn ensure_stock_covers(stock: &Stock, requested: i64) -> CoreResult<u32> {
    let insufficient = || CoreError::InsufficientStock {
        product_id: stock.id,
        available: stock.amount,
        requested,
    };

    // Anything outside u32 can never be covered by a u32 stock level
    let wanted = u32::try_from(requested).map_err(|_| insufficient())?;

    if !stock.covers(wanted) {
        return Err(insufficient());
    }

    Ok(wanted)
}

/// Checks that a fetched record belongs to the product being changed.
pub fn ensure_record_matches(expected: ProductId, found: ProductId) -> CoreResult<()> {
    if expected != found {
        return Err(CoreError::RecordMismatch { expected, found });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
