//! # Cart
//!
//! The cart value and the transitions between carts.
//!
//! Every transition borrows the current cart and returns a brand new one;
//! nothing here mutates a cart in place. The caller decides whether to
//! commit the result.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Transitions                                  │
//! │                                                                         │
//! │  Store Operation          Transition              New Cart              │
//! │  ───────────────          ──────────              ────────              │
//! │                                                                         │
//! │  add_product ───────────► Cart::add() ──────────► amount + 1, or        │
//! │                                                    push(amount = 1)     │
//! │                                                                         │
//! │  update_product_amount ─► Cart::set_amount() ───► amount = n            │
//! │                                                                         │
//! │  remove_product ────────► Cart::remove() ───────► item filtered out     │
//! │                                                                         │
//! │  NOTE: On Err the previous cart is still the authoritative value.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, ProductId, Stock};
use crate::validation::{ensure_record_matches, ensure_stock_covers, validate_requested_amount};

/// A line item: the product snapshot plus the units in the cart.
///
/// ## Persisted Shape
/// ```json
/// { "id": 1, "title": "...", "price": 179.9, "image": "...", "amount": 2 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    pub id: ProductId,

    pub title: String,

    /// Unit price at the time the product was first added.
    #[ts(type = "number")]
    pub price: Money,

    pub image: String,

    /// Units in cart. Always at least 1.
    pub amount: u32,
}

impl CartItem {
    /// Creates a line item from a catalog product.
    pub fn from_product(product: &Product, amount: u32) -> Self {
        CartItem {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            amount,
        }
    }

    /// Unit price × amount.
    pub fn subtotal(&self) -> Money {
        self.price * self.amount
    }

    fn with_amount(&self, amount: u32) -> Self {
        CartItem {
            amount,
            ..self.clone()
        }
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same product increments amount)
/// - Insertion order is preserved
/// - Every amount is ≥ 1 and was within stock when last validated
///
/// Serializes as a bare JSON array of [`CartItem`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Builds a cart from stored items.
    ///
    /// Items with amount 0 are dropped and duplicate ids are collapsed,
    /// keeping the first occurrence, so the invariants hold even for
    /// hand-edited storage.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut unique: Vec<CartItem> = Vec::with_capacity(items.len());
        for item in items {
            if item.amount == 0 {
                continue;
            }
            if !unique.iter().any(|existing| existing.id == item.id) {
                unique.push(item);
            }
        }
        Cart { items: unique }
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Finds the line item for a product.
    pub fn find(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns true if the product has a line item.
    pub fn contains(&self, id: ProductId) -> bool {
        self.find(id).is_some()
    }

    /// Returns the number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Derived totals for display.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Adds one unit of `product`.
    ///
    /// ## Behavior
    /// - Already in cart and `stock.amount > amount`: that item's amount + 1
    /// - Already in cart otherwise: `InsufficientStock`
    /// - Not in cart and `stock.amount > 0`: appended with amount 1
    /// - Not in cart and no stock: `InsufficientStock`
    pub fn add(&self, product: &Product, stock: &Stock) -> CoreResult<Cart> {
        ensure_record_matches(product.id, stock.id)?;

        match self.find(product.id) {
            Some(existing) => {
                if stock.amount <= existing.amount {
                    return Err(CoreError::InsufficientStock {
                        product_id: product.id,
                        available: stock.amount,
                        requested: i64::from(existing.amount) + 1,
                    });
                }
                let next = existing.amount + 1;
                Ok(self.map_item(product.id, |item| item.with_amount(next)))
            }
            None => {
                if stock.amount == 0 {
                    return Err(CoreError::InsufficientStock {
                        product_id: product.id,
                        available: 0,
                        requested: 1,
                    });
                }
                let mut items = self.items.clone();
                items.push(CartItem::from_product(product, 1));
                Ok(Cart { items })
            }
        }
    }

    /// Sets a line item's amount to exactly `requested`.
    ///
    /// ## Behavior
    /// - `requested < 1`: `Validation(MustBePositive)`
    /// - `stock.amount < requested`: `InsufficientStock`
    /// - Product not in cart: `NotInCart`
    pub fn set_amount(&self, id: ProductId, requested: i64, stock: &Stock) -> CoreResult<Cart> {
        ensure_record_matches(id, stock.id)?;
        validate_requested_amount(requested)?;
        let amount = ensure_stock_covers(stock, requested)?;

        if !self.contains(id) {
            return Err(CoreError::NotInCart(id));
        }

        Ok(self.map_item(id, |item| item.with_amount(amount)))
    }

    /// Removes a product's line item.
    ///
    /// Returns `NotInCart` when there is nothing to remove.
    pub fn remove(&self, id: ProductId) -> CoreResult<Cart> {
        if !self.contains(id) {
            return Err(CoreError::NotInCart(id));
        }

        let items = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        Ok(Cart { items })
    }

    fn map_item<F>(&self, id: ProductId, f: F) -> Cart
    where
        F: Fn(&CartItem) -> CartItem,
    {
        let items = self
            .items
            .iter()
            .map(|item| if item.id == id { f(item) } else { item.clone() })
            .collect();
        Cart { items }
    }
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        Cart::from_items(items)
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

/// Cart totals summary for the header badge and the cart page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Distinct products in the cart.
    #[ts(type = "number")]
    pub item_count: usize,

    /// Sum of all amounts.
    #[ts(type = "number")]
    pub total_quantity: u64,

    /// Σ price × amount.
    #[ts(type = "number")]
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.len(),
            total_quantity: cart.items.iter().map(|i| u64::from(i.amount)).sum(),
            total: cart.items.iter().map(CartItem::subtotal).sum(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: u32, price_cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Tênis {}", id),
            price: Money::from_cents(price_cents),
            image: format!("https://cdn.example.com/tenis{}.jpg", id),
        }
    }

    fn stock(id: u32, amount: u32) -> Stock {
        Stock {
            id: ProductId::new(id),
            amount,
        }
    }

    #[test]
    fn test_add_new_product_appends_one_unit() {
        let cart = Cart::new();
        let next = cart.add(&test_product(1, 17990), &stock(1, 5)).unwrap();

        assert!(cart.is_empty());
        assert_eq!(next.len(), 1);
        assert_eq!(next.items()[0].amount, 1);
        assert_eq!(next.items()[0].price.cents(), 17990);
    }

    #[test]
    fn test_add_existing_product_increments_by_one() {
        let product = test_product(1, 17990);
        let cart = Cart::new()
            .add(&product, &stock(1, 5))
            .unwrap()
            .add(&product, &stock(1, 5))
            .unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.find(ProductId::new(1)).unwrap().amount, 2);
    }

    #[test]
    fn test_add_does_not_touch_previous_cart() {
        let product = test_product(1, 17990);
        let one = Cart::new().add(&product, &stock(1, 5)).unwrap();
        let two = one.add(&product, &stock(1, 5)).unwrap();

        assert_eq!(one.find(ProductId::new(1)).unwrap().amount, 1);
        assert_eq!(two.find(ProductId::new(1)).unwrap().amount, 2);
    }

    #[test]
    fn test_add_existing_at_stock_limit_fails() {
        let product = test_product(1, 17990);
        let cart = Cart::new().add(&product, &stock(1, 1)).unwrap();

        let err = cart.add(&product, &stock(1, 1)).unwrap_err();
        assert!(err.is_stock_insufficient());
        assert_eq!(cart.find(ProductId::new(1)).unwrap().amount, 1);
    }

    #[test]
    fn test_add_new_product_without_stock_fails() {
        let err = Cart::new()
            .add(&test_product(1, 17990), &stock(1, 0))
            .unwrap_err();
        assert!(err.is_stock_insufficient());
    }

    #[test]
    fn test_add_rejects_mismatched_stock_record() {
        let err = Cart::new()
            .add(&test_product(1, 17990), &stock(2, 5))
            .unwrap_err();
        assert!(matches!(err, CoreError::RecordMismatch { .. }));
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let cart = Cart::new()
            .add(&test_product(3, 100), &stock(3, 5))
            .unwrap()
            .add(&test_product(1, 100), &stock(1, 5))
            .unwrap()
            .add(&test_product(2, 100), &stock(2, 5))
            .unwrap()
            .add(&test_product(1, 100), &stock(1, 5))
            .unwrap();

        let ids: Vec<u32> = cart.items().iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_set_amount_sets_exact_value() {
        let cart = Cart::new()
            .add(&test_product(1, 17990), &stock(1, 5))
            .unwrap();

        let cart = cart.set_amount(ProductId::new(1), 5, &stock(1, 5)).unwrap();
        assert_eq!(cart.find(ProductId::new(1)).unwrap().amount, 5);

        let cart = cart.set_amount(ProductId::new(1), 2, &stock(1, 5)).unwrap();
        assert_eq!(cart.find(ProductId::new(1)).unwrap().amount, 2);
    }

    #[test]
    fn test_set_amount_rules() {
        let cart = Cart::new()
            .add(&test_product(1, 17990), &stock(1, 5))
            .unwrap();

        assert!(cart
            .set_amount(ProductId::new(1), 0, &stock(1, 5))
            .unwrap_err()
            .is_stock_insufficient());
        assert!(cart
            .set_amount(ProductId::new(1), 6, &stock(1, 5))
            .unwrap_err()
            .is_stock_insufficient());
        assert_eq!(
            cart.set_amount(ProductId::new(2), 1, &stock(2, 5))
                .unwrap_err(),
            CoreError::NotInCart(ProductId::new(2))
        );
    }

    #[test]
    fn test_stock_rules_checked_before_membership() {
        // Not in cart AND over stock: the stock rule wins
        let err = Cart::new()
            .set_amount(ProductId::new(7), 10, &stock(7, 1))
            .unwrap_err();
        assert!(err.is_stock_insufficient());
    }

    #[test]
    fn test_remove_only_that_item() {
        let cart = Cart::new()
            .add(&test_product(1, 100), &stock(1, 5))
            .unwrap()
            .add(&test_product(2, 200), &stock(2, 5))
            .unwrap()
            .add(&test_product(3, 300), &stock(3, 5))
            .unwrap();

        let cart = cart.remove(ProductId::new(2)).unwrap();
        let ids: Vec<u32> = cart.items().iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);

        assert_eq!(
            cart.remove(ProductId::new(2)).unwrap_err(),
            CoreError::NotInCart(ProductId::new(2))
        );
    }

    #[test]
    fn test_totals() {
        let cart = Cart::new()
            .add(&test_product(1, 17990), &stock(1, 5))
            .unwrap()
            .add(&test_product(1, 17990), &stock(1, 5))
            .unwrap()
            .add(&test_product(2, 13990), &stock(2, 5))
            .unwrap();

        let totals = cart.totals();
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.total.cents(), 2 * 17990 + 13990);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let cart = Cart::new()
            .add(&test_product(1, 17990), &stock(1, 5))
            .unwrap();

        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "id": 1,
                "title": "Tênis 1",
                "price": 179.9,
                "image": "https://cdn.example.com/tenis1.jpg",
                "amount": 1
            }])
        );

        let back: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_deserialize_collapses_duplicate_ids() {
        let json = r#"[
            {"id": 1, "title": "a", "price": 10, "image": "", "amount": 2},
            {"id": 1, "title": "b", "price": 10, "image": "", "amount": 4}
        ]"#;
        let cart: Cart = serde_json::from_str(json).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].title, "a");
        assert_eq!(cart.items()[0].amount, 2);
    }

    #[test]
    fn test_deserialize_drops_zero_amounts() {
        let json = r#"[
            {"id": 1, "title": "a", "price": 10, "image": "", "amount": 0},
            {"id": 2, "title": "b", "price": 10, "image": "", "amount": 3},
            {"id": 1, "title": "c", "price": 10, "image": "", "amount": 1}
        ]"#;
        let cart: Cart = serde_json::from_str(json).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0].id, ProductId::new(2));
        assert_eq!(cart.items()[1].title, "c");
        assert!(cart.items().iter().all(|item| item.amount >= 1));
    }

    #[test]
    fn test_totals_saturate_for_huge_prices() {
        let product = test_product(1, 5_000_000_000_000_000_000);
        let cart = Cart::new()
            .add(&product, &stock(1, 5))
            .unwrap()
            .add(&product, &stock(1, 5))
            .unwrap();

        assert_eq!(cart.totals().total.cents(), i64::MAX);
    }

    #[test]
    fn test_huge_catalog_price_is_rejected() {
        let json = r#"{"id": 1, "title": "a", "price": 1e300, "image": ""}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }
}
