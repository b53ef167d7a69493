//! # rocketshoes-core: Pure Cart Rules for RocketShoes
//!
//! This crate is the **heart** of the RocketShoes cart. It contains the
//! stock rules and cart transitions as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      RocketShoes Cart Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront UI (rendering layer)                 │   │
//! │  │        Product grid ──► Header badge ──► Cart page              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    CartStore (apps/cart-cli)                    │   │
//! │  │      add_product, remove_product, update_product_amount         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ rocketshoes-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │   stock   │  │   │
//! │  │   │   Stock   │  │           │  │ CartItem  │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog records (`Product`, `Stock`) and `ProductId`
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - `Cart`, `CartItem` and the transitions between carts
//! - [`error`] - Domain error types
//! - [`validation`] - Requested-quantity and stock checks
//!
//! ## Example Usage
//!
//! ```rust
//! use rocketshoes_core::{Cart, Money, Product, ProductId, Stock};
//!
//! let product = Product {
//!     id: ProductId::new(1),
//!     title: "Tênis de Caminhada Leve Confortável".to_string(),
//!     price: Money::from_cents(17990),
//!     image: "https://example.com/shoe.jpg".to_string(),
//! };
//! let stock = Stock { id: ProductId::new(1), amount: 3 };
//!
//! let cart = Cart::new().add(&product, &stock).unwrap();
//! let cart = cart.add(&product, &stock).unwrap();
//!
//! assert_eq!(cart.find(ProductId::new(1)).unwrap().amount, 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem, CartTotals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key the cart is persisted under.
///
/// Shared with the storefront's browser build, which reads the same
/// `localStorage` entry.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";
