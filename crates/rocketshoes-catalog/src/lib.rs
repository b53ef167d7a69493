//! # rocketshoes-catalog: Product and Stock Lookups
//!
//! The cart never owns product or stock data. Every mutating operation asks
//! a [`ProductCatalog`] for fresh records.
//!
//! ## Lookup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Catalog Lookups                                │
//! │                                                                         │
//! │  CartStore::add_product(1)                                             │
//! │       │                                                                 │
//! │       ├──────────────► catalog.product(1) ──► GET /products/1          │
//! │       │   (concurrent)                                                  │
//! │       └──────────────► catalog.stock(1) ────► GET /stock/1             │
//! │                                                                         │
//! │  CartStore::update_product_amount({1, n})                              │
//! │       │                                                                 │
//! │       └──────────────► catalog.stock(1) ────► GET /stock/1             │
//! │                                                                         │
//! │  Any Err here becomes the operation's generic failure notice.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`traits`] - The `ProductCatalog` trait
//! - [`http`] - `HttpCatalog`, a reqwest client for the storefront API
//! - [`fixture`] - `FixtureCatalog`, an in-memory catalog loaded from a
//!   json-server database file
//! - [`error`] - Catalog error types

pub mod error;
pub mod fixture;
pub mod http;
pub mod traits;

pub use error::{CatalogError, CatalogResult};
pub use fixture::FixtureCatalog;
pub use http::HttpCatalog;
pub use traits::ProductCatalog;
