//! # rocketshoes-storage: Persistence Layer for the RocketShoes Cart
//!
//! The cart is persisted the way a browser storefront persists it: one
//! string value under one key in a flat key-value store. This crate provides
//! that store behind a trait, plus the repository that turns the value into
//! a [`Cart`](rocketshoes_core::Cart) and back.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Persistence Flow                            │
//! │                                                                         │
//! │  CartStore commit(cart)                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                rocketshoes-storage (THIS CRATE)                 │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────┐        ┌───────────────────────────────┐  │   │
//! │  │   │ CartRepository │        │ KeyValueStore (trait)         │  │   │
//! │  │   │ (repository.rs)│───────►│  ├── MemoryStorage (kv.rs)    │  │   │
//! │  │   │                │        │  └── FileStorage   (file.rs)  │  │   │
//! │  │   │ Cart ⇄ JSON    │        │                               │  │   │
//! │  │   └────────────────┘        └───────────────────────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "@RocketShoes:cart" = "[{\"id\":1,...,\"amount\":2}]"                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`kv`] - `KeyValueStore` trait and `MemoryStorage`
//! - [`file`] - `FileStorage`, a JSON file standing in for `localStorage`
//! - [`repository`] - `CartRepository`
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust
//! use rocketshoes_core::{Cart, CART_STORAGE_KEY};
//! use rocketshoes_storage::{CartRepository, MemoryStorage};
//!
//! let mut repo = CartRepository::new(Box::new(MemoryStorage::new()), CART_STORAGE_KEY);
//! assert!(repo.load().unwrap().is_none());
//!
//! repo.save(&Cart::new()).unwrap();
//! assert_eq!(repo.load().unwrap(), Some(Cart::new()));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod file;
pub mod kv;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StorageError, StorageResult};
pub use file::FileStorage;
pub use kv::{KeyValueStore, MemoryStorage};
pub use repository::CartRepository;
