//! # State Module
//!
//! The cart store and the dependencies injected into it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                         CartStore                               │   │
//! │  │  cart: Cart  (authoritative in-memory sequence)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │          │                  │                  │                        │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────┐              │
//! │  │ProductCatalog│  │ CartRepository   │  │  Notifier    │              │
//! │  │ (lookups)    │  │ (KeyValueStore + │  │ (notices)    │              │
//! │  │              │  │  cart key)       │  │              │              │
//! │  └──────────────┘  └──────────────────┘  └──────────────┘              │
//! │                                                                         │
//! │  OWNERSHIP:                                                             │
//! │  • Mutations take &mut self, so one operation runs at a time           │
//! │  • Reads borrow the current cart                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;

pub use cart::CartStore;
