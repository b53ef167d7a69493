//! # Cart Store
//!
//! Holds the authoritative cart and applies the three mutations against
//! fresh catalog data.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Caller                Lookups                   Transition             │
//! │  ──────                ───────                   ──────────             │
//! │                                                                         │
//! │  add_product(id) ────► product(id) ┐ concurrent  cart.add()            │
//! │                        stock(id)   ┘                                    │
//! │                                                                         │
//! │  update_product_amount ──► stock(id) ──────────► cart.set_amount()     │
//! │                                                                         │
//! │  remove_product(id) ──────────────(none)───────► cart.remove()         │
//! │                                                                         │
//! │  Ok(next) ──► repository.save(next) ──► self.cart = next               │
//! │  Err(e)   ──► notifier.notify(notice)   (cart untouched)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage is written before the in-memory cart is replaced. A failed
//! write leaves both the same as before the operation.

use std::fmt;

use thiserror::Error;
use tracing::{debug, info, warn};

use rocketshoes_catalog::{CatalogError, ProductCatalog};
use rocketshoes_core::{Cart, CartTotals, CoreError, ProductId, UpdateProductAmount};
use rocketshoes_storage::{CartRepository, StorageError};

use crate::notify::{Notice, Notifier};

/// The three cart mutations, for logs and failure notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add,
    Remove,
    Update,
}

impl Operation {
    fn failure_notice(self) -> Notice {
        match self {
            Operation::Add => Notice::AddFailed,
            Operation::Remove => Notice::RemoveFailed,
            Operation::Update => Notice::UpdateFailed,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "add_product"),
            Operation::Remove => write!(f, "remove_product"),
            Operation::Update => write!(f, "update_product_amount"),
        }
    }
}

/// Why an operation did not commit.
#[derive(Debug, Error)]
enum OperationError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl OperationError {
    fn notice(&self, operation: Operation) -> Notice {
        match self {
            OperationError::Core(err) if err.is_stock_insufficient() => {
                Notice::StockInsufficient
            }
            _ => operation.failure_notice(),
        }
    }
}

/// Shopping cart state with injected catalog, persistence and notifier.
///
/// ## Usage
/// ```rust,ignore
/// let mut store = CartStore::new(Box::new(catalog), repository, Box::new(notices.clone()));
///
/// store.add_product(ProductId::new(1)).await;
/// store.update_product_amount(UpdateProductAmount { product_id: ProductId::new(1), amount: 3 }).await;
/// store.remove_product(ProductId::new(1));
///
/// println!("{} items", store.cart().len());
/// ```
pub struct CartStore {
    cart: Cart,
    catalog: Box<dyn ProductCatalog>,
    repository: CartRepository,
    notifier: Box<dyn Notifier>,
}

impl CartStore {
    /// Creates a store whose cart is read from `repository`.
    ///
    /// A missing entry starts an empty cart. So does an unreadable one; the
    /// bad value stays in storage until the next successful commit.
    pub fn new(
        catalog: Box<dyn ProductCatalog>,
        repository: CartRepository,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        let cart = match repository.load() {
            Ok(Some(cart)) => {
                info!(items = cart.len(), "Cart restored from storage");
                cart
            }
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(key = %repository.key(), error = %e, "Ignoring unreadable stored cart");
                Cart::new()
            }
        };

        CartStore {
            cart,
            catalog,
            repository,
            notifier,
        }
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Totals for the current cart.
    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// Adds one unit of a product, or appends it with amount 1.
    pub async fn add_product(&mut self, product_id: ProductId) {
        let outcome = self.try_add(product_id).await;
        self.report(Operation::Add, product_id, outcome);
    }

    /// Removes a product's line item.
    pub fn remove_product(&mut self, product_id: ProductId) {
        let outcome = self.try_remove(product_id);
        self.report(Operation::Remove, product_id, outcome);
    }

    /// Sets a line item's amount, checked against current stock.
    pub async fn update_product_amount(&mut self, request: UpdateProductAmount) {
        let outcome = self.try_update(request).await;
        self.report(Operation::Update, request.product_id, outcome);
    }

    async fn try_add(&mut self, product_id: ProductId) -> Result<(), OperationError> {
        let (product, stock) = tokio::try_join!(
            self.catalog.product(product_id),
            self.catalog.stock(product_id)
        )?;

        let next = self.cart.add(&product, &stock)?;
        self.commit(next)
    }

    fn try_remove(&mut self, product_id: ProductId) -> Result<(), OperationError> {
        let next = self.cart.remove(product_id)?;
        self.commit(next)
    }

    async fn try_update(&mut self, request: UpdateProductAmount) -> Result<(), OperationError> {
        let stock = self.catalog.stock(request.product_id).await?;

        let next = self
            .cart
            .set_amount(request.product_id, request.amount, &stock)?;
        self.commit(next)
    }

    fn commit(&mut self, next: Cart) -> Result<(), OperationError> {
        self.repository.save(&next)?;
        self.cart = next;
        Ok(())
    }

    fn report(
        &self,
        operation: Operation,
        product_id: ProductId,
        outcome: Result<(), OperationError>,
    ) {
        match outcome {
            Ok(()) => debug!(
                %operation,
                product_id = %product_id,
                items = self.cart.len(),
                "Cart committed"
            ),
            Err(err) => {
                let notice = err.notice(operation);
                warn!(
                    %operation,
                    product_id = %product_id,
                    error = %err,
                    notice = notice.message(),
                    "Cart operation failed"
                );
                self.notifier.notify(notice);
            }
        }
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("repository", &self.repository)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
