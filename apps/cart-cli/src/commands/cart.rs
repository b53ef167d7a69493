//! # Cart Commands
//!
//! Runs one [`Command`] against a [`CartStore`] and renders the result.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add   ┌──────────┐  update (1..=stock)  ┌──────────┐     │
//! │  │  Empty   │──────►│ In Cart  │─────────────────────►│ In Cart  │     │
//! │  │  Cart    │       │ amount 1 │◄─────────────────────│ amount n │     │
//! │  └──────────┘       └──────────┘        add           └──────────┘     │
//! │       ▲                  │                                 │            │
//! │       └──── remove ──────┴──────────── remove ─────────────┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::Write;

use serde::Serialize;
use tracing::debug;

use rocketshoes_core::{Cart, CartItem, CartTotals, UpdateProductAmount};

use crate::error::AppResult;
use crate::notify::Notice;
use crate::state::CartStore;

use super::Command;

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

#[derive(Serialize)]
struct NoticeLine {
    notice: Notice,
    message: &'static str,
}

/// Applies `command` to the store.
pub async fn execute(store: &mut CartStore, command: &Command) {
    debug!(?command, "Running cart command");

    match *command {
        Command::Show => {}
        Command::Add { product_id } => store.add_product(product_id).await,
        Command::Remove { product_id } => store.remove_product(product_id),
        Command::Update { product_id, amount } => {
            store
                .update_product_amount(UpdateProductAmount { product_id, amount })
                .await
        }
    }
}

/// Writes the cart as a table, or as a [`CartResponse`] JSON document.
///
/// ## Table Layout
/// ```text
///   ID  PRODUTO                                  QTD      PREÇO   SUBTOTAL
///    1  Tênis de Caminhada Leve Confortável        2  R$ 179,90  R$ 359,80
///
///   Itens: 1   Unidades: 2   Total: R$ 359,80
/// ```
pub fn write_cart(out: &mut dyn Write, cart: &Cart, json: bool) -> AppResult<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, &CartResponse::from(cart))?;
        writeln!(out)?;
        return Ok(());
    }

    if cart.is_empty() {
        writeln!(out, "Carrinho vazio")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:>4}  {:<40} {:>4} {:>12} {:>12}",
        "ID", "PRODUTO", "QTD", "PREÇO", "SUBTOTAL"
    )?;
    for item in cart.items() {
        writeln!(
            out,
            "{:>4}  {:<40} {:>4} {:>12} {:>12}",
            item.id.get(),
            truncate(&item.title, 40),
            item.amount,
            item.price.to_string(),
            item.subtotal().to_string()
        )?;
    }

    let totals = cart.totals();
    writeln!(out)?;
    writeln!(
        out,
        "Itens: {}   Unidades: {}   Total: {}",
        totals.item_count, totals.total_quantity, totals.total
    )?;
    Ok(())
}

/// Writes notices one per line, or as JSON lines with code and message.
pub fn write_notices(out: &mut dyn Write, notices: &[Notice], json: bool) -> AppResult<()> {
    for &notice in notices {
        if json {
            let line = NoticeLine {
                notice,
                message: notice.message(),
            };
            serde_json::to_writer(&mut *out, &line)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", notice)?;
        }
    }
    Ok(())
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocketshoes_catalog::FixtureCatalog;
    use rocketshoes_core::{Money, Product, ProductId, Stock, CART_STORAGE_KEY};
    use rocketshoes_storage::{CartRepository, MemoryStorage};

    use crate::notify::NoticeLog;

    fn store() -> (CartStore, NoticeLog) {
        let catalog = FixtureCatalog::new(
            vec![Product {
                id: ProductId::new(1),
                title: "Tênis de Caminhada Leve Confortável".into(),
                price: Money::from_cents(17990),
                image: "a.jpg".into(),
            }],
            vec![Stock {
                id: ProductId::new(1),
                amount: 3,
            }],
        );
        let notices = NoticeLog::new();
        let repository = CartRepository::new(Box::new(MemoryStorage::new()), CART_STORAGE_KEY);
        let store = CartStore::new(Box::new(catalog), repository, Box::new(notices.clone()));
        (store, notices)
    }

    fn rendered(cart: &Cart, json: bool) -> String {
        let mut out = Vec::new();
        write_cart(&mut out, cart, json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_execute_commands() {
        let (mut store, notices) = store();

        execute(
            &mut store,
            &Command::Add {
                product_id: ProductId::new(1),
            },
        )
        .await;
        execute(
            &mut store,
            &Command::Update {
                product_id: ProductId::new(1),
                amount: 3,
            },
        )
        .await;
        assert_eq!(store.cart().items()[0].amount, 3);

        execute(
            &mut store,
            &Command::Add {
                product_id: ProductId::new(1),
            },
        )
        .await;
        assert_eq!(notices.take(), vec![Notice::StockInsufficient]);

        execute(
            &mut store,
            &Command::Remove {
                product_id: ProductId::new(1),
            },
        )
        .await;
        execute(&mut store, &Command::Show).await;
        assert!(store.cart().is_empty());
        assert!(notices.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_table_output() {
        let (mut store, _) = store();
        store.add_product(ProductId::new(1)).await;
        store.add_product(ProductId::new(1)).await;

        let text = rendered(store.cart(), false);

        assert!(text.contains("Tênis de Caminhada Leve Confortável"));
        assert!(text.contains("R$ 179,90"));
        assert!(text.contains("Total: R$ 359,80"));
    }

    #[test]
    fn test_empty_table_output() {
        assert_eq!(rendered(&Cart::new(), false), "Carrinho vazio\n");
    }

    #[tokio::test]
    async fn test_json_output() {
        let (mut store, _) = store();
        store.add_product(ProductId::new(1)).await;

        let value: serde_json::Value =
            serde_json::from_str(&rendered(store.cart(), true)).unwrap();

        assert_eq!(value["items"][0]["id"], 1);
        assert_eq!(value["items"][0]["amount"], 1);
        assert_eq!(value["totals"]["itemCount"], 1);
        assert_eq!(value["totals"]["total"], 179.9);
    }

    #[test]
    fn test_notice_output() {
        let notices = [Notice::StockInsufficient, Notice::RemoveFailed];

        let mut text = Vec::new();
        write_notices(&mut text, &notices, false).unwrap();
        assert_eq!(
            String::from_utf8(text).unwrap(),
            "Quantidade solicitada fora de estoque\nErro na remoção do produto\n"
        );

        let mut json = Vec::new();
        write_notices(&mut json, &notices[..1], true).unwrap();
        let line: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(line["notice"], "stock_insufficient");
        assert_eq!(line["message"], "Quantidade solicitada fora de estoque");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Tênis", 10), "Tênis");
        assert_eq!(truncate("Tênis VR Caminhada", 6), "Tênis…");
    }
}
