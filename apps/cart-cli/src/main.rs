//! # rocketshoes
//!
//! Command line entry point for the RocketShoes cart.
//!
//! ```text
//! $ rocketshoes add 1
//!   ID  PRODUTO                                  QTD        PREÇO     SUBTOTAL
//!    1  Tênis de Caminhada Leve Confortável         1    R$ 179,90    R$ 179,90
//!
//! Itens: 1   Unidades: 1   Total: R$ 179,90
//! ```

use anyhow::Context;
use clap::Parser;

use rocketshoes_cart::commands::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    rocketshoes_cart::init_tracing();

    rocketshoes_cart::run(cli)
        .await
        .context("rocketshoes failed")
}
