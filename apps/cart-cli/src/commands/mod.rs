//! # Commands Module
//!
//! The `rocketshoes` command line surface.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (argument parsing)
//! └── cart.rs     ◄─── Running a command against the store, rendering output
//! ```
//!
//! ## Invocation
//! ```text
//! rocketshoes [--config PATH] [--json] show
//! rocketshoes [--config PATH] [--json] add <ID>
//! rocketshoes [--config PATH] [--json] remove <ID>
//! rocketshoes [--config PATH] [--json] update <ID> <AMOUNT>
//! ```
//!
//! Each run restores the persisted cart, applies at most one operation,
//! prints notices to stderr and the resulting cart to stdout.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use rocketshoes_core::ProductId;

pub mod cart;

pub use cart::{execute, write_cart, write_notices, CartResponse};

/// RocketShoes shopping cart.
#[derive(Debug, Parser)]
#[command(name = "rocketshoes", version, about)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "ROCKETSHOES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the cart and notices as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the cart
    Show,

    /// Add one unit of a product
    Add { product_id: ProductId },

    /// Remove a product from the cart
    Remove { product_id: ProductId },

    /// Set a product's quantity
    Update {
        product_id: ProductId,

        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_update_with_negative_amount() {
        let cli = Cli::try_parse_from(["rocketshoes", "--json", "update", "3", "-1"]).unwrap();

        assert!(cli.json);
        match cli.command {
            Command::Update { product_id, amount } => {
                assert_eq!(product_id, ProductId::new(3));
                assert_eq!(amount, -1);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["rocketshoes", "add", "shoe"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["rocketshoes", "show", "--config", "/tmp/r.toml"]).unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/r.toml")));
        assert!(matches!(cli.command, Command::Show));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
