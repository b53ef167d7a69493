//! # rocketshoes-cart: Cart Store and CLI
//!
//! Wires the catalog and persistence adapters into a [`state::CartStore`]
//! and exposes it through the `rocketshoes` binary.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        rocketshoes                                      │
//! │                                                                         │
//! │  main.rs ────► parses args, sets up logging, calls run()               │
//! │                                                                         │
//! │  config.rs ──► AppConfig (defaults → rocketshoes.toml → env)           │
//! │                                                                         │
//! │  state/ ─────► CartStore (add_product, remove_product,                 │
//! │                update_product_amount)                                   │
//! │                                                                         │
//! │  notify.rs ──► Notice, Notifier, NoticeLog                             │
//! │                                                                         │
//! │  commands/ ──► show, add, remove, update + table / JSON output         │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌──────────────────┐  ┌──────────────────────┐   │
//! │  │ HttpCatalog or  │  │ FileStorage      │  │ NoticeLog            │   │
//! │  │ FixtureCatalog  │  │ (cart.json)      │  │ (printed to stderr)  │   │
//! │  └─────────────────┘  └──────────────────┘  └──────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod notify;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use rocketshoes_catalog::{FixtureCatalog, HttpCatalog, ProductCatalog};
use rocketshoes_storage::{CartRepository, FileStorage};

use crate::commands::{write_cart, write_notices, Cli};
use crate::config::{AppConfig, CatalogSource};
use crate::error::{AppError, AppResult};
use crate::notify::NoticeLog;
use crate::state::CartStore;

/// Runs one CLI invocation.
///
/// ## Startup Sequence
/// 1. Load configuration
/// 2. Build the catalog (HTTP client or fixture file)
/// 3. Open file storage and restore the cart
/// 4. Apply the command
/// 5. Print notices (stderr) and the cart (stdout)
///
/// Cart operation failures are not errors here; they surface as notices.
pub async fn run(cli: Cli) -> AppResult<()> {
    let config = AppConfig::load(cli.config.clone())?;
    info!(
        catalog = %config.catalog.source,
        key = %config.storage.key,
        "Configuration loaded"
    );

    let catalog = build_catalog(&config)?;

    let storage_path = config.storage_path()?;
    info!(path = ?storage_path, "Using cart storage");
    let repository = CartRepository::new(
        Box::new(FileStorage::new(storage_path)),
        config.storage.key.clone(),
    );

    let notices = NoticeLog::new();
    let mut store = CartStore::new(catalog, repository, Box::new(notices.clone()));

    commands::execute(&mut store, &cli.command).await;

    write_notices(&mut io::stderr().lock(), &notices.take(), cli.json)?;
    write_cart(&mut io::stdout().lock(), store.cart(), cli.json)?;
    Ok(())
}

fn build_catalog(config: &AppConfig) -> AppResult<Box<dyn ProductCatalog>> {
    match config.catalog.source {
        CatalogSource::Http => Ok(Box::new(HttpCatalog::new(
            &config.api.base_url,
            config.timeout(),
        )?)),
        CatalogSource::Fixture => {
            let path = config.catalog.fixture_path.as_deref().ok_or_else(|| {
                AppError::InvalidConfig("catalog source 'fixture' requires fixture_path".into())
            })?;
            Ok(Box::new(FixtureCatalog::from_file(path)?))
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr; stdout carries only the cart.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=rocketshoes=trace` - Show trace for rocketshoes crates only
/// - Default: WARN, INFO for rocketshoes crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,rocketshoes=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
