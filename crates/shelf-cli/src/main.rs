use std::sync::Arc;

use clap::Parser;

use shelf_server::{ServerConfig, ShelfServer};
use shelf_store::MemoryItemStore;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = cli::Cli::parse();

    let config = ServerConfig {
        bind_addr: args.bind,
        api_key: args.api_key,
    };
    let store = Arc::new(MemoryItemStore::new());

    // A failed startup (unreachable store, bind error) is fatal: log it and
    // exit without accepting traffic.
    if let Err(err) = ShelfServer::new(config, store).serve().await {
        tracing::error!("server failed: {err}");
        std::process::exit(1);
    }
    Ok(())
}
