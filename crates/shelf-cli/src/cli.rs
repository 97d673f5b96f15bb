use std::net::SocketAddr;

use clap::Parser;

#[derive(Parser)]
#[command(name = "shelfd", about = "Shelf — item service HTTP server", version)]
pub struct Cli {
    /// Address to listen on
    #[arg(long, env = "SHELF_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Static API key required on mutating requests
    #[arg(long, env = "SHELF_API_KEY")]
    pub api_key: String,
}
