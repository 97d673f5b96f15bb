use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

/// Server configuration, injected at startup. There are no ambient
/// globals: the bind address and the shared API key both live here and are
/// passed into the router state explicitly.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Static shared secret for the mutating-request gate. A single value
    /// for all callers, no rotation or expiry.
    pub api_key: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".parse().expect("valid literal addr"),
            api_key: String::new(),
        }
    }
}
