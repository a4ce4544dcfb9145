use std::default::Default;

use replica_shared::SocketConfig;

/// Contains Config properties which will be used by the Server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Used to configure the underlying component socket
    pub socket: SocketConfig,
    /// Packets from new endpoints are dropped once this many connections exist
    pub max_connections: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            socket: SocketConfig::default(),
            max_connections: 64,
        }
    }
}
