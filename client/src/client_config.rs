use std::default::Default;

use replica_shared::SocketConfig;

/// Contains Config properties which will be used by a Client
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Used to configure the underlying component socket
    pub socket: SocketConfig,
}
