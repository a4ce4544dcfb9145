//! In-memory server and client sockets joined by a channel transport, for tests that should not
//! touch the network

use std::net::SocketAddr;

use replica_client::{ClientConfig, ClientSocket};
use replica_server::{ServerConfig, ServerSocket};
use replica_shared::{transport::channel::PacketChannel, Protocol};

const FAKE_CLIENT_ADDR: &str = "127.0.0.1:12345";
const FAKE_SERVER_ADDR: &str = "127.0.0.1:54321";

/// A listening server and a client already targeting it
pub struct LocalSocketPair {
    pub server: ServerSocket,
    pub client: ClientSocket,
    pub client_addr: SocketAddr,
    pub server_addr: SocketAddr,
}

impl LocalSocketPair {
    pub fn new(protocol: impl Fn() -> Protocol) -> Self {
        let client_addr: SocketAddr = FAKE_CLIENT_ADDR.parse().unwrap();
        let server_addr: SocketAddr = FAKE_SERVER_ADDR.parse().unwrap();
        let ((server_sender, server_receiver), (client_sender, client_receiver)) =
            PacketChannel::pair(server_addr, client_addr);

        let mut server = ServerSocket::new(protocol(), ServerConfig::default());
        server.listen_with(server_sender, server_receiver);
        let mut client = ClientSocket::new(protocol(), ClientConfig::default());
        client.connect_with(server_addr, client_sender, client_receiver);

        Self {
            server,
            client,
            client_addr,
            server_addr,
        }
    }
}
