use std::{
    net::SocketAddr,
    thread,
    time::{Duration, Instant},
};

use replica_client::{ClientConfig, ClientSocket};
use replica_server::{ServerConfig, ServerSocket};
use replica_shared::{ConnectionId, Element, Protocol};

const POLL_INTERVAL: Duration = Duration::from_millis(2);

/// A server listening on an ephemeral loopback port and a client targeting it
pub fn udp_pair(protocol: impl Fn() -> Protocol) -> (ServerSocket, ClientSocket) {
    let mut server = ServerSocket::new(protocol(), ServerConfig::default());
    let loopback: SocketAddr = "127.0.0.1:0".parse().unwrap();
    server.listen(loopback).expect("server failed to bind");
    let server_addr = server.local_addr().unwrap();

    let mut client = ClientSocket::new(protocol(), ClientConfig::default());
    client.connect(server_addr).expect("client failed to bind");
    (server, client)
}

/// Polls the server until `expected` messages arrived or `timeout` passed.
/// Returns the number received.
pub fn poll_server_until(
    server: &mut ServerSocket,
    expected: usize,
    timeout: Duration,
    mut callback: impl FnMut(ConnectionId, &dyn Element),
) -> usize {
    let deadline = Instant::now() + timeout;
    let mut received = 0;
    while received < expected && Instant::now() < deadline {
        received += server.poll_received(&mut callback);
        if received < expected {
            thread::sleep(POLL_INTERVAL);
        }
    }
    received
}

/// Polls the client until `expected` messages arrived or `timeout` passed.
/// Returns the number received.
pub fn poll_client_until(
    client: &mut ClientSocket,
    expected: usize,
    timeout: Duration,
    mut callback: impl FnMut(&dyn Element),
) -> usize {
    let deadline = Instant::now() + timeout;
    let mut received = 0;
    while received < expected && Instant::now() < deadline {
        received += client.poll_received(&mut callback);
        if received < expected {
            thread::sleep(POLL_INTERVAL);
        }
    }
    received
}
