use std::net::SocketAddr;

use log::{info, warn};

use replica_shared::{
    transport::{PacketReceiver, PacketSender},
    ComponentSocket, ConnectionId, DeliveryMode, DualMap, Element, Protocol, SocketError,
};

use crate::{ServerConfig, ServerError};

cfg_if! {
    if #[cfg(feature = "transport_udp")] {
        use replica_shared::transport::udp::UdpTransport;
    }
}

/// Receives messages from any number of remote endpoints and addresses them by
/// [`ConnectionId`].
///
/// There is no handshake: an endpoint becomes a connection when its first valid message
/// arrives.
pub struct ServerSocket {
    socket: ComponentSocket,
    connections: DualMap<SocketAddr, ConnectionId>,
    next_id: u16,
    max_connections: usize,
}

impl ServerSocket {
    pub fn new(protocol: Protocol, config: ServerConfig) -> Self {
        Self {
            socket: ComponentSocket::new(protocol, config.socket),
            connections: DualMap::new(),
            next_id: 0,
            max_connections: config.max_connections,
        }
    }

    /// Binds a UDP socket on `address`
    #[cfg(feature = "transport_udp")]
    pub fn listen(&mut self, address: SocketAddr) -> Result<(), ServerError> {
        let (sender, receiver) =
            UdpTransport::bind(address, self.socket.config().receive_buffer_bytes)
                .map_err(SocketError::from)?;
        self.listen_with(sender, receiver);
        Ok(())
    }

    /// Listens on an already bound transport
    pub fn listen_with(&mut self, sender: Box<dyn PacketSender>, receiver: Box<dyn PacketReceiver>) {
        self.socket.open(sender, receiver);
    }

    pub fn is_listening(&self) -> bool {
        self.socket.is_open()
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.socket.local_addr()
    }

    pub fn protocol(&self) -> &Protocol {
        self.socket.protocol()
    }

    /// Default channel for messages of type `T`
    pub fn set_channel<T: Element>(&mut self, channel: u8) {
        self.socket.set_channel::<T>(channel);
    }

    /// Decodes every pending message, assigning connection ids to endpoints seen for the
    /// first time. Returns how many messages were delivered.
    pub fn poll_received(
        &mut self,
        mut callback: impl FnMut(ConnectionId, &dyn Element),
    ) -> usize {
        let connections = &mut self.connections;
        let next_id = &mut self.next_id;
        let max_connections = self.max_connections;
        let mut delivered = 0;

        self.socket.poll_received(|address, message| {
            let id = match connections.get_forward(&address) {
                Some(id) => *id,
                None => {
                    if connections.len() >= max_connections {
                        warn!(
                            "dropping message from {}: {} connections already",
                            address, max_connections
                        );
                        return;
                    }
                    let Some(following) = next_id.checked_add(1) else {
                        warn!("dropping message from {}: connection ids exhausted", address);
                        return;
                    };
                    let id = ConnectionId(*next_id);
                    *next_id = following;
                    connections.insert(address, id);
                    info!("connection {} from {}", id, address);
                    id
                }
            };
            delivered += 1;
            callback(id, message);
        });

        delivered
    }

    /// Connection ids in ascending order
    pub fn connections(&self) -> Vec<ConnectionId> {
        let mut ids: Vec<ConnectionId> = self.connections.iter().map(|(_, id)| *id).collect();
        ids.sort();
        ids
    }

    pub fn connection_address(&self, id: ConnectionId) -> Option<SocketAddr> {
        self.connections.get_reverse(&id).copied()
    }

    /// Forgets a connection. A later packet from the same endpoint gets a new id.
    pub fn disconnect(&mut self, id: ConnectionId) -> bool {
        match self.connections.remove_by_value(&id) {
            Some(address) => {
                info!("connection {} ({}) disconnected", id, address);
                true
            }
            None => false,
        }
    }

    pub fn try_send_to(
        &mut self,
        id: ConnectionId,
        message: &dyn Element,
        mode: DeliveryMode,
    ) -> Result<(), ServerError> {
        if !self.socket.is_open() {
            return Err(ServerError::NotListening);
        }
        let address = self
            .connection_address(id)
            .ok_or(ServerError::UnknownConnection { id })?;
        self.socket.try_send(message, &address, mode)?;
        Ok(())
    }

    /// Returns whether the message was handed to the transport; failures are logged.
    ///
    /// # Panics
    ///
    /// Panics if the message type is not registered with the protocol.
    pub fn send_to(&mut self, id: ConnectionId, message: &dyn Element, mode: DeliveryMode) -> bool {
        match self.connection_address(id) {
            Some(address) => self.socket.send(message, &address, mode),
            None => {
                warn!("dropping {} to unknown connection {}", message.type_name(), id);
                false
            }
        }
    }

    /// Sends to every connection, returning how many sends succeeded
    pub fn broadcast(&mut self, message: &dyn Element, mode: DeliveryMode) -> usize {
        self.connections()
            .into_iter()
            .filter(|id| self.send_to(*id, message, mode))
            .count()
    }

    /// Stops listening and forgets every connection
    pub fn close(&mut self) {
        self.socket.close();
        self.connections = DualMap::new();
    }
}

#[cfg(test)]
mod tests {
    use replica_shared::{
        property, transport::channel::PacketChannel, Property, SocketConfig,
    };

    use super::*;

    property! {
        struct Ping(Property<u16>);
    }

    fn protocol() -> Protocol {
        Protocol::builder().add_message::<Ping>().build()
    }

    fn ping(value: u16) -> Ping {
        let mut ping = Ping::default();
        ping.set(value);
        ping
    }

    fn server_with_peer() -> (ServerSocket, ComponentSocket, SocketAddr) {
        let server_addr: SocketAddr = "10.0.0.1:4000".parse().unwrap();
        let peer_addr: SocketAddr = "10.0.0.2:5000".parse().unwrap();
        let ((server_sender, server_receiver), (peer_sender, peer_receiver)) =
            PacketChannel::pair(server_addr, peer_addr);

        let mut server = ServerSocket::new(protocol(), ServerConfig::default());
        server.listen_with(server_sender, server_receiver);
        let mut peer = ComponentSocket::new(protocol(), SocketConfig::default());
        peer.open(peer_sender, peer_receiver);
        (server, peer, server_addr)
    }

    #[test]
    fn first_packet_assigns_connection() {
        let (mut server, mut peer, server_addr) = server_with_peer();
        peer.send(&ping(1), &server_addr, DeliveryMode::Unreliable);
        peer.send(&ping(2), &server_addr, DeliveryMode::Unreliable);

        let mut received = Vec::new();
        let count = server.poll_received(|id, message| {
            received.push((id, *message.downcast_ref::<Ping>().unwrap().value()));
        });

        assert_eq!(count, 2);
        assert_eq!(received, vec![(ConnectionId(0), 1), (ConnectionId(0), 2)]);
        assert_eq!(server.connections(), vec![ConnectionId(0)]);
    }

    #[test]
    fn replies_reach_the_peer() {
        let (mut server, mut peer, server_addr) = server_with_peer();
        peer.send(&ping(1), &server_addr, DeliveryMode::Unreliable);
        server.poll_received(|_, _| {});

        assert!(server.send_to(ConnectionId(0), &ping(9), DeliveryMode::ReliableOrdered));

        let mut replies = Vec::new();
        peer.poll_received(|from, message| {
            assert_eq!(from, server_addr);
            replies.push(*message.downcast_ref::<Ping>().unwrap().value());
        });
        assert_eq!(replies, vec![9]);
    }

    #[test]
    fn unknown_connection() {
        let (mut server, _, _) = server_with_peer();

        assert!(matches!(
            server.try_send_to(ConnectionId(3), &ping(1), DeliveryMode::Unreliable),
            Err(ServerError::UnknownConnection { id: ConnectionId(3) })
        ));
        assert!(!server.send_to(ConnectionId(3), &ping(1), DeliveryMode::Unreliable));
    }

    #[test]
    fn not_listening() {
        let mut server = ServerSocket::new(protocol(), ServerConfig::default());

        assert!(matches!(
            server.try_send_to(ConnectionId(0), &ping(1), DeliveryMode::Unreliable),
            Err(ServerError::NotListening)
        ));
    }

    #[test]
    fn disconnect_then_reconnect_gets_new_id() {
        let (mut server, mut peer, server_addr) = server_with_peer();
        peer.send(&ping(1), &server_addr, DeliveryMode::Unreliable);
        server.poll_received(|_, _| {});

        assert!(server.disconnect(ConnectionId(0)));
        assert!(!server.disconnect(ConnectionId(0)));

        peer.send(&ping(2), &server_addr, DeliveryMode::Unreliable);
        let mut ids = Vec::new();
        server.poll_received(|id, _| ids.push(id));
        assert_eq!(ids, vec![ConnectionId(1)]);
    }

    #[test]
    fn connection_limit_drops_new_endpoints() {
        let server_addr: SocketAddr = "10.0.0.1:4000".parse().unwrap();
        let peer_addr: SocketAddr = "10.0.0.2:5000".parse().unwrap();
        let ((server_sender, server_receiver), (peer_sender, peer_receiver)) =
            PacketChannel::pair(server_addr, peer_addr);
        let mut server = ServerSocket::new(
            protocol(),
            ServerConfig {
                max_connections: 0,
                ..ServerConfig::default()
            },
        );
        server.listen_with(server_sender, server_receiver);
        let mut peer = ComponentSocket::new(protocol(), SocketConfig::default());
        peer.open(peer_sender, peer_receiver);

        peer.send(&ping(1), &server_addr, DeliveryMode::Unreliable);

        assert_eq!(server.poll_received(|_, _| panic!("over the limit")), 0);
        assert!(server.connections().is_empty());
    }
}
